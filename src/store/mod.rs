pub mod consistency;
pub mod document;
pub mod json_file;
pub mod merge;
pub mod repository;

pub use document::Document;
pub use json_file::JsonStore;

use thiserror::Error;

/// Record-store errors. Read and write failures both mean the backing
/// document is unavailable; parse failures mean it is corrupt. `NotFound`
/// is raised only when an update names an id absent from its collection;
/// delete is idempotent and never raises it.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(#[from] std::io::Error),

    #[error("storage corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("update payload does not fit the record shape: {0}")]
    InvalidPayload(serde_json::Error),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: u64 },
}
