//! JSON document persistence.
//!
//! One flat file holds the whole document. Every mutation is a full
//! load, mutate, save cycle behind a single async mutex, and each save
//! goes through a temp file plus rename in the same directory, so a
//! reader only ever observes the previous or the next complete document.

use std::fs;
use std::path::{Path, PathBuf};

use tokio::sync::Mutex;

use crate::store::{Document, StoreError};

pub struct JsonStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonStore {
    /// Open the store at `path`, creating parent directories and an
    /// empty document on first run.
    pub fn open(path: PathBuf) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let store = Self {
            path,
            write_lock: Mutex::new(()),
        };
        if !store.path.exists() {
            store.save(&Document::default())?;
            tracing::info!(path = %store.path.display(), "created empty data file");
        }
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the current document. Takes no lock: saves are atomic, so a
    /// concurrent writer cannot expose a partially written file.
    pub fn load(&self) -> Result<Document, StoreError> {
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, document: &Document) -> Result<(), StoreError> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let tmp = tempfile::NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(tmp.as_file(), document)?;
        tmp.persist(&self.path)
            .map_err(|e| StoreError::Unavailable(e.error))?;
        Ok(())
    }

    /// Run one mutation as a full load, mutate, save cycle under the
    /// store's write mutex. The save happens only when `apply` succeeds:
    /// either every in-memory fixup reaches the file, or none do.
    pub async fn mutate<T>(
        &self,
        apply: impl FnOnce(&mut Document) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut document = self.load()?;
        let result = apply(&mut document)?;
        self.save(&document)?;
        Ok(result)
    }
}
