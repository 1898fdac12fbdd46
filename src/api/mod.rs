//! HTTP API layer.
//!
//! Exposes the record store as REST-ish endpoints under `/api/`. One
//! module per collection plus the whole-document, health and
//! consistency routes. The router is composable; `api_router()` returns
//! a `Router` that can be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;
pub mod validate;

pub use router::api_router;
pub use server::{start_server, ApiServer, ApiSession};
pub use types::ApiContext;
