//! Shared state for the API layer.

use std::sync::Arc;

use crate::store::JsonStore;

/// Shared context for all API routes. Wraps the record store; cloning
/// is cheap and every handler sees the same file and write mutex.
#[derive(Clone)]
pub struct ApiContext {
    pub store: Arc<JsonStore>,
}

impl ApiContext {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}
