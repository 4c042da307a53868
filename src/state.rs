//! Shared application state handed to every handler.

use crate::config::Config;
use crate::storage::Storage;
use std::sync::Arc;

/// State shared across handlers and the auth guard via Axum's `State`
/// extractor.
///
/// The storage backend is held behind the abstract [`Storage`] contract so
/// handlers stay independent of the backing engine; tests swap in an
/// in-memory implementation.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>, config: Arc<Config>) -> Self {
        Self { storage, config }
    }
}
