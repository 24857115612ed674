use std::sync::Arc;

use crate::{presentation::DEFAULT_STORE_NAME, repository::CatalogRepository};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogRepository>,
    /// Readiness flag computed once from `BackendConfig::is_configured`.
    ///
    /// The server binary exits before building a state without configuration,
    /// so `false` only occurs in states assembled by embedders and tests.
    pub backend_ready: bool,
    pub store_name: String,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogRepository>, backend_ready: bool) -> Self {
        Self {
            catalog,
            backend_ready,
            store_name: DEFAULT_STORE_NAME.to_string(),
        }
    }

    pub fn with_store_name(mut self, store_name: impl Into<String>) -> Self {
        self.store_name = store_name.into();
        self
    }
}
