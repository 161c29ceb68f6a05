//! Application state shared across handlers

use crate::network::HttpClient;
use crate::providers::ProviderRegistry;
use crate::search::Search;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Provider registry
    pub registry: Arc<ProviderRegistry>,
    /// Search executor
    pub search: Arc<Search>,
}

impl AppState {
    /// Create new application state
    pub fn new(registry: ProviderRegistry, client: HttpClient) -> Self {
        let registry = Arc::new(registry);
        let search = Arc::new(Search::new(client, registry.clone()));

        Self { registry, search }
    }
}
