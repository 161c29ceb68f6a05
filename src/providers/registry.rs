//! Provider registry for resolving provider names

use super::traits::Provider;
use crate::error::SearchError;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of all configured providers
///
/// Built once at startup and shared read-only behind an `Arc`.
#[derive(Default)]
pub struct ProviderRegistry {
    /// Providers by name
    providers: HashMap<String, Arc<dyn Provider>>,
}

impl ProviderRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider under its own name, replacing any previous one
    pub fn register(&mut self, provider: Arc<dyn Provider>) {
        let name = provider.name().to_string();
        self.providers.insert(name, provider);
    }

    /// Get a provider by name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Provider>> {
        self.providers.get(name)
    }

    /// Get a provider by name, failing for unregistered names
    pub fn lookup(&self, name: &str) -> Result<Arc<dyn Provider>, SearchError> {
        self.providers
            .get(name)
            .cloned()
            .ok_or_else(|| SearchError::ProviderNotFound(name.to_string()))
    }

    /// Providers queried when a request names none: every registered one
    pub fn default_providers(&self) -> Vec<String> {
        self.names().into_iter().map(String::from).collect()
    }

    /// Get all provider names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.providers.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Check if a provider exists
    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    /// Get number of registered providers
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.names())
            .finish()
    }
}
