//! Merged response for one aggregate search

use super::types::Photo;
use crate::error::ProviderError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Status value recorded for a provider that answered without error
pub const STATUS_OK: &str = "ok";

/// Merged photos plus one status entry per queried provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Provider name -> "ok" or the error message
    pub status: BTreeMap<String, String>,
    /// Photos from every successful provider, in arrival order
    pub results: Vec<Photo>,
}

impl SearchResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one provider's outcome, appending its photos on success
    pub fn record(
        &mut self,
        provider: impl Into<String>,
        outcome: Result<Vec<Photo>, ProviderError>,
    ) {
        let provider = provider.into();
        match outcome {
            Ok(photos) => {
                self.results.extend(photos);
                self.status.insert(provider, STATUS_OK.to_string());
            }
            Err(err) => {
                self.status.insert(provider, err.to_string());
            }
        }
    }

    /// Record a failure that has no typed provider error (e.g. a panicked task)
    pub fn record_failure(&mut self, provider: impl Into<String>, message: impl Into<String>) {
        self.status.insert(provider.into(), message.into());
    }

    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    /// Names of providers that did not answer "ok"
    pub fn failed_providers(&self) -> Vec<&str> {
        self.status
            .iter()
            .filter(|(_, status)| status.as_str() != STATUS_OK)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}
