//! Search execution and orchestration

use super::models::SearchQuery;
use crate::error::SearchError;
use crate::network::HttpClient;
use crate::providers::{Provider, ProviderRegistry};
use crate::results::SearchResponse;
use futures::stream::{FuturesUnordered, StreamExt};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Search executor that fans a query out to providers and merges the answers
pub struct Search {
    /// HTTP client shared by every provider invocation
    client: HttpClient,
    /// Provider registry
    registry: Arc<ProviderRegistry>,
}

impl Search {
    /// Create a new search executor
    pub fn new(client: HttpClient, registry: Arc<ProviderRegistry>) -> Self {
        Self { client, registry }
    }

    /// Validate raw caller input and run the search
    pub async fn search<S: AsRef<str>>(
        &self,
        query: &str,
        license: &str,
        providers: &[S],
    ) -> Result<SearchResponse, SearchError> {
        let search_query = SearchQuery::parse(query, license, providers)?;
        self.aggregate(&search_query).await
    }

    /// Resolve the providers a query targets
    ///
    /// An empty provider list selects the registry's default set.
    pub fn resolve(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<(String, Arc<dyn Provider>)>, SearchError> {
        let names = if query.providers.is_empty() {
            self.registry.default_providers()
        } else {
            query.providers.clone()
        };

        names
            .into_iter()
            .map(|name| {
                let provider = self.registry.lookup(&name)?;
                Ok((name, provider))
            })
            .collect()
    }

    /// Query every resolved provider concurrently and merge the outcomes
    ///
    /// Fails only when a provider name does not resolve. Once fan-out starts,
    /// every provider gets exactly one status entry and no provider error
    /// escapes.
    pub async fn aggregate(&self, query: &SearchQuery) -> Result<SearchResponse, SearchError> {
        let providers = self.resolve(query)?;
        let start = Instant::now();

        info!(
            "Executing search '{}' (license '{}') on {} providers",
            query.query,
            query.license,
            providers.len()
        );

        // One task per provider; each starts running as soon as it is spawned
        let mut pending: FuturesUnordered<_> = providers
            .into_iter()
            .map(|(name, provider)| {
                let client = self.client.clone();
                let text = query.query.clone();
                let license = query.license;

                let handle = tokio::spawn(async move {
                    let started = Instant::now();
                    let outcome = provider.query(&client, &text, license).await;
                    (outcome, started.elapsed())
                });

                async move { (name, handle.await) }
            })
            .collect();

        let mut response = SearchResponse::new();

        // Collect in completion order until every task has reported
        while let Some((name, joined)) = pending.next().await {
            match joined {
                Ok((Ok(photos), elapsed)) => {
                    debug!(
                        "Provider {} returned {} photos in {:?}",
                        name,
                        photos.len(),
                        elapsed
                    );
                    response.record(name, Ok(photos));
                }
                Ok((Err(e), elapsed)) => {
                    warn!("Provider {} failed after {:?}: {}", name, elapsed, e);
                    response.record(name, Err(e));
                }
                Err(e) => {
                    error!("Provider task for {} did not complete: {}", name, e);
                    response.record_failure(name, format!("provider task failed: {}", e));
                }
            }
        }

        info!(
            "Search '{}' finished in {:?}: {} photos, {} failed providers",
            query.query,
            start.elapsed(),
            response.result_count(),
            response.failed_providers().len()
        );

        Ok(response)
    }
}
