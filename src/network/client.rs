//! HTTP client for making requests to image-search providers

use crate::config::OutgoingSettings;
use crate::error::{ConfigError, ProviderError};
use crate::providers::{ProviderRequest, ProviderResponse};
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("photo-aggregator/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP client
///
/// Cloning is cheap; all clones share one connection pool.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    timeout: Duration,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self, ConfigError> {
        let timeout = Duration::from_secs_f64(settings.request_timeout);
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(settings.pool_maxsize)
            .user_agent(USER_AGENT)
            .gzip(true)
            .brotli(true)
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;

        Ok(Self { client, timeout })
    }

    /// Request timeout applied to every call
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Execute a provider request
    ///
    /// Only I/O failures are errors here; the status code is left for the
    /// caller to judge.
    pub async fn execute(
        &self,
        request: ProviderRequest,
    ) -> Result<ProviderResponse, ProviderError> {
        let mut req_builder = self.client.get(&request.url);

        for (key, value) in &request.headers {
            req_builder = req_builder.header(key, value);
        }

        if !request.params.is_empty() {
            req_builder = req_builder.query(&request.params);
        }

        let response = req_builder.send().await?;
        debug!("GET {} -> {}", response.url().path(), response.status());

        Self::parse_response(response).await
    }

    /// Parse response into ProviderResponse
    async fn parse_response(response: Response) -> Result<ProviderResponse, ProviderError> {
        let status = response.status();
        let text = response.text().await?;

        Ok(ProviderResponse {
            status: status.as_u16(),
            status_line: status.to_string(),
            text,
        })
    }
}
