//! Provider traits and types

use crate::error::{ConfigError, ProviderError};
use crate::network::HttpClient;
use crate::query::LicenseFilter;
use crate::results::Photo;
use async_trait::async_trait;
use std::collections::BTreeMap;
use url::Url;

/// HTTP request to be made for a provider
///
/// Parameters are kept sorted so that equal inputs always produce an
/// identical request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRequest {
    /// URL to request
    pub url: String,
    /// Request headers
    pub headers: BTreeMap<String, String>,
    /// Query parameters
    pub params: BTreeMap<String, String>,
}

impl ProviderRequest {
    /// Create a GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: BTreeMap::new(),
            params: BTreeMap::new(),
        }
    }

    /// Add a header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add a query parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Look up a query parameter
    pub fn param_value(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(|v| v.as_str())
    }
}

/// HTTP response from a provider request
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    /// HTTP status code
    pub status: u16,
    /// Status line, e.g. "403 Forbidden"
    pub status_line: String,
    /// Response body as text
    pub text: String,
}

impl ProviderResponse {
    /// Build a response from a status code and body
    pub fn new(status: u16, text: impl Into<String>) -> Self {
        let status_line = reqwest::StatusCode::from_u16(status)
            .map(|code| code.to_string())
            .unwrap_or_else(|_| status.to_string());

        Self {
            status,
            status_line,
            text: text.into(),
        }
    }

    /// Parse the body as JSON, mapping schema mismatches to `MalformedResponse`
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, ProviderError> {
        serde_json::from_str(&self.text)
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))
    }

    /// Check if the provider signalled an error (4xx/5xx)
    pub fn is_error(&self) -> bool {
        self.status >= 400
    }
}

/// Validate a provider endpoint, which must be an absolute http(s) URL
pub fn parse_endpoint(provider: &str, endpoint: &str) -> Result<Url, ConfigError> {
    let invalid = |message: String| ConfigError::InvalidEndpoint {
        provider: provider.to_string(),
        message,
    };

    let url = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(invalid(format!("unsupported endpoint {}", endpoint)));
    }
    Ok(url)
}

/// An external image-search service
///
/// Adapters build a request from the shared `(text, license)` pair and
/// normalize the native response into `Photo` records. `query` ties the two
/// together over the shared transport.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Provider name, used in `Photo::source` and in status reports
    fn name(&self) -> &str;

    /// Build the HTTP request for a search. Must be deterministic.
    fn request(&self, text: &str, license: LicenseFilter) -> ProviderRequest;

    /// Parse a successful response into photos
    fn response(&self, response: ProviderResponse) -> Result<Vec<Photo>, ProviderError>;

    /// Run one search against the provider
    async fn query(
        &self,
        client: &HttpClient,
        text: &str,
        license: LicenseFilter,
    ) -> Result<Vec<Photo>, ProviderError> {
        let request = self.request(text, license);
        let response = client.execute(request).await?;

        if response.is_error() {
            return Err(ProviderError::Upstream(response.status_line));
        }

        self.response(response)
    }
}
