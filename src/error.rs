//! Error types
//!
//! Errors are split by the stage that produces them: request validation,
//! a single provider invocation, and startup configuration.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Caller errors, raised before any provider is contacted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The query text is missing or blank
    #[error("specify query")]
    EmptyQuery,

    /// The license filter is not one of the recognized values
    #[error("unknown license")]
    UnknownLicense(String),

    /// A requested provider is not registered
    #[error("unknown source: {0}")]
    ProviderNotFound(String),
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

/// Failures local to one provider invocation
///
/// These never fail an aggregate search; their message ends up in the
/// provider's status entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Network or I/O failure reaching the provider
    #[error("transport error: {0}")]
    Transport(String),

    /// The provider answered with an error status
    #[error("{0}")]
    Upstream(String),

    /// The body did not match the provider's schema
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for ProviderError {
    /// The request URL is stripped; it can carry an API key in its query.
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Transport(err.without_url().to_string())
    }
}

/// Startup errors; the process stops before serving
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid endpoint for {provider}: {message}")]
    InvalidEndpoint { provider: String, message: String },

    #[error("missing API key for {0}")]
    MissingCredential(String),

    #[error("invalid denylist pattern for {provider}: {message}")]
    InvalidDenylist { provider: String, message: String },

    #[error("no providers enabled")]
    NoProviders,

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}
