//! HTTP request handlers

use super::state::AppState;
use crate::error::SearchError;
use crate::results::SearchResponse;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};

/// Query parameters for search
///
/// `sources` may be repeated (`sources=a&sources=b`) or comma-separated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    /// Search query
    pub q: String,
    /// License filter
    pub license: String,
    /// Providers to query
    pub sources: Vec<String>,
}

impl SearchParams {
    /// Collect parameters from raw query pairs
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "q" => params.q = value,
                "license" => params.license = value,
                "sources" => params.sources.extend(
                    value
                        .split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(String::from),
                ),
                _ => {}
            }
        }
        params
    }
}

/// Search handler
pub async fn search(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<SearchResponse>, SearchError> {
    let params = SearchParams::from_pairs(pairs);

    match state
        .search
        .search(&params.q, &params.license, params.sources.as_slice())
        .await
    {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::debug!("Rejected search: {}", e);
            Err(e)
        }
    }
}

/// Health check handler
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
        "providers": state.registry.names(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use crate::network::HttpClient;
    use crate::providers::{Provider, ProviderRegistry, ProviderRequest, ProviderResponse};
    use crate::query::LicenseFilter;
    use crate::results::Photo;
    use crate::web::{create_router, AppState};
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct StubProvider;

    #[async_trait]
    impl Provider for StubProvider {
        fn name(&self) -> &str {
            "stub"
        }

        fn request(&self, text: &str, _license: LicenseFilter) -> ProviderRequest {
            ProviderRequest::get("http://stub.invalid/").param("q", text)
        }

        fn response(&self, _response: ProviderResponse) -> Result<Vec<Photo>, ProviderError> {
            Ok(vec![])
        }

        async fn query(
            &self,
            _client: &HttpClient,
            text: &str,
            _license: LicenseFilter,
        ) -> Result<Vec<Photo>, ProviderError> {
            Ok(vec![Photo::new("stub", "https://stub.test/1.jpg", text)])
        }
    }

    fn app() -> axum::Router {
        let mut registry = ProviderRegistry::new();
        registry.register(Arc::new(StubProvider));
        let state = AppState::new(registry, HttpClient::new().unwrap());
        create_router(state)
    }

    async fn get(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[test]
    fn test_params_from_pairs() {
        let pairs = vec![
            ("q".to_string(), "dogs".to_string()),
            ("sources".to_string(), "flickr, bing".to_string()),
            ("sources".to_string(), "extra".to_string()),
            ("page".to_string(), "2".to_string()),
        ];
        let params = SearchParams::from_pairs(pairs);

        assert_eq!(params.q, "dogs");
        assert_eq!(params.license, "");
        assert_eq!(params.sources, vec!["flickr", "bing", "extra"]);
    }

    #[tokio::test]
    async fn test_search_ok() {
        let (status, body) = get("/?q=dogs&license=modify").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"]["stub"], "ok");
        assert_eq!(body["results"][0]["title"], "dogs");
        assert_eq!(body["results"][0]["source"], "stub");
    }

    #[tokio::test]
    async fn test_missing_query() {
        let (status, body) = get("/?license=any").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "specify query");
    }

    #[tokio::test]
    async fn test_unknown_license() {
        let (status, body) = get("/?q=dogs&license=gpl").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "unknown license");
    }

    #[tokio::test]
    async fn test_unknown_source() {
        let (status, body) = get("/?q=dogs&sources=yahoo").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "unknown source: yahoo");
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get("/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["providers"][0], "stub");
    }
}
