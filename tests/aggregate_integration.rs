//! End-to-end tests for the aggregate search pipeline.
//!
//! Providers are loaded from settings exactly as at startup, but their
//! endpoints point at wiremock servers serving recorded fixtures.

use photo_aggregator::config::{ProviderConfig, Settings};
use photo_aggregator::network::HttpClient;
use photo_aggregator::providers::ProviderLoader;
use photo_aggregator::{Search, SearchError};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FLICKR_DOGS: &str = include_str!("fixtures/flickr/dogs.json");
const FLICKR_MALFORMED: &str = include_str!("fixtures/flickr/malformed.json");
const FLICKR_INVALID_KEY: &str = include_str!("fixtures/flickr/invalid_key.json");
const BING_DOGS: &str = include_str!("fixtures/bing/dogs.json");

const FLICKR_PATH: &str = "/services/rest/";
const BING_PATH: &str = "/bing/v7.0/images/search";

fn settings(flickr: &MockServer, bing: &MockServer) -> Settings {
    let mut settings = Settings::default();
    settings.outgoing.request_timeout = 2.0;
    settings.providers.flickr = ProviderConfig {
        base_url: Some(format!("{}{}", flickr.uri(), FLICKR_PATH)),
        denylist: Some(vec![r"farm5\.staticflickr\.com".to_string()]),
        ..ProviderConfig::with_key("flickr-key")
    };
    settings.providers.bing = ProviderConfig {
        base_url: Some(format!("{}{}", bing.uri(), BING_PATH)),
        ..ProviderConfig::with_key("bing-key")
    };
    settings
}

fn search(settings: &Settings) -> Search {
    let client = HttpClient::with_settings(&settings.outgoing).unwrap();
    let registry = ProviderLoader::load(settings).unwrap();
    Search::new(client, Arc::new(registry))
}

#[tokio::test]
async fn flickr_modify_drops_denylisted_record() {
    let flickr = MockServer::start().await;
    let bing = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(FLICKR_PATH))
        .and(query_param("text", "dogs"))
        .and(query_param("license", "1,2,4,5,7,8,9,10"))
        .and(query_param("api_key", "flickr-key"))
        .and(query_param("method", "flickr.photos.search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FLICKR_DOGS))
        .expect(1)
        .mount(&flickr)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(BING_DOGS))
        .expect(0)
        .mount(&bing)
        .await;

    let search = search(&settings(&flickr, &bing));
    let response = search.search("dogs", "modify", &["flickr"]).await.unwrap();

    assert_eq!(response.results.len(), 2);
    assert!(response.results.iter().all(|p| p.source == "flickr"));
    assert_eq!(response.status.len(), 1);
    assert_eq!(response.status["flickr"], "ok");
}

#[tokio::test]
async fn malformed_flickr_does_not_affect_bing() {
    let flickr = MockServer::start().await;
    let bing = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(FLICKR_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(FLICKR_MALFORMED))
        .mount(&flickr)
        .await;

    Mock::given(method("GET"))
        .and(path(BING_PATH))
        .and(query_param("q", "dogs"))
        .and(query_param("license", "Any"))
        .and(header("Ocp-Apim-Subscription-Key", "bing-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(BING_DOGS))
        .expect(1)
        .mount(&bing)
        .await;

    let search = search(&settings(&flickr, &bing));
    let response = search.search("dogs", "", &["flickr", "bing"]).await.unwrap();

    // The Bing fixture holds one clean record and one from pixabay
    assert_eq!(response.results.len(), 1);
    assert_eq!(response.results[0].source, "bing");
    assert_eq!(response.status["bing"], "ok");
    assert!(
        response.status["flickr"].starts_with("malformed response"),
        "{}",
        response.status["flickr"]
    );
}

#[tokio::test]
async fn default_set_queries_every_provider() {
    let flickr = MockServer::start().await;
    let bing = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FLICKR_DOGS))
        .expect(1)
        .mount(&flickr)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(BING_DOGS))
        .expect(1)
        .mount(&bing)
        .await;

    let search = search(&settings(&flickr, &bing));
    let none: [&str; 0] = [];
    let response = search.search("dogs", "any", &none).await.unwrap();

    assert_eq!(response.results.len(), 3);
    assert_eq!(response.status["flickr"], "ok");
    assert_eq!(response.status["bing"], "ok");
}

#[tokio::test]
async fn upstream_errors_are_reported_per_provider() {
    let flickr = MockServer::start().await;
    let bing = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FLICKR_INVALID_KEY))
        .mount(&flickr)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"error": "denied"}"#))
        .mount(&bing)
        .await;

    let search = search(&settings(&flickr, &bing));
    let response = search.search("dogs", "share", &["bing", "flickr"]).await.unwrap();

    assert!(response.results.is_empty());
    assert_eq!(response.status["bing"], "401 Unauthorized");
    assert_eq!(
        response.status["flickr"],
        "100: Invalid API Key (Key has invalid format)"
    );
}

#[tokio::test]
async fn slow_provider_times_out_alone() {
    let flickr = MockServer::start().await;
    let bing = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(FLICKR_DOGS)
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&flickr)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(BING_DOGS))
        .mount(&bing)
        .await;

    let mut settings = settings(&flickr, &bing);
    settings.outgoing.request_timeout = 0.5;
    let search = search(&settings);

    let response = search.search("dogs", "", &["flickr", "bing"]).await.unwrap();

    assert_eq!(response.results.len(), 1);
    assert_eq!(response.status["bing"], "ok");
    assert!(response.status["flickr"].starts_with("transport error"));
}

#[tokio::test]
async fn unreachable_provider_is_transport_error() {
    let flickr = MockServer::start().await;
    let bing = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FLICKR_DOGS))
        .mount(&flickr)
        .await;

    let mut settings = settings(&flickr, &bing);
    settings.providers.bing.base_url = Some(format!("http://127.0.0.1:9{}", BING_PATH));
    let search = search(&settings);

    let none: [&str; 0] = [];
    let response = search.search("dogs", "", &none).await.unwrap();

    assert_eq!(response.results.len(), 2);
    assert!(response.status["bing"].starts_with("transport error"));
}

#[tokio::test]
async fn transport_error_does_not_expose_api_key() {
    let flickr = MockServer::start().await;
    let bing = MockServer::start().await;

    let mut settings = settings(&flickr, &bing);
    settings.providers.flickr = ProviderConfig {
        base_url: Some(format!("http://127.0.0.1:9{}", FLICKR_PATH)),
        ..ProviderConfig::with_key("SECRET-FLICKR-KEY")
    };
    let search = search(&settings);

    let response = search.search("dogs", "", &["flickr"]).await.unwrap();

    assert!(response.status["flickr"].starts_with("transport error"));
    let body = serde_json::to_string(&response).unwrap();
    assert!(!body.contains("SECRET-FLICKR-KEY"), "{body}");
}

#[tokio::test]
async fn validation_errors_reach_no_provider() {
    let flickr = MockServer::start().await;
    let bing = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&flickr)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&bing)
        .await;

    let search = search(&settings(&flickr, &bing));
    let none: [&str; 0] = [];

    assert_eq!(
        search.search("", "modify", &none).await.unwrap_err(),
        SearchError::EmptyQuery
    );
    assert_eq!(
        search.search("dogs", "free", &none).await.unwrap_err(),
        SearchError::UnknownLicense("free".to_string())
    );
    assert_eq!(
        search.search("dogs", "", &["flickr", "pexels"]).await.unwrap_err(),
        SearchError::ProviderNotFound("pexels".to_string())
    );
}
