//! photo-aggregator: concurrent image search across Flickr and Bing
//!
//! A single search request is fanned out to every selected provider at
//! once. Each provider's native response is normalized into a common
//! [`Photo`] record, and the merged photos come back alongside a status
//! entry per provider, so one failing provider never sinks the others.

pub mod config;
pub mod error;
pub mod network;
pub mod providers;
pub mod query;
pub mod results;
pub mod search;
pub mod web;

pub use config::Settings;
pub use error::{ConfigError, ProviderError, SearchError};
pub use providers::{Provider, ProviderRegistry};
pub use query::LicenseFilter;
pub use results::{License, Photo, SearchResponse};
pub use search::{Search, SearchQuery};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default timeout for provider requests in seconds
pub const DEFAULT_TIMEOUT: u64 = 10;
