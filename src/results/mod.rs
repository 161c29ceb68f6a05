//! Result types for aggregated searches
//!
//! `Photo` is the common shape every provider normalizes into;
//! `SearchResponse` merges them with a per-provider status report.

mod container;
mod types;

pub use container::{SearchResponse, STATUS_OK};
pub use types::*;
