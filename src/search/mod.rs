//! Search orchestration module
//!
//! Validates requests, fans them out to providers concurrently and merges
//! the outcomes into one response.

mod executor;
mod models;

pub use crate::query::LicenseFilter;
pub use executor::Search;
pub use models::*;
