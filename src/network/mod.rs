//! HTTP networking module
//!
//! Provides the shared HTTP transport used by every provider.

mod client;

pub use client::HttpClient;
