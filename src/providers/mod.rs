//! Image-search providers
//!
//! Defines the Provider trait, the concrete Flickr and Bing adapters, and
//! the registry the aggregator resolves provider names against.

mod denylist;
mod loader;
mod registry;
mod traits;

// Provider implementations
pub mod bing;
pub mod flickr;

pub use denylist::Denylist;
pub use loader::ProviderLoader;
pub use registry::ProviderRegistry;
pub use traits::*;
