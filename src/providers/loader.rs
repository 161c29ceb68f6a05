//! Provider loader for building the registry from settings

use super::bing::{self, Bing, BING_ENDPOINT};
use super::denylist::Denylist;
use super::flickr::{self, Flickr, FLICKR_ENDPOINT};
use super::registry::ProviderRegistry;
use super::traits::Provider;
use crate::config::{ProviderConfig, Settings};
use crate::error::ConfigError;
use std::sync::Arc;
use tracing::info;

/// Loader for initializing providers from configuration
pub struct ProviderLoader;

impl ProviderLoader {
    /// Load all enabled providers
    ///
    /// Any construction failure is fatal: a provider that is enabled but
    /// misconfigured stops startup rather than being skipped.
    pub fn load(settings: &Settings) -> Result<ProviderRegistry, ConfigError> {
        let mut registry = ProviderRegistry::new();

        let flickr_config = &settings.providers.flickr;
        if Self::enabled(flickr::NAME, flickr_config) {
            registry.register(Self::create_flickr(flickr_config)?);
            info!("Loaded provider: {}", flickr::NAME);
        }

        let bing_config = &settings.providers.bing;
        if Self::enabled(bing::NAME, bing_config) {
            registry.register(Self::create_bing(bing_config)?);
            info!("Loaded provider: {}", bing::NAME);
        }

        if registry.is_empty() {
            return Err(ConfigError::NoProviders);
        }

        Ok(registry)
    }

    fn enabled(name: &str, config: &ProviderConfig) -> bool {
        if config.disabled {
            info!("Skipping disabled provider: {}", name);
        }
        !config.disabled
    }

    fn create_flickr(config: &ProviderConfig) -> Result<Arc<dyn Provider>, ConfigError> {
        let api_key = config.require_api_key(flickr::NAME)?;
        let endpoint = config.base_url.as_deref().unwrap_or(FLICKR_ENDPOINT);
        let mut provider = Flickr::with_endpoint(api_key, endpoint)?;
        if let Some(denylist) = Self::denylist(flickr::NAME, config)? {
            provider = provider.with_denylist(denylist);
        }
        Ok(Arc::new(provider))
    }

    fn create_bing(config: &ProviderConfig) -> Result<Arc<dyn Provider>, ConfigError> {
        let api_key = config.require_api_key(bing::NAME)?;
        let endpoint = config.base_url.as_deref().unwrap_or(BING_ENDPOINT);
        let mut provider = Bing::with_endpoint(api_key, endpoint)?;
        if let Some(denylist) = Self::denylist(bing::NAME, config)? {
            provider = provider.with_denylist(denylist);
        }
        Ok(Arc::new(provider))
    }

    /// Configured denylist override, if any
    fn denylist(name: &str, config: &ProviderConfig) -> Result<Option<Denylist>, ConfigError> {
        config
            .denylist
            .as_deref()
            .map(|patterns| Denylist::for_provider(name, patterns))
            .transpose()
    }
}
