//! photo-aggregator: concurrent image search across Flickr and Bing
//!
//! This is the main entry point for the application.

use anyhow::Result;
use photo_aggregator::{
    config::Settings,
    network::HttpClient,
    providers::ProviderLoader,
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("Starting photo-aggregator v{}", photo_aggregator::VERSION);

    // Load configuration
    let settings = load_settings()?;

    // Initialize HTTP client
    let client = HttpClient::with_settings(&settings.outgoing)?;
    info!("HTTP client initialized (timeout {:?})", client.timeout());

    // Load providers
    let registry = ProviderLoader::load(&settings)?;
    info!("Loaded {} providers: {:?}", registry.len(), registry.names());

    // Bind address
    let addr = SocketAddr::new(settings.server.bind_address.parse()?, settings.server.port);

    // Create application state and router
    let state = AppState::new(registry, client);
    let app = create_router(state);

    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Load settings from file or use defaults, then apply environment overrides
fn load_settings() -> Result<Settings> {
    let mut paths = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("photo-aggregator/settings.yml"));
    }

    // Check environment variable first
    if let Ok(path) = std::env::var("PHOTO_AGGREGATOR_SETTINGS_PATH") {
        paths.insert(0, PathBuf::from(path));
    }

    let mut settings = match paths.iter().find(|p| p.exists()) {
        Some(path) => {
            info!("Loading settings from: {}", path.display());
            Settings::from_file(path)?
        }
        None => {
            info!("No settings file found, using defaults");
            Settings::default()
        }
    };

    settings.merge_env();
    Ok(settings)
}
