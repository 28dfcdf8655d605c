//! Flip Menu REST API Server
//!
//! Main binary for running the API server in production or development.
//!
//! # Environment Variables
//!
//! - `API_PORT`: Port to listen on (default: 8080)
//! - `API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `FLIP_MENU_SETTINGS`: Settings file (default: flip-menu.toml)
//! - `FLIP_MENU_CATALOG`: Shop catalog file (default: flip-menu-catalog.json)
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use flip_menu_api::{ApiConfig, ApiServer, API_BASE_PATH, API_VERSION};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    // Load configuration from environment
    let config = ApiConfig::from_env()?;

    tracing::info!("Starting Flip Menu API server");
    tracing::info!("API version: {} at {}", API_VERSION, API_BASE_PATH);
    tracing::info!("Settings file: {}", config.settings_path.display());
    tracing::info!("Catalog file: {}", config.catalog_path.display());

    let server = ApiServer::from_config(config)?;

    // Start server with graceful shutdown
    server.serve().await
}
