//! HTTP entry point for newsroom
//!
//! Serves `/sitemap.xml`, `/robots.txt` and page data as JSON.

use std::path::PathBuf;

use newsroom::{config, error::Result, server};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Storage directory holding `config.toml`, overridable with `NEWSROOM_STORAGE_DIR`.
const STORAGE_DIR_VAR: &str = "NEWSROOM_STORAGE_DIR";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let storage_dir = std::env::var(STORAGE_DIR_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("storage"));
    let config = config::load_validated(&storage_dir)?;

    info!("Starting newsroom server");
    info!("Content API: {}", config.api.base_url());
    info!("Site: {}", config.site.base_url);

    let bind_addr = config.server.bind_addr.clone();
    let app = server::create_router(server::AppState::new(config)?);

    info!("Listening on {}", bind_addr);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
