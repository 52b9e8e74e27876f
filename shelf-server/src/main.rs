//! Shelf Server - REST API for the book collection

use anyhow::Result;
use shelf_server::{config::ServerConfig, routes, state};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shelf_server=debug,shelf_core=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    // Create application state
    let state = state::AppState::new(&config).await?;

    // Build router
    let app = routes::create_router(state, config.cors_origins.as_deref());

    // Start server
    tracing::info!("Starting server on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
