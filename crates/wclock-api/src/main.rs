//! # wclock-api — Binary Entry Point
//!
//! Starts the Axum HTTP server for the world-clock API.
//! Binds to configurable port (default 8080).

use wclock_api::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let port: u16 = std::env::var("WCLOCK_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let state = AppState::new().map_err(|e| {
        tracing::error!("zone directory failed to load: {e}");
        anyhow::anyhow!(e)
    })?;
    tracing::info!(zones = state.directory.len(), "zone directory loaded");

    let app = wclock_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("world-clock API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
