//! # morbror-api — Binary Entry Point
//!
//! Loads the course catalog and starts the Axum HTTP server.
//! Binds to a configurable port (default 8000).

use anyhow::Context;
use morbror_api::state::{AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env().context("invalid server configuration")?;

    // A missing or unreadable course directory is fatal; bad files are not.
    let (catalog, report) =
        morbror_catalog::load_with_report(&config.data_dir, config.load_order).map_err(|e| {
            tracing::error!("Course catalog load failed: {e}");
            e
        })?;
    if !report.is_clean() {
        tracing::warn!(
            skipped = report.skipped.len(),
            overrides = report.overrides.len(),
            "course catalog loaded with problems"
        );
    }

    let port = config.port;
    let state = AppState::with_config(config, catalog);
    let app = morbror_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Morbror API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
