//! VibeCraft HTTP server.
//!
//! Reads [`ServiceConfig`] from flags and the environment, connects the
//! optional Postgres store and serves the JSON API until interrupted.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use mockable::DefaultClock;
use tokio::net::TcpListener;

use vibecraft::{
    config::ServiceConfig,
    generation::{
        adapters::postgres::PostgresGenerationRepository, services::GenerationService,
    },
    http::{self, AppState},
    telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();
    let config = ServiceConfig::parse();
    let addr = config.socket_addr()?;

    let clock = Arc::new(DefaultClock);
    let service = match config.database_url() {
        Some(url) => {
            let repository =
                PostgresGenerationRepository::connect_lazy(url, config.database_pool_size);
            if let Err(err) = repository.ensure_schema().await {
                tracing::warn!(error = %err, "could not prepare the generations table; continuing");
            }
            tracing::info!(pool_size = config.database_pool_size, "generation store configured");
            GenerationService::new(Arc::new(repository), clock)
        }
        None => {
            tracing::warn!("DATABASE_URL not set; generations will not be recorded");
            GenerationService::without_store(clock)
        }
    };

    let app = http::router(AppState::new(service));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "VibeCraft backend listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    tracing::info!("VibeCraft backend stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
