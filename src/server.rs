//! HTTP server initialization and runtime setup.
//!
//! Builds the store and service graph, binds the listener, and runs the
//! Axum server until a shutdown signal arrives.

use crate::application::services::ShortenerService;
use crate::config::Config;
use crate::infrastructure::persistence::InMemoryUrlRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the application state for the given configuration.
///
/// Each call creates a fresh, empty store.
pub fn build_state(config: &Config) -> AppState {
    let repository = Arc::new(InMemoryUrlRepository::new());
    let shortener = ShortenerService::new(repository, config.base_url.clone())
        .with_max_attempts(config.code_generation_max_attempts);

    AppState::new(Arc::new(shortener), config.top_domains_limit)
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config);
    tracing::info!("In-memory store initialized");

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves when the process receives Ctrl+C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
