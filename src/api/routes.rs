//! API route configuration.

use crate::api::handlers::{
    health_handler, redirect_handler, shorten_handler, top_domains_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public routes.
///
/// # Endpoints
///
/// - `POST /shorten`              - Shorten a URL (idempotent)
/// - `GET  /metrics/top-domains`  - Most shortened domains
/// - `GET  /health`               - Health check
/// - `GET  /{code}`               - Redirect to the original URL
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/metrics/top-domains", get(top_domains_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
}
