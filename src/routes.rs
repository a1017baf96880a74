//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`              - Shorten a URL
//! - `GET  /{code}`               - Short link redirect
//! - `GET  /metrics/top-domains`  - Domain ranking
//! - `GET  /health`               - Health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin, `Location` exposed
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{method_not_allowed_handler, not_found_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = api::routes::public_routes()
        .method_not_allowed_fallback(method_not_allowed_handler)
        .fallback(not_found_handler)
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
