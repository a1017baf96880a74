//! Handler for domain metrics endpoint.

use axum::{Json, extract::State};

use crate::api::dto::metrics::TopDomainsResponse;
use crate::state::AppState;

/// Returns the most shortened domains.
///
/// # Endpoint
///
/// `GET /metrics/top-domains`
///
/// Reports at most [`AppState::top_domains_limit`] domains ranked by the
/// number of distinct URLs shortened under each. `www.` is stripped, so
/// `www.youtube.com` and `youtube.com` count together. Returns `{}` when
/// nothing has been shortened.
pub async fn top_domains_handler(State(state): State<AppState>) -> Json<TopDomainsResponse> {
    let ranked = state.shortener.top_domains(state.top_domains_limit);
    Json(ranked.into())
}
