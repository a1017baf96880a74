//! DTOs for domain metrics endpoint.

use serde::Serialize;
use serde_with::{Map, serde_as};

use crate::application::services::DomainCount;

/// Ranked domain counts serialized as a JSON object.
///
/// Entries are written in ranking order, so the first key is the most
/// shortened domain:
///
/// ```json
/// { "udemy.com": 6, "youtube.com": 4, "wikipedia.org": 2 }
/// ```
#[serde_as]
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct TopDomainsResponse(#[serde_as(as = "Map<_, _>")] pub Vec<(String, u64)>);

impl From<Vec<DomainCount>> for TopDomainsResponse {
    fn from(ranked: Vec<DomainCount>) -> Self {
        Self(ranked.into_iter().map(|d| (d.domain, d.count)).collect())
    }
}
