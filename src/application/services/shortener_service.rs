//! URL shortening, resolution, and domain ranking service.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::json;
use tracing::{debug, error, warn};

use crate::domain::entities::ShortenedUrl;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_validator::{extract_domain, validate_url};

/// Default cap on code generation attempts before the keyspace is
/// considered exhausted.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Number of shortened URLs recorded under one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainCount {
    pub domain: String,
    pub count: u64,
}

/// Service for creating and resolving short links.
///
/// Holds no record state of its own: every record lives in the repository
/// and is treated as transient output of repository calls.
pub struct ShortenerService<R: UrlRepository> {
    repository: Arc<R>,
    base_url: String,
    max_attempts: usize,
}

impl<R: UrlRepository> ShortenerService<R> {
    /// Creates a new shortener service.
    ///
    /// `base_url` is used verbatim as the short URL prefix and must not end
    /// with a slash.
    pub fn new(repository: Arc<R>, base_url: impl Into<String>) -> Self {
        Self {
            repository,
            base_url: base_url.into(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Overrides the code generation attempt cap.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Shortens a URL and returns the full short URL.
    ///
    /// # Idempotency
    ///
    /// The URL is looked up exactly as submitted. If it was shortened before,
    /// the existing short URL is returned and nothing is written. No
    /// normalization is applied, so `https://a.com` and `https://a.com/` are
    /// distinct.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if the URL is blank, malformed, or
    /// lacks a scheme or host.
    ///
    /// Returns [`AppError::Internal`] if no free code was found within the
    /// attempt cap.
    pub fn shorten(&self, url: &str) -> Result<String, AppError> {
        let host = validate_url(url)
            .map_err(|e| AppError::invalid_input(e.to_string(), json!({ "url": url })))?;

        if let Some(existing) = self.repository.find_by_url(url) {
            debug!(code = %existing.short_code, "URL already shortened");
            return Ok(self.short_url(&existing.short_code));
        }

        let domain = extract_domain(host);
        let code = self.generate_unique_code()?;

        debug!(code = %code, domain = %domain, "Creating short link");
        self.repository
            .insert(ShortenedUrl::new(code.clone(), url.to_string(), domain));
        metrics::counter!("shortener_links_created_total").increment(1);

        Ok(self.short_url(&code))
    }

    /// Resolves a short code to the original URL.
    ///
    /// Matching is exact and case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record exists for `code`.
    pub fn resolve(&self, code: &str) -> Result<String, AppError> {
        match self.repository.find_by_code(code) {
            Some(record) => Ok(record.original_url.clone()),
            None => {
                metrics::counter!("shortener_resolve_misses_total").increment(1);
                Err(AppError::not_found(
                    format!("Short code not found: {code}"),
                    json!({ "code": code }),
                ))
            }
        }
    }

    /// Returns the `limit` domains with the most shortened URLs.
    ///
    /// Counts distinct stored records per domain over a fresh scan. Results
    /// are ordered by count descending; equal counts are ordered by domain
    /// name ascending. A non-positive `limit` yields an empty list.
    pub fn top_domains(&self, limit: i64) -> Vec<DomainCount> {
        if limit <= 0 {
            return Vec::new();
        }

        let mut counts: HashMap<String, u64> = HashMap::new();
        for record in self.repository.find_all() {
            *counts.entry(record.domain.clone()).or_default() += 1;
        }

        let mut ranked: Vec<DomainCount> = counts
            .into_iter()
            .map(|(domain, count)| DomainCount { domain, count })
            .collect();

        ranked.sort_unstable_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.domain.cmp(&b.domain))
        });
        ranked.truncate(usize::try_from(limit).unwrap_or(usize::MAX));

        ranked
    }

    /// Builds the full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }

    /// Number of records currently stored.
    pub fn link_count(&self) -> usize {
        self.repository.count()
    }

    /// Draws codes until one is not taken, up to the attempt cap.
    fn generate_unique_code(&self) -> Result<String, AppError> {
        for attempt in 1..=self.max_attempts {
            let code = generate_code();

            if !self.repository.exists_by_code(&code) {
                return Ok(code);
            }

            warn!(attempt, "Short code collision");
        }

        error!(
            attempts = self.max_attempts,
            "Short code keyspace exhausted"
        );
        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions", "attempts": self.max_attempts }),
        ))
    }
}
