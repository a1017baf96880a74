//! Record mapping a short code to the URL it was created for.

use chrono::{DateTime, Utc};

/// An immutable short-code mapping.
///
/// Created exactly once per distinct original URL and never updated. The
/// `domain` is derived from the URL host at creation time and is the grouping
/// key for domain rankings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedUrl {
    pub short_code: String,
    /// The URL exactly as it was submitted.
    pub original_url: String,
    pub domain: String,
    pub created_at: DateTime<Utc>,
}

impl ShortenedUrl {
    /// Creates a record stamped with the current time.
    pub fn new(short_code: String, original_url: String, domain: String) -> Self {
        Self {
            short_code,
            original_url,
            domain,
            created_at: Utc::now(),
        }
    }

    /// Creates a record with an explicit creation timestamp.
    #[cfg(test)]
    pub fn with_created_at(
        short_code: String,
        original_url: String,
        domain: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            short_code,
            original_url,
            domain,
            created_at,
        }
    }
}
