//! Repository trait for shortened URL records.

use std::sync::Arc;

use crate::domain::entities::ShortenedUrl;

/// Bidirectional registry of [`ShortenedUrl`] records.
///
/// Records are indexed by short code and by original URL. All operations are
/// synchronous and must be safe to call concurrently without external locking.
/// A lookup never observes a partially written record.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - in-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait UrlRepository: Send + Sync {
    /// Stores the record under both its short code and its original URL,
    /// overwriting whatever was there.
    ///
    /// No uniqueness check is performed; callers keep one record per URL.
    fn insert(&self, record: ShortenedUrl);

    /// Finds a record by exact short code.
    fn find_by_code(&self, code: &str) -> Option<Arc<ShortenedUrl>>;

    /// Finds a record whose original URL equals `url` byte for byte.
    fn find_by_url(&self, url: &str) -> Option<Arc<ShortenedUrl>>;

    /// Returns `true` if a record is stored under `code`.
    fn exists_by_code(&self, code: &str) -> bool;

    /// Returns a snapshot of every stored record in unspecified order.
    fn find_all(&self) -> Vec<Arc<ShortenedUrl>>;

    /// Number of stored records.
    fn count(&self) -> usize;
}
