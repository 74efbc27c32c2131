//! Repository trait for the short link mapping store.

use crate::domain::entities::Link;

/// Bidirectional store of short links.
///
/// Holds two lookups kept in lockstep: code to full URL and full URL to
/// short URL. Entries are never removed or modified once written.
///
/// Operations are synchronous and never block on I/O. Implementations must be
/// safe to share between concurrently handled requests.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-local maps
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait LinkRepository: Send + Sync {
    /// Finds the full URL stored under a short code.
    fn find_full_url(&self, code: &str) -> Option<String>;

    /// Finds the short URL already issued for a full URL.
    fn find_short_url(&self, full_url: &str) -> Option<String>;

    /// Stores a mapping in both directions.
    ///
    /// The caller guarantees `full_url` has no mapping yet. If `code` is
    /// already taken, its previous target is overwritten and returned.
    fn insert(&self, full_url: &str, code: &str, short_url: &str) -> Option<String>;

    /// Stores a mapping unless `full_url` already has one.
    ///
    /// The check and the write happen atomically. Returns the link that is
    /// stored for `full_url` afterwards, which is the pre-existing one if
    /// another writer got there first.
    fn insert_if_absent(&self, full_url: &str, code: &str, short_url: &str) -> Link;

    /// Number of stored mappings.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
