//! Cache Module
//!
//! Concurrent, generic caching with TTL expiry and LRU eviction, plus the
//! key-composition helper shared by all callers.

mod entry;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use shared::Cache;
pub use stats::{CacheMetrics, CacheStats};
pub use store::CacheStore;

// == Public Constants ==
/// Separator used by [`cache_key`] between components.
pub const KEY_SEPARATOR: char = ':';

// == Key Composition ==
/// Joins ordered components into one cache key with `:` between them.
///
/// No escaping is applied: an empty component yields an empty segment, and
/// components containing the separator are indistinguishable from a
/// boundary. Callers whose components may contain `:` must sanitize them
/// first if collisions are unacceptable.
pub fn cache_key<I, S>(components: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut key = String::new();
    for (i, component) in components.into_iter().enumerate() {
        if i > 0 {
            key.push(KEY_SEPARATOR);
        }
        key.push_str(component.as_ref());
    }
    key
}
