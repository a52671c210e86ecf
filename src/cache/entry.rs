//! Cache Entry Module
//!
//! Defines the value container for individual cache entries, carrying
//! lifecycle timestamps and access statistics.

use std::time::Duration;

use chrono::{DateTime, Duration as ChronoDuration, Utc};

// == Cache Entry ==
/// A single cached value with its lifecycle metadata.
///
/// All timestamps are set at insertion; `accessed_at` and `access_count`
/// are refreshed on every hit. Overwriting a key replaces the entry
/// wholesale, resetting timestamps and the access counter.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// The stored value
    pub value: T,
    /// Timestamp at insertion
    pub created_at: DateTime<Utc>,
    /// `created_at + ttl`; always `>= created_at`
    pub expires_at: DateTime<Utc>,
    /// Timestamp of the most recent read (or the insert itself)
    pub accessed_at: DateTime<Utc>,
    /// Number of successful reads; the insert counts as the first access
    pub access_count: u64,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates a new entry expiring `ttl` from now.
    pub fn new(value: T, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            value,
            created_at: now,
            expires_at: expiry_for(now, ttl),
            accessed_at: now,
            access_count: 1,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has expired.
    ///
    /// An entry is expired iff the current time is strictly after
    /// `expires_at`; an entry expiring exactly now is still served.
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    // == Touch ==
    /// Records a successful read: refreshes `accessed_at` and bumps
    /// `access_count`.
    pub fn touch(&mut self) {
        self.accessed_at = Utc::now();
        self.access_count += 1;
    }

    // == Time To Live ==
    /// Remaining lifetime, saturating to zero once expired.
    ///
    /// Diagnostic helper; expiry decisions go through [`Self::is_expired`].
    pub fn ttl_remaining(&self) -> Duration {
        (self.expires_at - Utc::now()).to_std().unwrap_or_default()
    }
}

/// Computes an expiry timestamp, clamping to the far future on overflow.
fn expiry_for(now: DateTime<Utc>, ttl: Duration) -> DateTime<Utc> {
    ChronoDuration::from_std(ttl)
        .ok()
        .and_then(|delta| now.checked_add_signed(delta))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("payload".to_string(), Duration::from_secs(60));

        assert_eq!(entry.value, "payload");
        assert_eq!(entry.created_at, entry.accessed_at);
        assert_eq!(entry.access_count, 1);
        assert!(entry.expires_at > entry.created_at);
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_expiration() {
        let entry = CacheEntry::new("payload", Duration::from_millis(50));

        assert!(!entry.is_expired());
        sleep(Duration::from_millis(80));
        assert!(entry.is_expired());
    }

    #[test]
    fn test_entry_zero_ttl() {
        let entry = CacheEntry::new((), Duration::ZERO);

        // expires_at >= created_at holds even for a zero TTL
        assert_eq!(entry.expires_at, entry.created_at);
        sleep(Duration::from_millis(10));
        assert!(entry.is_expired());
    }

    #[test]
    fn test_entry_touch_updates_access_state() {
        let mut entry = CacheEntry::new(42u32, Duration::from_secs(60));
        let first_access = entry.accessed_at;

        sleep(Duration::from_millis(10));
        entry.touch();

        assert_eq!(entry.access_count, 2);
        assert!(entry.accessed_at > first_access);

        entry.touch();
        assert_eq!(entry.access_count, 3);
    }

    #[test]
    fn test_ttl_remaining() {
        let entry = CacheEntry::new((), Duration::from_secs(10));

        let remaining = entry.ttl_remaining();
        assert!(remaining <= Duration::from_secs(10));
        assert!(remaining >= Duration::from_secs(9));
    }

    #[test]
    fn test_ttl_remaining_expired() {
        let entry = CacheEntry::new((), Duration::from_millis(20));

        sleep(Duration::from_millis(50));
        assert_eq!(entry.ttl_remaining(), Duration::ZERO);
    }

    #[test]
    fn test_huge_ttl_does_not_overflow() {
        let entry = CacheEntry::new((), Duration::MAX);

        assert!(!entry.is_expired());
        assert!(entry.expires_at > entry.created_at);
    }
}
