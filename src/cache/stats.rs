//! Cache Statistics Module
//!
//! Running instrumentation counters plus the point-in-time snapshot
//! returned by `stats()`.

use chrono::{DateTime, Utc};
use serde::Serialize;

// == Cache Metrics ==
/// Running counters for one cache instance.
///
/// Mutated under the same exclusive-access window as the entry map, so the
/// `size` gauge is never observably out of sync with the map length.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheMetrics {
    /// Successful reads
    pub hits: u64,
    /// Failed reads, absent and expired combined
    pub misses: u64,
    /// Subset of `misses` caused by lazy expiry on read
    pub expired_misses: u64,
    /// Entries removed by LRU eviction or expiry reclamation
    pub evictions: u64,
    /// Up/down gauge of the current entry count
    pub size: i64,
}

impl CacheMetrics {
    // == Constructor ==
    /// Creates metrics with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter, tagging the expired sub-reason when the
    /// miss came from an expired-but-not-yet-reclaimed entry.
    pub fn record_miss(&mut self, expired: bool) {
        self.misses += 1;
        if expired {
            self.expired_misses += 1;
        }
    }

    // == Record Evictions ==
    /// Adds to the eviction counter; reclamation sweeps report one batch.
    pub fn record_evictions(&mut self, count: u64) {
        self.evictions += count;
    }

    // == Size Gauge ==
    /// Moves the size gauge by `delta`.
    pub fn size_add(&mut self, delta: i64) {
        self.size += delta;
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 before any reads.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

// == Cache Stats ==
/// Point-in-time snapshot produced by an O(n) scan of the entry map.
///
/// Diagnostic only; not used on any hot path. `size` may transiently
/// include expired entries the reclamation task has not swept yet.
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    /// Current entry count
    pub size: usize,
    /// Configured capacity
    pub max_size: usize,
    /// Entries currently stored but already expired
    pub expired: usize,
    /// Earliest `created_at` among stored entries, None when empty
    pub oldest: Option<DateTime<Utc>>,
    /// Latest `created_at` among stored entries, None when empty
    pub newest: Option<DateTime<Utc>>,
}
