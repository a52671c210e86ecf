//! Cache Store Module
//!
//! The single-threaded cache engine: a key→entry map with TTL expiry,
//! least-recently-used eviction, and instrumentation counters. Concurrent
//! access is layered on top by [`crate::cache::Cache`].

use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, info};

use crate::cache::{CacheEntry, CacheMetrics, CacheStats};

// == Cache Store ==
/// Generic TTL/LRU cache engine.
///
/// No operation returns an error: "not found" (including expired) is a
/// normal return value. The size gauge in [`CacheMetrics`] is updated in
/// the same call as every map mutation.
#[derive(Debug)]
pub struct CacheStore<T> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<T>>,
    /// Instance name, used for log and metric tagging
    name: String,
    /// TTL applied when `set` is called without an explicit one
    default_ttl: Duration,
    /// Maximum number of entries before an insert evicts
    max_entries: usize,
    /// Instrumentation counters
    metrics: CacheMetrics,
}

impl<T> CacheStore<T> {
    // == Constructor ==
    /// Creates an empty store. Callers supply sane values: `max_entries`
    /// of zero makes every insert evict-then-insert, which degrades
    /// performance but stays correct.
    pub fn new(name: impl Into<String>, default_ttl: Duration, max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            name: name.into(),
            default_ttl,
            max_entries,
            metrics: CacheMetrics::new(),
        }
    }

    // == Get ==
    /// Looks up a key, returning a clone of the value on a genuine hit.
    ///
    /// An expired-but-not-yet-reclaimed entry behaves as absent; it is
    /// left in place for the reclamation sweep. A hit refreshes the
    /// entry's access time and count, so this is a mutation even though it
    /// is logically a read.
    pub fn get(&mut self, key: &str) -> Option<T>
    where
        T: Clone,
    {
        match self.entries.get_mut(key) {
            None => {
                self.metrics.record_miss(false);
                debug!(cache = %self.name, key, "cache miss");
                None
            }
            Some(entry) if entry.is_expired() => {
                self.metrics.record_miss(true);
                debug!(cache = %self.name, key, reason = "expired", "cache miss");
                None
            }
            Some(entry) => {
                entry.touch();
                self.metrics.record_hit();
                debug!(cache = %self.name, key, access_count = entry.access_count, "cache hit");
                Some(entry.value.clone())
            }
        }
    }

    // == Peek ==
    /// Returns the stored entry without counting an access or checking
    /// expiry. Diagnostic helper.
    pub fn peek(&self, key: &str) -> Option<&CacheEntry<T>> {
        self.entries.get(key)
    }

    // == Set ==
    /// Stores a value under the default TTL.
    pub fn set(&mut self, key: String, value: T) {
        let ttl = self.default_ttl;
        self.set_with_ttl(key, value, ttl);
    }

    // == Set With TTL ==
    /// Stores a value with an explicit TTL, replacing any prior entry.
    ///
    /// When the insert would grow the map past capacity, the least
    /// recently used entry is evicted first. Overwriting an existing key
    /// never evicts: capacity is only enforced for genuinely new keys.
    pub fn set_with_ttl(&mut self, key: String, value: T, ttl: Duration) {
        let is_overwrite = self.entries.contains_key(&key);

        if !is_overwrite && self.entries.len() >= self.max_entries {
            self.evict_lru();
        }

        self.entries.insert(key.clone(), CacheEntry::new(value, ttl));

        if !is_overwrite {
            self.metrics.size_add(1);
        }

        debug!(cache = %self.name, key = %key, ttl_ms = ttl.as_millis() as u64, "cache set");
    }

    // == Delete ==
    /// Removes an entry. Returns whether anything was actually removed;
    /// the size gauge only moves when it was.
    pub fn delete(&mut self, key: &str) -> bool {
        if self.entries.remove(key).is_some() {
            self.metrics.size_add(-1);
            debug!(cache = %self.name, key, "cache delete");
            true
        } else {
            false
        }
    }

    // == Clear ==
    /// Removes every entry, returning how many were dropped.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        self.metrics.size_add(-(count as i64));

        info!(cache = %self.name, items_removed = count, "cache cleared");
        count
    }

    // == Cleanup Expired ==
    /// Removes all expired entries in one sweep.
    ///
    /// The size gauge moves once by the batch count and the eviction
    /// counter records one batch, not one event per key. Returns the
    /// number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();
        if count > 0 {
            for key in expired_keys {
                self.entries.remove(&key);
            }

            self.metrics.record_evictions(count as u64);
            self.metrics.size_add(-(count as i64));
            debug!(cache = %self.name, expired_items = count, "cache cleanup");
        }

        count
    }

    // == Evict LRU ==
    /// Removes the entry with the minimum `accessed_at`.
    ///
    /// Full O(n) scan; `max_entries` bounds n and eviction is rare in the
    /// intended bursty workload. Ties fall to map iteration order, which
    /// callers must not depend on.
    fn evict_lru(&mut self) {
        let oldest_key = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.accessed_at)
            .map(|(key, _)| key.clone());

        if let Some(key) = oldest_key {
            self.entries.remove(&key);
            self.metrics.record_evictions(1);
            self.metrics.size_add(-1);
            debug!(cache = %self.name, key = %key, "cache lru eviction");
        }
    }

    // == Stats ==
    /// Point-in-time snapshot: expired count and `created_at` bounds
    /// across all entries. O(n) diagnostic scan.
    pub fn stats(&self) -> CacheStats {
        let mut expired = 0;
        let mut oldest = None;
        let mut newest = None;

        for entry in self.entries.values() {
            if entry.is_expired() {
                expired += 1;
            }
            if oldest.is_none() || Some(entry.created_at) < oldest {
                oldest = Some(entry.created_at);
            }
            if newest.is_none() || Some(entry.created_at) > newest {
                newest = Some(entry.created_at);
            }
        }

        CacheStats {
            size: self.entries.len(),
            max_size: self.max_entries,
            expired,
            oldest,
            newest,
        }
    }

    // == Metrics ==
    /// Snapshot of the running counters.
    pub fn metrics(&self) -> CacheMetrics {
        self.metrics.clone()
    }

    // == Name ==
    pub fn name(&self) -> &str {
        &self.name
    }

    // == Length ==
    /// Current entry count; may transiently include expired entries the
    /// reclamation task has not swept yet.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
