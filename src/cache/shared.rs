//! Shared Cache Handle
//!
//! Wraps the [`CacheStore`] engine for concurrent use: many tasks share
//! one instance through an `Arc<RwLock<_>>`, and a background reclamation
//! task bound to the instance sweeps expired entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::cache::{CacheEntry, CacheMetrics, CacheStats, CacheStore};
use crate::config::CacheConfig;
use crate::tasks::spawn_cleanup_task;

// == Cache ==
/// A named, concurrent TTL/LRU cache.
///
/// Every mutation (including the access-time update a hit performs) runs
/// under the write lock together with its gauge update, so bookkeeping is
/// never observable out of sync with the entry map. Locks are per
/// instance: operations on different caches never contend.
#[derive(Debug)]
pub struct Cache<T> {
    name: String,
    store: Arc<RwLock<CacheStore<T>>>,
    cleanup: JoinHandle<()>,
}

impl<T> Cache<T>
where
    T: Clone + Send + Sync + 'static,
{
    // == Constructor ==
    /// Creates a cache and starts its reclamation task.
    ///
    /// Must be called within a Tokio runtime. Configuration is immutable
    /// for the life of the instance.
    pub fn new(name: impl Into<String>, config: CacheConfig) -> Self {
        let name = name.into();
        let store = Arc::new(RwLock::new(CacheStore::new(
            name.clone(),
            config.default_ttl,
            config.max_entries,
        )));
        let cleanup = spawn_cleanup_task(name.clone(), Arc::clone(&store), config.cleanup_interval);

        Self { name, store, cleanup }
    }

    // == Get ==
    /// Retrieves a value. Expired entries behave as absent.
    ///
    /// Takes the write lock: a hit updates the entry's access time and
    /// count, so it is not a pure read.
    pub async fn get(&self, key: &str) -> Option<T> {
        self.store.write().await.get(key)
    }

    // == Set ==
    /// Stores a value under the cache's default TTL.
    pub async fn set(&self, key: impl Into<String>, value: T) {
        self.store.write().await.set(key.into(), value);
    }

    // == Set With TTL ==
    /// Stores a value with an explicit TTL.
    pub async fn set_with_ttl(&self, key: impl Into<String>, value: T, ttl: Duration) {
        self.store.write().await.set_with_ttl(key.into(), value, ttl);
    }

    // == Delete ==
    /// Removes an entry if present; returns whether anything was removed.
    pub async fn delete(&self, key: &str) -> bool {
        self.store.write().await.delete(key)
    }

    // == Clear ==
    /// Atomically removes every entry, returning the count dropped.
    pub async fn clear(&self) -> usize {
        self.store.write().await.clear()
    }

    // == Size ==
    /// Current entry count; may transiently include expired entries the
    /// reclamation task has not swept yet.
    pub async fn size(&self) -> usize {
        self.store.read().await.len()
    }

    // == Stats ==
    /// Point-in-time diagnostic snapshot.
    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    // == Metrics ==
    /// Snapshot of the running instrumentation counters.
    pub async fn metrics(&self) -> CacheMetrics {
        self.store.read().await.metrics()
    }

    // == Peek ==
    /// Returns a copy of the stored entry without counting an access.
    pub async fn peek(&self, key: &str) -> Option<CacheEntry<T>> {
        self.store.read().await.peek(key).cloned()
    }

    // == Name ==
    pub fn name(&self) -> &str {
        &self.name
    }

    // == Close ==
    /// Stops the background reclamation task. Safe to call more than
    /// once; foreground operations keep working after close.
    pub fn close(&self) {
        self.cleanup.abort();
    }
}

impl<T> Drop for Cache<T> {
    fn drop(&mut self) {
        self.cleanup.abort();
    }
}
