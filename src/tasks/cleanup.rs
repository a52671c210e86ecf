//! TTL Cleanup Task
//!
//! Background task that periodically reclaims expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns the reclamation loop for one cache instance.
///
/// The task sleeps for `interval` between sweeps and takes the write lock
/// only for the duration of each sweep, so foreground operations and the
/// reclamation pass never interleave mid-mutation. The returned handle is
/// aborted by [`crate::cache::Cache::close`] at shutdown.
///
/// Must be called within a Tokio runtime.
pub fn spawn_cleanup_task<T>(
    name: String,
    store: Arc<RwLock<CacheStore<T>>>,
    interval: Duration,
) -> JoinHandle<()>
where
    T: Send + Sync + 'static,
{
    tokio::spawn(async move {
        debug!(cache = %name, interval_ms = interval.as_millis() as u64, "starting ttl cleanup task");

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut store = store.write().await;
                store.cleanup_expired()
            };

            if removed > 0 {
                info!(cache = %name, removed, "ttl cleanup removed expired entries");
            } else {
                debug!(cache = %name, "ttl cleanup found no expired entries");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shared_store(default_ttl: Duration) -> Arc<RwLock<CacheStore<String>>> {
        Arc::new(RwLock::new(CacheStore::new("cleanup-test", default_ttl, 100)))
    }

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_entries() {
        let store = shared_store(Duration::from_secs(300));

        {
            let mut store = store.write().await;
            store.set_with_ttl("expire_soon".to_string(), "v".to_string(), Duration::from_millis(30));
        }

        let handle = spawn_cleanup_task(
            "cleanup-test".to_string(),
            Arc::clone(&store),
            Duration::from_millis(50),
        );

        tokio::time::sleep(Duration::from_millis(150)).await;

        {
            let store = store.read().await;
            assert_eq!(store.len(), 0, "expired entry should have been reclaimed");
            assert_eq!(store.metrics().evictions, 1);
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_valid_entries() {
        let store = shared_store(Duration::from_secs(300));

        {
            let mut store = store.write().await;
            store.set_with_ttl("long_lived".to_string(), "v".to_string(), Duration::from_secs(3600));
        }

        let handle = spawn_cleanup_task(
            "cleanup-test".to_string(),
            Arc::clone(&store),
            Duration::from_millis(30),
        );

        tokio::time::sleep(Duration::from_millis(100)).await;

        {
            let mut store = store.write().await;
            assert_eq!(store.get("long_lived"), Some("v".to_string()));
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let store = shared_store(Duration::from_secs(300));
        let handle = spawn_cleanup_task("cleanup-test".to_string(), store, Duration::from_secs(1));

        handle.abort();
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(handle.is_finished(), "task should be finished after abort");
    }
}
