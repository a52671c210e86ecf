//! Memoization Module
//!
//! Get-or-compute wrapper that turns any fallible computation into a
//! cached operation. Only successful results are stored.

use std::future::Future;
use std::time::Duration;

use tracing::debug;

use crate::cache::Cache;

/// Returns the cached value for `key`, or runs `compute` and caches its
/// result for `ttl`.
///
/// A failing `compute` propagates its error untouched and writes nothing,
/// so a transient failure never poisons later callers for the TTL window.
///
/// There is no single-flight de-duplication: concurrent callers that both
/// miss will both run `compute`, so it must be idempotent and safe to run
/// concurrently with itself.
pub async fn cache_result<T, E, F, Fut>(
    cache: &Cache<T>,
    key: &str,
    ttl: Duration,
    compute: F,
) -> Result<T, E>
where
    T: Clone + Send + Sync + 'static,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    if let Some(cached) = cache.get(key).await {
        debug!(cache = cache.name(), key, "returning cached result");
        return Ok(cached);
    }

    let result = compute().await?;
    cache.set_with_ttl(key, result.clone(), ttl).await;
    debug!(cache = cache.name(), key, "computed and cached result");

    Ok(result)
}
