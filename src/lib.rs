//! opscache - concurrent TTL/LRU caching for expensive tool queries
//!
//! Repeated identical queries issued by short-lived request handlers share
//! results through named, capacity-bounded caches with per-entry TTLs.
//! Data never outlives its configured window and memory stays bounded
//! under sustained load.

pub mod cache;
pub mod config;
pub mod memo;
pub mod registry;
pub mod tasks;

pub use cache::{cache_key, Cache, CacheEntry, CacheMetrics, CacheStats, CacheStore, KEY_SEPARATOR};
pub use config::{CacheConfig, RegistryConfig};
pub use memo::cache_result;
pub use registry::{CacheDomain, CacheRegistry};
pub use tasks::spawn_cleanup_task;
