//! Configuration Module
//!
//! Per-cache tuning knobs and the per-domain table consumed by the
//! registry. Environment overrides fall back to defaults when unset or
//! unparseable.

use std::env;
use std::time::Duration;

// == Cache Config ==
/// Tuning for one cache instance. Immutable after construction.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL applied by `set` when no explicit TTL is given
    pub default_ttl: Duration,
    /// Maximum number of entries before an insert evicts
    pub max_entries: usize,
    /// Period of the background reclamation sweep
    pub cleanup_interval: Duration,
}

impl CacheConfig {
    /// Builds a config from whole-second values.
    pub fn from_secs(default_ttl: u64, max_entries: usize, cleanup_interval: u64) -> Self {
        Self {
            default_ttl: Duration::from_secs(default_ttl),
            max_entries,
            cleanup_interval: Duration::from_secs(cleanup_interval),
        }
    }

    /// Loads overrides from the environment.
    ///
    /// # Environment Variables
    /// - `CACHE_DEFAULT_TTL` - default TTL in seconds (default: 300)
    /// - `CACHE_MAX_ENTRIES` - maximum cache entries (default: 1000)
    /// - `CACHE_CLEANUP_INTERVAL` - sweep period in seconds (default: 60)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_ttl: env::var("CACHE_DEFAULT_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.default_ttl),
            max_entries: env::var("CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_entries),
            cleanup_interval: env::var("CACHE_CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.cleanup_interval),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::from_secs(300, 1000, 60)
    }
}

// == Registry Config ==
/// Per-domain cache tuning: volatile domains get short TTLs and frequent
/// sweeps; stable domains get longer TTLs and larger capacity.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Cluster-state queries; resources change quickly, keep it fresh
    pub cluster: CacheConfig,
    /// Service-mesh status; config is stable but proxy status can move
    pub mesh: CacheConfig,
    /// Package-manager lookups; releases and chart info change slowly
    pub packages: CacheConfig,
    /// Generic command output; status commands change slowest of all
    pub command: CacheConfig,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            cluster: CacheConfig::from_secs(45, 1000, 60),
            mesh: CacheConfig::from_secs(60, 500, 60),
            packages: CacheConfig::from_secs(120, 300, 120),
            command: CacheConfig::from_secs(180, 200, 60),
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.default_ttl, Duration::from_secs(300));
        assert_eq!(config.max_entries, 1000);
        assert_eq!(config.cleanup_interval, Duration::from_secs(60));
    }

    #[test]
    fn test_cache_config_from_env_defaults() {
        env::remove_var("CACHE_DEFAULT_TTL");
        env::remove_var("CACHE_MAX_ENTRIES");
        env::remove_var("CACHE_CLEANUP_INTERVAL");

        let config = CacheConfig::from_env();
        assert_eq!(config.default_ttl, Duration::from_secs(300));
        assert_eq!(config.max_entries, 1000);
        assert_eq!(config.cleanup_interval, Duration::from_secs(60));
    }

    #[test]
    fn test_registry_config_ttl_ordering() {
        let config = RegistryConfig::default();

        // Faster-changing domains carry shorter TTLs
        assert!(config.cluster.default_ttl < config.mesh.default_ttl);
        assert!(config.mesh.default_ttl < config.packages.default_ttl);
        assert!(config.packages.default_ttl < config.command.default_ttl);
    }
}
