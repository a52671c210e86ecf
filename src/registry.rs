//! Cache Registry Module
//!
//! A fixed set of named caches, one per logical domain, plus the mapping
//! from external command names to domains. The registry is explicitly
//! constructible for tests; a process-wide instance is available through
//! [`global`] and is initialized exactly once.

use std::fmt;
use std::sync::OnceLock;

use tracing::info;

use crate::cache::Cache;
use crate::config::RegistryConfig;

// == Cache Domain ==
/// The closed set of cache domains. Being an enum, an unrecognized domain
/// is unrepresentable; the fallback for unrecognized *commands* is
/// [`CacheDomain::Command`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheDomain {
    /// Cluster-state queries
    Cluster,
    /// Service-mesh status calls
    Mesh,
    /// Package-manager lookups
    Packages,
    /// Generic command output (default domain)
    Command,
}

impl CacheDomain {
    /// Stable identifier used for cache names and log tags.
    pub fn as_str(self) -> &'static str {
        match self {
            CacheDomain::Cluster => "cluster",
            CacheDomain::Mesh => "mesh",
            CacheDomain::Packages => "packages",
            CacheDomain::Command => "command",
        }
    }

    /// Maps an external command name to its domain; unrecognized commands
    /// fall back to the generic command domain.
    pub fn from_command(command: &str) -> Self {
        match command {
            "kubectl" => CacheDomain::Cluster,
            "istioctl" => CacheDomain::Mesh,
            "helm" => CacheDomain::Packages,
            "cilium" | "argo" => CacheDomain::Command,
            _ => CacheDomain::Command,
        }
    }
}

impl fmt::Display for CacheDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == Cache Registry ==
/// One cache per domain, tuned for how volatile that domain's data is.
///
/// Domain caches hold command output as strings. Each cache's lock is
/// independent, so operations on different domains never contend.
#[derive(Debug)]
pub struct CacheRegistry {
    cluster: Cache<String>,
    mesh: Cache<String>,
    packages: Cache<String>,
    command: Cache<String>,
}

impl CacheRegistry {
    // == Constructor ==
    /// Builds all domain caches from the given tuning table.
    ///
    /// Must be called within a Tokio runtime (each cache starts its
    /// reclamation task).
    pub fn new(config: RegistryConfig) -> Self {
        let registry = Self {
            cluster: Cache::new(CacheDomain::Cluster.as_str(), config.cluster),
            mesh: Cache::new(CacheDomain::Mesh.as_str(), config.mesh),
            packages: Cache::new(CacheDomain::Packages.as_str(), config.packages),
            command: Cache::new(CacheDomain::Command.as_str(), config.command),
        };

        info!("caches initialized");
        registry
    }

    // == Get ==
    /// Returns the cache for a domain; never "no cache".
    pub fn get(&self, domain: CacheDomain) -> &Cache<String> {
        match domain {
            CacheDomain::Cluster => &self.cluster,
            CacheDomain::Mesh => &self.mesh,
            CacheDomain::Packages => &self.packages,
            CacheDomain::Command => &self.command,
        }
    }

    // == For Command ==
    /// Returns the cache an external command should use.
    pub fn for_command(&self, command: &str) -> &Cache<String> {
        self.get(CacheDomain::from_command(command))
    }

    // == Invalidate ==
    /// Clears an entire domain.
    ///
    /// Used after a mutating operation against the underlying system:
    /// whole-domain invalidation guarantees no stale read survives a known
    /// mutation, at the cost of discarding unaffected entries.
    pub async fn invalidate(&self, domain: CacheDomain) {
        let items_cleared = self.get(domain).clear().await;
        info!(
            domain = %domain,
            items_cleared,
            reason = "modification_command",
            "cache invalidated"
        );
    }

    // == Invalidate For Command ==
    /// Maps a command to its domain and invalidates that domain.
    pub async fn invalidate_for_command(&self, command: &str) {
        self.invalidate(CacheDomain::from_command(command)).await;
    }

    // == Close ==
    /// Stops every domain cache's reclamation task.
    pub fn close(&self) {
        self.cluster.close();
        self.mesh.close();
        self.packages.close();
        self.command.close();
    }
}

impl Default for CacheRegistry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

// == Process-Wide Registry ==
static GLOBAL: OnceLock<CacheRegistry> = OnceLock::new();

/// Initializes the process-wide registry with the given tuning.
///
/// Idempotent and safe under concurrent first use: only the first call
/// constructs anything, later calls return the existing registry.
pub fn init(config: RegistryConfig) -> &'static CacheRegistry {
    GLOBAL.get_or_init(|| CacheRegistry::new(config))
}

/// Returns the process-wide registry, initializing it with default tuning
/// on first use.
pub fn global() -> &'static CacheRegistry {
    GLOBAL.get_or_init(CacheRegistry::default)
}
