//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It uses repository trait objects for storage abstraction
//! and supports different backend combinations via feature flags.

use std::sync::Arc;

use cycletrack_core::cache::Cache;
use cycletrack_core::storage::{CycleRepository, CycleStore};

use crate::config::Config;

// ============================================================================
// Compile-time feature validation
// ============================================================================

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!("Cannot enable both 'sqlite' and 'inmemory' storage features");

#[cfg(not(any(feature = "inmemory", feature = "sqlite")))]
compile_error!("Must enable exactly one storage feature: 'inmemory' or 'sqlite'");

// Cache features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "memory", feature = "redis"))]
compile_error!("Cannot enable both 'memory' and 'redis' cache features");

#[cfg(not(any(feature = "memory", feature = "redis")))]
compile_error!("Must enable exactly one cache feature: 'memory' or 'redis'");

/// Shared application state.
///
/// This is cloned for each request handler and contains shared resources.
/// Handlers go through `cycles` for all cycle operations; the raw `store`
/// and `cache` handles are kept for health probes and session lookups.
#[derive(Clone)]
pub struct AppState {
    /// Cycle repository (cached, wraps underlying storage).
    pub cycles: Arc<dyn CycleRepository>,
    /// Authoritative cycle store, used directly by the health probe.
    pub store: Arc<dyn CycleStore>,
    /// Cache backend, used by the health probe and session lookups.
    pub cache: Arc<dyn Cache>,
}

impl AppState {
    /// Creates a new AppState from its parts.
    fn build(
        cycles: Arc<dyn CycleRepository>,
        store: Arc<dyn CycleStore>,
        cache: Arc<dyn Cache>,
    ) -> Self {
        Self {
            cycles,
            store,
            cache,
        }
    }
}

// ============================================================================
// Factory functions for different backend combinations
// ============================================================================

#[cfg(all(feature = "inmemory", feature = "memory"))]
mod inmemory_memory {
    use super::*;
    use crate::cache::memory::MemoryCache;
    use crate::storage::cached::CachedCycleRepository;
    use crate::storage::InMemoryStore;

    impl AppState {
        /// Creates AppState with in-memory storage and cache.
        /// Useful for testing without any external dependencies.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store = Arc::new(InMemoryStore::new());
            let cache = Arc::new(MemoryCache::new(config.cache_max_entries));

            let cycles = Arc::new(CachedCycleRepository::new(
                store.clone(),
                cache.clone(),
                config.cache_ttl(),
            ));

            Ok(Self::build(cycles, store, cache))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "redis"))]
mod inmemory_redis {
    use super::*;
    use crate::cache::redis_impl::RedisCache;
    use crate::storage::cached::CachedCycleRepository;
    use crate::storage::InMemoryStore;

    impl AppState {
        /// Creates AppState with in-memory storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store = Arc::new(InMemoryStore::new());
            let cache = Arc::new(RedisCache::new(&config.redis_url).await?);

            let cycles = Arc::new(CachedCycleRepository::new(
                store.clone(),
                cache.clone(),
                config.cache_ttl(),
            ));

            Ok(Self::build(cycles, store, cache))
        }
    }
}

#[cfg(all(feature = "sqlite", feature = "memory"))]
mod sqlite_memory {
    use super::*;
    use crate::cache::memory::MemoryCache;
    use crate::storage::cached::CachedCycleRepository;
    use crate::storage::SqliteStore;

    impl AppState {
        /// Creates AppState with SQLite storage and in-memory cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store = Arc::new(SqliteStore::new(&config.sqlite_path).await?);
            let cache = Arc::new(MemoryCache::new(config.cache_max_entries));

            let cycles = Arc::new(CachedCycleRepository::new(
                store.clone(),
                cache.clone(),
                config.cache_ttl(),
            ));

            Ok(Self::build(cycles, store, cache))
        }
    }
}

#[cfg(all(feature = "sqlite", feature = "redis"))]
mod sqlite_redis {
    use super::*;
    use crate::cache::redis_impl::RedisCache;
    use crate::storage::cached::CachedCycleRepository;
    use crate::storage::SqliteStore;

    impl AppState {
        /// Creates AppState with SQLite storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store = Arc::new(SqliteStore::new(&config.sqlite_path).await?);
            let cache = Arc::new(RedisCache::new(&config.redis_url).await?);

            let cycles = Arc::new(CachedCycleRepository::new(
                store.clone(),
                cache.clone(),
                config.cache_ttl(),
            ));

            Ok(Self::build(cycles, store, cache))
        }
    }
}
