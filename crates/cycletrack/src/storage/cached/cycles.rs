//! Cached cycle repository decorator.
//!
//! Wraps a `CycleStore` implementation with the cache-aside pattern. The
//! store is authoritative; the cache holds each user's full cycle
//! collection under a single key.
//!
//! - **Reads**: check cache first, on miss fetch from the store and
//!   populate the cache. A corrupt or version-mismatched entry counts as a
//!   miss, never an error.
//! - **Creates/Updates**: persist to the store, then repopulate the cache
//!   with the fresh collection so the next read is a hit.
//! - **Deletes**: persist to the store, then invalidate.
//!
//! Cache failures after a successful store write are logged and swallowed;
//! the store write already succeeded and the next read repairs the cache.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use cycletrack_core::cache::{
    cycle_key, deserialize_cycles, serialize_cycles, user_cycles_key, Cache,
};
use cycletrack_core::cycle::{validate_draft, Cycle, CycleDraft};
use cycletrack_core::storage::{CycleRepository, CycleStore, RepositoryError, Result};

/// Cached cycle repository decorator.
///
/// # Type Parameters
///
/// * `S` - The underlying store implementation
/// * `C` - The cache implementation
pub struct CachedCycleRepository<S, C>
where
    S: CycleStore,
    C: Cache,
{
    store: Arc<S>,
    cache: Arc<C>,
    ttl: Duration,
}

impl<S, C> CachedCycleRepository<S, C>
where
    S: CycleStore,
    C: Cache,
{
    /// Creates a new cached cycle repository.
    pub fn new(store: Arc<S>, cache: Arc<C>, ttl: Duration) -> Self {
        Self { store, cache, ttl }
    }

    /// Writes a cycle collection into the cache under the user's key.
    ///
    /// Failures are logged and swallowed: the store already holds the
    /// truth, and the next read will repopulate.
    async fn populate(&self, user_id: Uuid, cycles: &[Cycle]) {
        let bytes = match serialize_cycles(cycles) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(%user_id, error = %err, "Failed to serialize cycles for cache");
                return;
            }
        };

        let key = user_cycles_key(user_id);
        if let Err(err) = self.cache.set(&key, &bytes, Some(self.ttl)).await {
            tracing::warn!(%user_id, error = %err, "Failed to cache cycles");
        }
    }

    /// Re-reads the user's collection from the store and overwrites the
    /// cached copy with a fresh TTL.
    async fn refresh(&self, user_id: Uuid) {
        match self.store.find_by_user(user_id).await {
            Ok(cycles) => self.populate(user_id, &cycles).await,
            Err(err) => {
                tracing::warn!(%user_id, error = %err, "Failed to refresh cycle cache");
            }
        }
    }

    /// Fetches a cycle and verifies it belongs to `user_id`.
    ///
    /// A cycle owned by another user is indistinguishable from a missing
    /// one: both report `NotFound` so record ids never leak across users.
    async fn owned_cycle(&self, user_id: Uuid, cycle_id: Uuid) -> Result<Cycle> {
        match self.store.find_one(cycle_id).await? {
            Some(cycle) if cycle.user_id == user_id => Ok(cycle),
            Some(_) => {
                tracing::debug!(%user_id, %cycle_id, "Cycle owned by another user");
                Err(RepositoryError::cycle_not_found(cycle_id))
            }
            None => Err(RepositoryError::cycle_not_found(cycle_id)),
        }
    }
}

#[async_trait]
impl<S, C> CycleRepository for CachedCycleRepository<S, C>
where
    S: CycleStore + 'static,
    C: Cache + 'static,
{
    async fn create_cycle(&self, user_id: Uuid, draft: CycleDraft) -> Result<Cycle> {
        validate_draft(&draft)?;

        let cycle = Cycle::from_draft(user_id, draft);
        self.store.insert(&cycle).await?;

        self.refresh(user_id).await;

        tracing::debug!(cycle_id = %cycle.id, %user_id, "Cycle created");
        Ok(cycle)
    }

    async fn list_cycles(&self, user_id: Uuid) -> Result<Vec<Cycle>> {
        let key = user_cycles_key(user_id);

        // Check cache first. An empty collection is a legitimate hit.
        if let Ok(Some(bytes)) = self.cache.get(&key).await {
            match deserialize_cycles(&bytes) {
                Ok(cycles) => {
                    tracing::trace!(%user_id, count = cycles.len(), "Cache hit for cycles");
                    return Ok(cycles);
                }
                Err(err) => {
                    // Corrupt or stale-schema entry - treat as cache miss
                    tracing::warn!(%user_id, error = %err, "Cache entry unreadable, treating as miss");
                }
            }
        }

        // Cache miss - fetch from the store
        tracing::trace!(%user_id, "Cache miss for cycles");
        let cycles = self.store.find_by_user(user_id).await?;

        self.populate(user_id, &cycles).await;

        Ok(cycles)
    }

    async fn update_cycle(
        &self,
        user_id: Uuid,
        cycle_id: Uuid,
        draft: CycleDraft,
    ) -> Result<Cycle> {
        validate_draft(&draft)?;

        let mut cycle = self.owned_cycle(user_id, cycle_id).await?;
        cycle.apply_draft(draft);

        self.store.replace(&cycle).await?;

        // Drop any stale single-cycle entry, then repopulate the collection
        if let Err(err) = self.cache.delete(&cycle_key(cycle_id)).await {
            tracing::warn!(%cycle_id, error = %err, "Failed to invalidate cycle cache");
        }
        self.refresh(user_id).await;

        tracing::debug!(%cycle_id, %user_id, "Cycle updated");
        Ok(cycle)
    }

    async fn delete_cycle(&self, user_id: Uuid, cycle_id: Uuid) -> Result<()> {
        self.owned_cycle(user_id, cycle_id).await?;

        self.store.remove(cycle_id).await?;

        if let Err(err) = self.cache.delete(&cycle_key(cycle_id)).await {
            tracing::warn!(%cycle_id, error = %err, "Failed to invalidate cycle cache");
        }
        if let Err(err) = self.cache.delete(&user_cycles_key(user_id)).await {
            tracing::warn!(%user_id, error = %err, "Failed to invalidate cycles cache");
        }

        tracing::debug!(%cycle_id, %user_id, "Cycle deleted");
        Ok(())
    }
}
