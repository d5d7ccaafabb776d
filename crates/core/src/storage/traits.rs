use async_trait::async_trait;
use uuid::Uuid;

use crate::cycle::{Cycle, CycleDraft};

use super::Result;

/// Low-level store for cycle records.
///
/// Implementations persist cycles and know nothing about ownership rules or
/// caching. The store is the authoritative source of truth; the caching
/// layer sits on top of it.
#[async_trait]
pub trait CycleStore: Send + Sync {
    /// Gets all cycles belonging to a user, ordered by start date then id.
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Cycle>>;

    /// Gets a cycle by its ID.
    async fn find_one(&self, id: Uuid) -> Result<Option<Cycle>>;

    /// Inserts a new cycle.
    async fn insert(&self, cycle: &Cycle) -> Result<()>;

    /// Replaces an existing cycle. Fails with `NotFound` if absent.
    async fn replace(&self, cycle: &Cycle) -> Result<()>;

    /// Removes a cycle by its ID. Fails with `NotFound` if absent.
    async fn remove(&self, id: Uuid) -> Result<()>;

    /// Reports whether the store backend is reachable.
    async fn is_alive(&self) -> bool;
}

/// User-facing cycle operations.
///
/// Every method takes the authenticated user's id; implementations must
/// never return or modify cycles belonging to another user. A cycle that
/// exists but is owned by someone else is reported as `NotFound`.
#[async_trait]
pub trait CycleRepository: Send + Sync {
    /// Validates a draft and creates a cycle for the user.
    async fn create_cycle(&self, user_id: Uuid, draft: CycleDraft) -> Result<Cycle>;

    /// Gets all cycles belonging to the user.
    async fn list_cycles(&self, user_id: Uuid) -> Result<Vec<Cycle>>;

    /// Validates a draft and fully replaces the user's cycle with it.
    async fn update_cycle(&self, user_id: Uuid, cycle_id: Uuid, draft: CycleDraft)
        -> Result<Cycle>;

    /// Deletes the user's cycle.
    async fn delete_cycle(&self, user_id: Uuid, cycle_id: Uuid) -> Result<()>;
}
