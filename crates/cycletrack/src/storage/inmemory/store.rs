//! In-memory cycle store implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use cycletrack_core::cycle::Cycle;
use cycletrack_core::storage::{CycleStore, RepositoryError, Result};

/// In-memory storage backend for testing.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the store is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    cycles: Arc<RwLock<HashMap<Uuid, Cycle>>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CycleStore for InMemoryStore {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Cycle>> {
        let cycles = self.cycles.read().await;
        let mut result: Vec<Cycle> = cycles
            .values()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        result.sort_by_key(|c| (c.start_date, c.id));
        Ok(result)
    }

    async fn find_one(&self, id: Uuid) -> Result<Option<Cycle>> {
        let cycles = self.cycles.read().await;
        Ok(cycles.get(&id).cloned())
    }

    async fn insert(&self, cycle: &Cycle) -> Result<()> {
        let mut cycles = self.cycles.write().await;
        cycles.insert(cycle.id, cycle.clone());
        Ok(())
    }

    async fn replace(&self, cycle: &Cycle) -> Result<()> {
        let mut cycles = self.cycles.write().await;
        if !cycles.contains_key(&cycle.id) {
            return Err(RepositoryError::cycle_not_found(cycle.id));
        }
        cycles.insert(cycle.id, cycle.clone());
        Ok(())
    }

    async fn remove(&self, id: Uuid) -> Result<()> {
        let mut cycles = self.cycles.write().await;
        if cycles.remove(&id).is_none() {
            return Err(RepositoryError::cycle_not_found(id));
        }
        Ok(())
    }

    async fn is_alive(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use cycletrack_core::cycle::CycleDraft;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn cycle_for(user_id: Uuid, month: &str, start: NaiveDate) -> Cycle {
        Cycle::from_draft(user_id, CycleDraft::new(month, 5, 28, start))
    }

    #[tokio::test]
    async fn test_insert_and_find_one() {
        let store = InMemoryStore::new();
        let cycle = cycle_for(Uuid::new_v4(), "Jan", date(1, 1));

        store.insert(&cycle).await.unwrap();

        let found = store.find_one(cycle.id).await.unwrap();
        assert_eq!(found, Some(cycle));
    }

    #[tokio::test]
    async fn test_find_by_user_filters_and_orders() {
        let store = InMemoryStore::new();
        let user_id = Uuid::new_v4();
        let feb = cycle_for(user_id, "Feb", date(2, 1));
        let jan = cycle_for(user_id, "Jan", date(1, 1));
        let other = cycle_for(Uuid::new_v4(), "Jan", date(1, 1));

        store.insert(&feb).await.unwrap();
        store.insert(&jan).await.unwrap();
        store.insert(&other).await.unwrap();

        let cycles = store.find_by_user(user_id).await.unwrap();
        assert_eq!(cycles.len(), 2);
        assert_eq!(cycles[0].id, jan.id);
        assert_eq!(cycles[1].id, feb.id);
    }

    #[tokio::test]
    async fn test_find_by_user_empty() {
        let store = InMemoryStore::new();

        let cycles = store.find_by_user(Uuid::new_v4()).await.unwrap();
        assert!(cycles.is_empty());
    }

    #[tokio::test]
    async fn test_replace_existing() {
        let store = InMemoryStore::new();
        let mut cycle = cycle_for(Uuid::new_v4(), "Jan", date(1, 1));
        store.insert(&cycle).await.unwrap();

        cycle.month = "January".to_string();
        store.replace(&cycle).await.unwrap();

        let found = store.find_one(cycle.id).await.unwrap().unwrap();
        assert_eq!(found.month, "January");
    }

    #[tokio::test]
    async fn test_replace_missing_fails() {
        let store = InMemoryStore::new();
        let cycle = cycle_for(Uuid::new_v4(), "Jan", date(1, 1));

        let result = store.replace(&cycle).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_remove() {
        let store = InMemoryStore::new();
        let cycle = cycle_for(Uuid::new_v4(), "Jan", date(1, 1));
        store.insert(&cycle).await.unwrap();

        store.remove(cycle.id).await.unwrap();
        assert_eq!(store.find_one(cycle.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove_missing_fails() {
        let store = InMemoryStore::new();

        let result = store.remove(Uuid::new_v4()).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }
}
