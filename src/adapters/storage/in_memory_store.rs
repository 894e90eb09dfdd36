//! In-memory State Store Adapter
//!
//! Holds the snapshot behind a lock. Used by tests and ephemeral runs.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::progression::ProgressSnapshot;
use crate::ports::{StateStore, StateStoreError};

/// Volatile snapshot storage.
#[derive(Debug, Default)]
pub struct InMemoryStateStore {
    snapshot: RwLock<Option<ProgressSnapshot>>,
}

impl InMemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StateStore for InMemoryStateStore {
    async fn load(&self) -> Result<Option<ProgressSnapshot>, StateStoreError> {
        Ok(self.snapshot.read().await.clone())
    }

    async fn save(&self, snapshot: &ProgressSnapshot) -> Result<(), StateStoreError> {
        *self.snapshot.write().await = Some(snapshot.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StateStoreError> {
        *self.snapshot.write().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::{PredictionHorizon, UserProfile};
    use crate::domain::session::Level;
    use std::collections::BTreeSet;

    fn snapshot() -> ProgressSnapshot {
        ProgressSnapshot {
            user: UserProfile::new("Ava", 29, "Engineer", PredictionHorizon::TenYears).unwrap(),
            current_level: Level::FIRST,
            completed_levels: BTreeSet::new(),
            session_history: Vec::new(),
        }
    }

    #[tokio::test]
    async fn load_returns_none_until_something_is_saved() {
        let store = InMemoryStateStore::new();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_then_load_roundtrips() {
        let store = InMemoryStateStore::new();
        let snap = snapshot();

        store.save(&snap).await.unwrap();

        assert_eq!(store.load().await.unwrap(), Some(snap));
    }

    #[tokio::test]
    async fn clear_removes_the_snapshot() {
        let store = InMemoryStateStore::new();
        store.save(&snapshot()).await.unwrap();

        store.clear().await.unwrap();

        assert!(store.load().await.unwrap().is_none());
    }
}
