//! File-based State Store Adapter
//!
//! Stores each of the four storage keys as its own JSON file under a base
//! directory. The presence of the user file decides whether any progress
//! exists; the secondary keys fall back to their initial values when their
//! files are missing.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;
use tracing::debug;

use crate::domain::profile::UserProfile;
use crate::domain::progression::ProgressSnapshot;
use crate::domain::session::{Level, SessionRecord};
use crate::ports::{
    StateStore, StateStoreError, COMPLETED_LEVELS_KEY, CURRENT_LEVEL_KEY, SESSION_HISTORY_KEY,
    USER_KEY,
};

/// JSON-file storage for the progression snapshot.
#[derive(Debug, Clone)]
pub struct FileStateStore {
    base_dir: PathBuf,
}

impl FileStateStore {
    /// Creates a store rooted at the given directory.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", key))
    }

    async fn write_key<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StateStoreError> {
        let json = serde_json::to_vec_pretty(value).map_err(|e| StateStoreError::Serialization {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        fs::write(self.key_path(key), json)
            .await
            .map_err(|e| StateStoreError::Io(e.to_string()))
    }

    /// Reads one key, returning `None` when its file does not exist.
    async fn read_key<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StateStoreError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let json = fs::read(&path)
            .await
            .map_err(|e| StateStoreError::Io(e.to_string()))?;
        let value = serde_json::from_slice(&json).map_err(|e| StateStoreError::Deserialization {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Some(value))
    }

    async fn remove_key(&self, key: &str) -> Result<(), StateStoreError> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(&path)
                .await
                .map_err(|e| StateStoreError::Io(e.to_string()))?;
        }
        Ok(())
    }
}

#[async_trait]
impl StateStore for FileStateStore {
    async fn load(&self) -> Result<Option<ProgressSnapshot>, StateStoreError> {
        // No user file means no progress at all.
        let user: Option<UserProfile> = self.read_key(USER_KEY).await?;
        let Some(user) = user else {
            return Ok(None);
        };

        let current_level = self
            .read_key::<Level>(CURRENT_LEVEL_KEY)
            .await?
            .unwrap_or(Level::FIRST);
        let completed_levels = self
            .read_key::<BTreeSet<Level>>(COMPLETED_LEVELS_KEY)
            .await?
            .unwrap_or_default();
        let session_history = self
            .read_key::<Vec<SessionRecord>>(SESSION_HISTORY_KEY)
            .await?
            .unwrap_or_default();

        Ok(Some(ProgressSnapshot {
            user,
            current_level,
            completed_levels,
            session_history,
        }))
    }

    async fn save(&self, snapshot: &ProgressSnapshot) -> Result<(), StateStoreError> {
        fs::create_dir_all(&self.base_dir)
            .await
            .map_err(|e| StateStoreError::Io(e.to_string()))?;

        self.write_key(USER_KEY, &snapshot.user).await?;
        self.write_key(CURRENT_LEVEL_KEY, &snapshot.current_level)
            .await?;
        self.write_key(COMPLETED_LEVELS_KEY, &snapshot.completed_levels)
            .await?;
        self.write_key(SESSION_HISTORY_KEY, &snapshot.session_history)
            .await?;

        debug!(dir = %self.base_dir.display(), "progress snapshot saved");
        Ok(())
    }

    async fn clear(&self) -> Result<(), StateStoreError> {
        for key in [
            USER_KEY,
            CURRENT_LEVEL_KEY,
            COMPLETED_LEVELS_KEY,
            SESSION_HISTORY_KEY,
        ] {
            self.remove_key(key).await?;
        }
        Ok(())
    }
}
