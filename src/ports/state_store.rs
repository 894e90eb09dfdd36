//! State Store Port - Interface for persisting progression snapshots.
//!
//! Storage is a small named-value space; the four keys below are the whole
//! schema. There are no migrations and no versioning.

use async_trait::async_trait;

use crate::domain::progression::ProgressSnapshot;

/// Storage key for the registered user profile.
pub const USER_KEY: &str = "user";
/// Storage key for the current unlocked level.
pub const CURRENT_LEVEL_KEY: &str = "currentLevel";
/// Storage key for the set of completed levels (serialized as an array).
pub const COMPLETED_LEVELS_KEY: &str = "completedLevels";
/// Storage key for the ordered session history.
pub const SESSION_HISTORY_KEY: &str = "sessionHistory";

/// Errors that can occur during state storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StateStoreError {
    #[error("failed to serialize state for key '{key}': {reason}")]
    Serialization { key: String, reason: String },

    #[error("failed to deserialize state for key '{key}': {reason}")]
    Deserialization { key: String, reason: String },

    #[error("storage io error: {0}")]
    Io(String),
}

/// Port for persisting and loading the progression snapshot.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Loads the persisted snapshot.
    ///
    /// Returns `None` when no profile has ever been saved; missing
    /// secondary keys fall back to their initial values.
    async fn load(&self) -> Result<Option<ProgressSnapshot>, StateStoreError>;

    /// Saves the snapshot, overwriting all four keys.
    async fn save(&self, snapshot: &ProgressSnapshot) -> Result<(), StateStoreError>;

    /// Removes every persisted key. Safe to call when nothing is stored.
    async fn clear(&self) -> Result<(), StateStoreError>;
}
