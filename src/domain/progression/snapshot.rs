//! Persisted view of cross-level progress.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::profile::UserProfile;
use crate::domain::session::{Level, SessionRecord};

/// The durable subset of progression state.
///
/// Maps one-to-one onto the four storage keys: `user`, `currentLevel`,
/// `completedLevels`, `sessionHistory`. A snapshot only exists once a
/// profile has been registered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    pub user: UserProfile,
    pub current_level: Level,
    pub completed_levels: BTreeSet<Level>,
    pub session_history: Vec<SessionRecord>,
}
