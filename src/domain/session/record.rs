//! Immutable record of one completed level.

use serde::{Deserialize, Serialize};

use crate::domain::emotion::EmotionSample;
use crate::domain::foundation::Timestamp;

use super::Level;

/// Everything retained from one traversal of a level's prompts.
///
/// Created once at session completion, appended to history, never mutated
/// or deleted except by full application reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    level: Level,
    transcript: String,
    emotions: EmotionSample,
    ai_response: String,
    feedback: String,
    timestamp: Timestamp,
}

impl SessionRecord {
    /// Assembles a record at session completion time.
    pub fn new(
        level: Level,
        transcript: String,
        emotions: EmotionSample,
        ai_response: String,
        feedback: String,
    ) -> Self {
        Self {
            level,
            transcript,
            emotions,
            ai_response,
            feedback,
            timestamp: Timestamp::now(),
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn emotions(&self) -> &EmotionSample {
        &self.emotions
    }

    pub fn ai_response(&self) -> &str {
        &self.ai_response
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}
