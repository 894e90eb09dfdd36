//! Session pacing configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Pacing of one interaction session
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Seconds between emotion simulation ticks
    #[serde(default = "default_emotion_tick")]
    pub emotion_tick_secs: u64,

    /// Seconds of pause between an accepted answer and the next prompt
    #[serde(default = "default_prompt_pause")]
    pub prompt_pause_secs: u64,

    /// Seconds to wait for a final transcript before giving up
    #[serde(default = "default_listen_timeout")]
    pub listen_timeout_secs: u64,
}

impl SessionConfig {
    /// Get the emotion tick as Duration
    pub fn emotion_tick(&self) -> Duration {
        Duration::from_secs(self.emotion_tick_secs)
    }

    /// Get the prompt pause as Duration
    pub fn prompt_pause(&self) -> Duration {
        Duration::from_secs(self.prompt_pause_secs)
    }

    /// Get the listen timeout as Duration
    pub fn listen_timeout(&self) -> Duration {
        Duration::from_secs(self.listen_timeout_secs)
    }

    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.emotion_tick_secs == 0 {
            return Err(ValidationError::InvalidInterval("session emotion tick"));
        }
        if self.listen_timeout_secs == 0 || self.listen_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout("session listening"));
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            emotion_tick_secs: default_emotion_tick(),
            prompt_pause_secs: default_prompt_pause(),
            listen_timeout_secs: default_listen_timeout(),
        }
    }
}

fn default_emotion_tick() -> u64 {
    3
}

fn default_prompt_pause() -> u64 {
    2
}

fn default_listen_timeout() -> u64 {
    30
}
