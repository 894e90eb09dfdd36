//! Speech synthesis configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Text-to-speech endpoint configuration
///
/// Synthesis is optional: without an API key the experience runs with
/// spoken prompts skipped.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechConfig {
    /// Synthesis endpoint API key; absent disables voice output
    pub api_key: Option<String>,

    /// Voice to synthesize with
    #[serde(default = "default_voice_id")]
    pub voice_id: String,

    /// Synthesis endpoint base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl SpeechConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if synthesis is configured
    pub fn is_enabled(&self) -> bool {
        self.api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Validate speech configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl("speech"));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout("speech"));
        }
        Ok(())
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            voice_id: default_voice_id(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_voice_id() -> String {
    "pNInz6obpgDQGcFmaJgB".to_string()
}

fn default_base_url() -> String {
    "https://api.elevenlabs.io/v1".to_string()
}

fn default_timeout() -> u64 {
    30
}
