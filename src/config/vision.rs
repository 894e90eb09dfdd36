//! Frame analysis configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Frame scoring endpoint configuration
///
/// Scoring is optional: without an API key emotion samples come from the
/// local random-walk simulation instead of camera frames.
#[derive(Debug, Clone, Deserialize)]
pub struct VisionConfig {
    /// Scoring endpoint API key; absent disables frame analysis
    pub api_key: Option<String>,

    /// Scoring endpoint base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Seconds between scored frames
    #[serde(default = "default_analysis_interval")]
    pub analysis_interval_secs: u64,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl VisionConfig {
    /// Get the analysis interval as Duration
    pub fn analysis_interval(&self) -> Duration {
        Duration::from_secs(self.analysis_interval_secs)
    }

    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if frame analysis is configured
    pub fn is_enabled(&self) -> bool {
        self.api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Validate vision configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl("vision"));
        }
        if self.analysis_interval_secs == 0 {
            return Err(ValidationError::InvalidInterval("vision"));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout("vision"));
        }
        Ok(())
    }
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            analysis_interval_secs: default_analysis_interval(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.tavus.io/v1".to_string()
}

fn default_analysis_interval() -> u64 {
    2
}

fn default_timeout() -> u64 {
    15
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_is_disabled_without_an_api_key() {
        assert!(!VisionConfig::default().is_enabled());
    }

    #[test]
    fn default_config_validates() {
        assert!(VisionConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_interval_fails_validation() {
        let config = VisionConfig {
            analysis_interval_secs: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidInterval("vision"))
        ));
    }

    #[test]
    fn intervals_convert_to_durations() {
        let config = VisionConfig::default();
        assert_eq!(config.analysis_interval(), Duration::from_secs(2));
        assert_eq!(config.timeout(), Duration::from_secs(15));
    }
}
