//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `FUTURE_YOU` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use future_you::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Storing progress under {}", config.storage.data_dir.display());
//! ```

mod error;
mod session;
mod speech;
mod storage;
mod vision;

pub use error::{ConfigError, ValidationError};
pub use session::SessionConfig;
pub use speech::SpeechConfig;
pub use storage::StorageConfig;
pub use vision::VisionConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section carries workable defaults, so the application starts with
/// no environment set at all: local storage, no synthesis, simulated
/// emotion samples.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Progress snapshot storage
    #[serde(default)]
    pub storage: StorageConfig,

    /// Text-to-speech endpoint
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Frame scoring endpoint
    #[serde(default)]
    pub vision: VisionConfig,

    /// Session pacing
    #[serde(default)]
    pub session: SessionConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file if present, then reads environment variables
    /// with the `FUTURE_YOU` prefix, using `__` to separate nested values:
    ///
    /// - `FUTURE_YOU__STORAGE__DATA_DIR=/var/lib/future-you`
    /// - `FUTURE_YOU__SPEECH__API_KEY=xi-...`
    /// - `FUTURE_YOU__SESSION__EMOTION_TICK_SECS=1`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when values cannot be parsed into the
    /// expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("FUTURE_YOU")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        self.speech.validate()?;
        self.vision.validate()?;
        self.session.validate()?;
        Ok(())
    }
}
