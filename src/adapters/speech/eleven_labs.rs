//! ElevenLabs Synthesizer - SpeechSynthesizer implementation over HTTP.
//!
//! Posts text plus voice settings to the text-to-speech endpoint and
//! returns the audio bytes as a playable clip.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use tracing::debug;

use crate::ports::{AudioClip, SpeechError, SpeechSynthesizer, VoiceSettings};

const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io/v1";
const DEFAULT_VOICE_ID: &str = "pNInz6obpgDQGcFmaJgB";
const MODEL_ID: &str = "eleven_monolingual_v1";

/// Configuration for the ElevenLabs synthesizer.
#[derive(Debug, Clone)]
pub struct ElevenLabsConfig {
    api_key: Secret<String>,
    pub voice_id: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl ElevenLabsConfig {
    /// Creates a configuration with the given API key and defaults.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            voice_id: DEFAULT_VOICE_ID.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the voice to synthesize with.
    pub fn with_voice_id(mut self, voice_id: impl Into<String>) -> Self {
        self.voice_id = voice_id.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

#[derive(Serialize)]
struct SynthesisRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: &'a VoiceSettings,
}

/// HTTP speech synthesizer.
pub struct ElevenLabsSynthesizer {
    config: ElevenLabsConfig,
    client: Client,
}

impl ElevenLabsSynthesizer {
    /// Creates a synthesizer with the given configuration.
    pub fn new(config: ElevenLabsConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn synthesis_url(&self) -> String {
        format!(
            "{}/text-to-speech/{}",
            self.config.base_url, self.config.voice_id
        )
    }

    fn map_transport_error(&self, err: reqwest::Error) -> SpeechError {
        if err.is_timeout() {
            SpeechError::Timeout(self.config.timeout)
        } else {
            SpeechError::Network(err.to_string())
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabsSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        settings: &VoiceSettings,
    ) -> Result<AudioClip, SpeechError> {
        let body = SynthesisRequest {
            text,
            model_id: MODEL_ID,
            voice_settings: settings,
        };

        let response = self
            .client
            .post(self.synthesis_url())
            .header("Accept", "audio/mpeg")
            .header("xi-api-key", self.config.api_key())
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SpeechError::Endpoint {
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        debug!(chars = text.len(), bytes = bytes.len(), "speech synthesized");
        Ok(AudioClip::new(bytes.to_vec(), "audio/mpeg"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_target_the_public_endpoint() {
        let config = ElevenLabsConfig::new("key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.voice_id, DEFAULT_VOICE_ID);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn builders_override_defaults() {
        let config = ElevenLabsConfig::new("key")
            .with_voice_id("custom-voice")
            .with_base_url("http://localhost:9999/v1")
            .with_timeout(Duration::from_secs(5));

        let synthesizer = ElevenLabsSynthesizer::new(config);
        assert_eq!(
            synthesizer.synthesis_url(),
            "http://localhost:9999/v1/text-to-speech/custom-voice"
        );
    }

    #[test]
    fn request_body_carries_the_model_and_settings() {
        let settings = VoiceSettings::default();
        let body = SynthesisRequest {
            text: "Hello",
            model_id: MODEL_ID,
            voice_settings: &settings,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model_id"], "eleven_monolingual_v1");
        assert_eq!(json["voice_settings"]["stability"], 0.75);
    }

    #[tokio::test]
    async fn unreachable_endpoint_surfaces_a_network_error() {
        let config = ElevenLabsConfig::new("key")
            .with_base_url("http://127.0.0.1:1/v1")
            .with_timeout(Duration::from_secs(1));
        let synthesizer = ElevenLabsSynthesizer::new(config);

        let result = synthesizer
            .synthesize("Hello", &VoiceSettings::default())
            .await;

        assert!(matches!(
            result,
            Err(SpeechError::Network(_)) | Err(SpeechError::Timeout(_))
        ));
    }
}
