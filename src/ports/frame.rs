//! Frame Ports - Interfaces for the camera device and frame scoring.
//!
//! The camera is a scoped resource: acquired at session/camera start and
//! released on stop and unconditionally on teardown. Scoring sends one JPEG
//! frame to an external endpoint and returns normalized emotion, facial
//! expression, and body language scores.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::emotion::EmotionSample;

/// One captured camera frame, JPEG-encoded.
#[derive(Debug, Clone, PartialEq)]
pub struct JpegFrame(Vec<u8>);

impl JpegFrame {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Errors raised by camera acquisition or frame scoring.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("camera access denied or not available: {0}")]
    CameraUnavailable(String),

    #[error("scoring endpoint returned status {status}")]
    Endpoint { status: u16 },

    #[error("network error during analysis: {0}")]
    Network(String),

    #[error("analysis timed out after {0:?}")]
    Timeout(Duration),

    #[error("malformed scoring response: {0}")]
    Malformed(String),
}

/// Facial expression scores, each on a 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FacialScores {
    pub smile: f64,
    pub eye_contact: f64,
    pub attention: f64,
}

/// Body language scores, each on a 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyScores {
    pub posture: f64,
    pub gestures: f64,
    pub movement: f64,
}

/// Everything one scored frame yields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameScores {
    pub emotions: EmotionSample,
    pub facial: FacialScores,
    pub body: BodyScores,
}

/// Port for the camera device.
#[async_trait]
pub trait FrameSource: Send + Sync {
    /// Acquires the camera, returning a live frame stream.
    ///
    /// # Errors
    ///
    /// `CameraUnavailable` when permission is refused or no device exists;
    /// the source stays stopped in that case.
    async fn acquire(&self) -> Result<Box<dyn FrameStream>, AnalysisError>;
}

/// An acquired camera stream.
#[async_trait]
pub trait FrameStream: Send {
    /// Captures the next frame.
    async fn capture(&mut self) -> Result<JpegFrame, AnalysisError>;

    /// Releases the device. Idempotent; also expected from `Drop` impls.
    fn release(&mut self);
}

/// Port for the remote frame-scoring endpoint.
#[async_trait]
pub trait FrameAnalyzer: Send + Sync {
    /// Scores one frame.
    ///
    /// # Errors
    ///
    /// Endpoint, network, timeout, and parse failures are reported to the
    /// caller; the caller decides whether to substitute simulated scores.
    async fn analyze(&self, frame: &JpegFrame) -> Result<FrameScores, AnalysisError>;
}
