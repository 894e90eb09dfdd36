//! Simulated frame scores.
//!
//! Generates plausible score sets locally. Used as the fallback whenever
//! the remote scoring call fails, and as a standalone analyzer for runs
//! without a camera or endpoint.

use async_trait::async_trait;
use rand::Rng;

use crate::domain::emotion::EmotionSample;
use crate::ports::{AnalysisError, BodyScores, FacialScores, FrameAnalyzer, FrameScores, JpegFrame};

/// Draws one simulated score set.
///
/// Ranges mirror the degraded-dependency fallback: emotions sit in
/// flattering bands, facial and body scores spread wider.
pub fn simulated_scores<R: Rng + ?Sized>(rng: &mut R) -> FrameScores {
    FrameScores {
        emotions: EmotionSample::new(
            60.0 + rng.gen::<f64>() * 30.0,
            50.0 + rng.gen::<f64>() * 40.0,
            rng.gen::<f64>() * 40.0,
            70.0 + rng.gen::<f64>() * 25.0,
            75.0 + rng.gen::<f64>() * 20.0,
        ),
        facial: FacialScores {
            smile: rng.gen::<f64>() * 100.0,
            eye_contact: 60.0 + rng.gen::<f64>() * 30.0,
            attention: 70.0 + rng.gen::<f64>() * 25.0,
        },
        body: BodyScores {
            posture: 60.0 + rng.gen::<f64>() * 30.0,
            gestures: rng.gen::<f64>() * 100.0,
            movement: rng.gen::<f64>() * 100.0,
        },
    }
}

/// Analyzer that never touches the network.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedFrameAnalyzer;

impl SimulatedFrameAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FrameAnalyzer for SimulatedFrameAnalyzer {
    async fn analyze(&self, _frame: &JpegFrame) -> Result<FrameScores, AnalysisError> {
        Ok(simulated_scores(&mut rand::thread_rng()))
    }
}
