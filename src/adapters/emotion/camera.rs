//! Camera Emotion Source - frame-scoring sample feed.
//!
//! Acquires the camera, then on every tick captures a frame and sends it to
//! the analyzer. A failed scoring call substitutes locally simulated scores
//! so the feed keeps publishing while the dependency is degraded; only a
//! failed camera acquisition is reported to the caller. The camera is
//! released on stop and unconditionally when the feed winds down.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::{oneshot, watch};
use tracing::warn;

use crate::adapters::vision::simulated_scores;
use crate::domain::emotion::EmotionSample;
use crate::ports::{AnalysisError, EmotionFeed, EmotionSource, FrameAnalyzer, FrameSource};

/// Emotion source backed by camera frames and remote scoring.
pub struct CameraEmotionSource {
    camera: Arc<dyn FrameSource>,
    analyzer: Arc<dyn FrameAnalyzer>,
    interval: Duration,
}

impl CameraEmotionSource {
    /// Creates a source scoring one frame per interval.
    pub fn new(
        camera: Arc<dyn FrameSource>,
        analyzer: Arc<dyn FrameAnalyzer>,
        interval: Duration,
    ) -> Self {
        Self {
            camera,
            analyzer,
            interval,
        }
    }
}

#[async_trait]
impl EmotionSource for CameraEmotionSource {
    async fn start(&self) -> Result<EmotionFeed, AnalysisError> {
        // Acquisition failures surface to the caller; the source stays
        // stopped and nothing needs releasing.
        let mut stream = self.camera.acquire().await?;

        let (tx, rx) = watch::channel(EmotionSample::baseline());
        let (stop_tx, mut stop_rx) = oneshot::channel();
        let analyzer = Arc::clone(&self.analyzer);
        let tick = self.interval;

        let task = tokio::spawn(async move {
            let mut rng = StdRng::from_entropy();
            let mut interval = tokio::time::interval(tick);
            interval.tick().await;
            loop {
                tokio::select! {
                    _ = &mut stop_rx => break,
                    _ = interval.tick() => {
                        let scores = match stream.capture().await {
                            Ok(frame) => match analyzer.analyze(&frame).await {
                                Ok(scores) => scores,
                                Err(err) => {
                                    warn!(%err, "frame scoring failed; substituting simulated scores");
                                    simulated_scores(&mut rng)
                                }
                            },
                            Err(err) => {
                                warn!(%err, "frame capture failed; substituting simulated scores");
                                simulated_scores(&mut rng)
                            }
                        };
                        if tx.send(scores.emotions).is_err() {
                            break;
                        }
                    }
                }
            }
            stream.release();
        });

        Ok(EmotionFeed::new(rx, stop_tx, task))
    }
}
