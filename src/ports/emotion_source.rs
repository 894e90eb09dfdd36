//! Emotion Source Port - Interface for the live emotion sample feed.
//!
//! Whatever produces samples (random-walk simulation or camera frame
//! scoring) sits behind this port: start a feed, read the latest sample at
//! any moment, stop the feed. Sessions only ever consume the
//! "current sample" read contract.

use async_trait::async_trait;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;

use crate::domain::emotion::EmotionSample;

use super::AnalysisError;

/// Port for starting a live emotion feed.
#[async_trait]
pub trait EmotionSource: Send + Sync {
    /// Starts producing samples.
    ///
    /// # Errors
    ///
    /// Resource acquisition failures (for camera-backed sources) surface
    /// here; the source stays stopped in that case.
    async fn start(&self) -> Result<EmotionFeed, AnalysisError>;
}

/// Handle to one running emotion feed.
///
/// The producer task publishes samples on a watch channel and shuts down
/// when signalled. Stopping is idempotent, and dropping the feed stops it
/// unconditionally so teardown can never leak the producer.
pub struct EmotionFeed {
    samples: watch::Receiver<EmotionSample>,
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl EmotionFeed {
    /// Wraps a producer task and its channels.
    pub fn new(
        samples: watch::Receiver<EmotionSample>,
        shutdown: oneshot::Sender<()>,
        task: JoinHandle<()>,
    ) -> Self {
        Self {
            samples,
            shutdown: Some(shutdown),
            task: Some(task),
        }
    }

    /// The most recently published sample.
    pub fn latest(&self) -> EmotionSample {
        *self.samples.borrow()
    }

    /// Signals the producer to stop. Idempotent.
    pub fn stop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }

    /// Stops the feed and waits for the producer to finish cleanup.
    pub async fn shutdown(mut self) {
        self.stop();
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for EmotionFeed {
    fn drop(&mut self) {
        self.stop();
    }
}
