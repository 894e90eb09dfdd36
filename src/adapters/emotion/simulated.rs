//! Simulated Emotion Source - bounded random-walk sample feed.
//!
//! Publishes one drifted sample per tick. This is the default analysis
//! source when no camera is in play.

use std::time::Duration;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::{oneshot, watch};

use crate::domain::emotion::EmotionSample;
use crate::ports::{AnalysisError, EmotionFeed, EmotionSource};

/// Emotion source driven purely by the random-walk simulation.
#[derive(Debug, Clone)]
pub struct SimulatedEmotionSource {
    tick: Duration,
    initial: EmotionSample,
}

impl SimulatedEmotionSource {
    /// Creates a source ticking at the given interval, starting from the
    /// baseline sample.
    pub fn new(tick: Duration) -> Self {
        Self {
            tick,
            initial: EmotionSample::baseline(),
        }
    }

    /// Overrides the starting sample.
    pub fn with_initial(mut self, initial: EmotionSample) -> Self {
        self.initial = initial;
        self
    }
}

#[async_trait]
impl EmotionSource for SimulatedEmotionSource {
    async fn start(&self) -> Result<EmotionFeed, AnalysisError> {
        let (tx, rx) = watch::channel(self.initial);
        let (stop_tx, mut stop_rx) = oneshot::channel();
        let tick = self.tick;
        let mut sample = self.initial;

        let task = tokio::spawn(async move {
            let mut rng = StdRng::from_entropy();
            let mut interval = tokio::time::interval(tick);
            // The first tick of a tokio interval fires immediately.
            interval.tick().await;
            loop {
                tokio::select! {
                    _ = &mut stop_rx => break,
                    _ = interval.tick() => {
                        sample = sample.drift(&mut rng);
                        if tx.send(sample).is_err() {
                            break;
                        }
                    }
                }
            }
        });

        Ok(EmotionFeed::new(rx, stop_tx, task))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::emotion::EmotionChannel;

    #[tokio::test]
    async fn feed_starts_at_the_initial_sample() {
        let source = SimulatedEmotionSource::new(Duration::from_secs(60));
        let feed = source.start().await.unwrap();

        assert_eq!(feed.latest(), EmotionSample::baseline());
        feed.shutdown().await;
    }

    #[tokio::test]
    async fn samples_drift_over_ticks_but_stay_bounded() {
        let source = SimulatedEmotionSource::new(Duration::from_millis(5));
        let feed = source.start().await.unwrap();

        tokio::time::sleep(Duration::from_millis(60)).await;

        let sample = feed.latest();
        for channel in EmotionChannel::ALL {
            let value = sample.get(channel);
            assert!(value >= channel.min() && value <= channel.max());
        }
        feed.shutdown().await;
    }

    #[tokio::test]
    async fn shutdown_ends_the_producer() {
        let source = SimulatedEmotionSource::new(Duration::from_millis(5));
        let feed = source.start().await.unwrap();
        feed.shutdown().await;
    }
}
