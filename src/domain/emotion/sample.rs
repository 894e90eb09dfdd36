//! Emotion sample snapshots and their simulated evolution.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::EmotionChannel;

/// A snapshot of the five affect metrics at one point in time.
///
/// Values are always inside their channel bounds; the constructor clamps.
/// Samples are produced continuously while a session is active, either by
/// the bounded random-walk simulation or by remote frame scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmotionSample {
    pub happiness: f64,
    pub confidence: f64,
    pub stress: f64,
    pub engagement: f64,
    pub authenticity: f64,
}

impl EmotionSample {
    /// Creates a sample, clamping each value into its channel bounds.
    pub fn new(happiness: f64, confidence: f64, stress: f64, engagement: f64, authenticity: f64) -> Self {
        Self {
            happiness: EmotionChannel::Happiness.clamp(happiness),
            confidence: EmotionChannel::Confidence.clamp(confidence),
            stress: EmotionChannel::Stress.clamp(stress),
            engagement: EmotionChannel::Engagement.clamp(engagement),
            authenticity: EmotionChannel::Authenticity.clamp(authenticity),
        }
    }

    /// The resting sample a fresh session starts from.
    pub fn baseline() -> Self {
        Self {
            happiness: EmotionChannel::Happiness.baseline(),
            confidence: EmotionChannel::Confidence.baseline(),
            stress: EmotionChannel::Stress.baseline(),
            engagement: EmotionChannel::Engagement.baseline(),
            authenticity: EmotionChannel::Authenticity.baseline(),
        }
    }

    /// Returns the value for one channel.
    pub fn get(&self, channel: EmotionChannel) -> f64 {
        match channel {
            EmotionChannel::Happiness => self.happiness,
            EmotionChannel::Confidence => self.confidence,
            EmotionChannel::Stress => self.stress,
            EmotionChannel::Engagement => self.engagement,
            EmotionChannel::Authenticity => self.authenticity,
        }
    }

    /// Performs one random-walk tick.
    ///
    /// Each channel moves by a uniform amount in `[-step/2, +step/2]` and is
    /// clamped back into its bounds. This is simulation, not measurement.
    pub fn drift<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut next = *self;
        for channel in EmotionChannel::ALL {
            let nudge = (rng.gen::<f64>() - 0.5) * channel.step();
            let value = channel.clamp(self.get(channel) + nudge);
            match channel {
                EmotionChannel::Happiness => next.happiness = value,
                EmotionChannel::Confidence => next.confidence = value,
                EmotionChannel::Stress => next.stress = value,
                EmotionChannel::Engagement => next.engagement = value,
                EmotionChannel::Authenticity => next.authenticity = value,
            }
        }
        next
    }
}

impl Default for EmotionSample {
    fn default() -> Self {
        Self::baseline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn in_bounds(sample: &EmotionSample) -> bool {
        EmotionChannel::ALL.iter().all(|&channel| {
            let v = sample.get(channel);
            v >= channel.min() && v <= channel.max()
        })
    }

    #[test]
    fn baseline_matches_session_start_values() {
        let sample = EmotionSample::baseline();
        assert_eq!(sample.happiness, 75.0);
        assert_eq!(sample.confidence, 68.0);
        assert_eq!(sample.stress, 25.0);
        assert_eq!(sample.engagement, 85.0);
        assert_eq!(sample.authenticity, 90.0);
    }

    #[test]
    fn new_clamps_out_of_bounds_values() {
        let sample = EmotionSample::new(150.0, 10.0, 99.0, -5.0, 61.0);
        assert_eq!(sample.happiness, 100.0);
        assert_eq!(sample.confidence, 30.0);
        assert_eq!(sample.stress, 60.0);
        assert_eq!(sample.engagement, 50.0);
        assert_eq!(sample.authenticity, 61.0);
    }

    #[test]
    fn stress_near_ceiling_stays_in_expected_window_after_one_tick() {
        // Start at 55 with step 12: one tick lands in [49, 60], clamped at 60.
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let sample = EmotionSample::new(75.0, 68.0, 55.0, 85.0, 90.0);
            let next = sample.drift(&mut rng);
            assert!(next.stress >= 43.0 && next.stress <= 60.0);
        }
    }

    #[test]
    fn drift_moves_each_channel_at_most_half_a_step() {
        let mut rng = StdRng::seed_from_u64(42);
        let sample = EmotionSample::baseline();
        let next = sample.drift(&mut rng);
        for channel in EmotionChannel::ALL {
            let delta = (next.get(channel) - sample.get(channel)).abs();
            assert!(delta <= channel.step() / 2.0 + f64::EPSILON);
        }
    }

    proptest! {
        #[test]
        fn drift_never_leaves_channel_bounds(
            seed in any::<u64>(),
            happiness in 0.0..150.0f64,
            confidence in 0.0..150.0f64,
            stress in -20.0..120.0f64,
            engagement in 0.0..150.0f64,
            authenticity in 0.0..150.0f64,
            ticks in 1usize..50,
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut sample = EmotionSample::new(happiness, confidence, stress, engagement, authenticity);
            prop_assert!(in_bounds(&sample));
            for _ in 0..ticks {
                sample = sample.drift(&mut rng);
                prop_assert!(in_bounds(&sample));
            }
        }
    }
}
