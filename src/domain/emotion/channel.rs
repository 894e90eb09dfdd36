//! Emotion channels and their simulation parameters.

use serde::{Deserialize, Serialize};

/// One of the five tracked affect metrics.
///
/// Each channel carries its own bounds, drift step, and resting baseline.
/// The bounds are hard invariants: a sample value for a channel is always
/// clamped into `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionChannel {
    Happiness,
    Confidence,
    Stress,
    Engagement,
    Authenticity,
}

impl EmotionChannel {
    /// All channels, in display order.
    pub const ALL: [EmotionChannel; 5] = [
        EmotionChannel::Happiness,
        EmotionChannel::Confidence,
        EmotionChannel::Stress,
        EmotionChannel::Engagement,
        EmotionChannel::Authenticity,
    ];

    /// Lower bound for this channel.
    pub fn min(&self) -> f64 {
        match self {
            EmotionChannel::Happiness => 40.0,
            EmotionChannel::Confidence => 30.0,
            EmotionChannel::Stress => 0.0,
            EmotionChannel::Engagement => 50.0,
            EmotionChannel::Authenticity => 60.0,
        }
    }

    /// Upper bound for this channel.
    pub fn max(&self) -> f64 {
        match self {
            EmotionChannel::Stress => 60.0,
            _ => 100.0,
        }
    }

    /// Magnitude of one random-walk drift step.
    ///
    /// A tick moves the value by a uniform amount in `[-step/2, +step/2]`.
    pub fn step(&self) -> f64 {
        match self {
            EmotionChannel::Happiness => 10.0,
            EmotionChannel::Confidence => 8.0,
            EmotionChannel::Stress => 12.0,
            EmotionChannel::Engagement => 6.0,
            EmotionChannel::Authenticity => 4.0,
        }
    }

    /// Resting value a fresh session starts from.
    pub fn baseline(&self) -> f64 {
        match self {
            EmotionChannel::Happiness => 75.0,
            EmotionChannel::Confidence => 68.0,
            EmotionChannel::Stress => 25.0,
            EmotionChannel::Engagement => 85.0,
            EmotionChannel::Authenticity => 90.0,
        }
    }

    /// Human-readable channel name.
    pub fn label(&self) -> &'static str {
        match self {
            EmotionChannel::Happiness => "Happiness",
            EmotionChannel::Confidence => "Confidence",
            EmotionChannel::Stress => "Stress",
            EmotionChannel::Engagement => "Engagement",
            EmotionChannel::Authenticity => "Authenticity",
        }
    }

    /// Clamps a raw value into this channel's bounds.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min(), self.max())
    }
}
