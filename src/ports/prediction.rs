//! Prediction Strategy Port - Interface for generating the future-self report.
//!
//! The shipped adapter returns a fixed template; the port exists so a model
//! that actually reads session content can be substituted later.

use crate::domain::prediction::Prediction;
use crate::domain::profile::UserProfile;

/// Strategy for deriving a future-self prediction from a profile.
pub trait PredictionStrategy: Send + Sync {
    /// Produces the prediction shown once all five levels are complete.
    fn predict(&self, profile: &UserProfile) -> Prediction;
}
