//! Confidence score value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A confidence score between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Confidence(u8);

impl Confidence {
    /// Zero confidence.
    pub const ZERO: Self = Self(0);

    /// Full confidence.
    pub const FULL: Self = Self(100);

    /// Creates a new Confidence, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Confidence, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "confidence",
                0,
                100,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_new_accepts_valid_values() {
        assert_eq!(Confidence::new(0).value(), 0);
        assert_eq!(Confidence::new(92).value(), 92);
        assert_eq!(Confidence::new(100).value(), 100);
    }

    #[test]
    fn confidence_new_clamps_to_100() {
        assert_eq!(Confidence::new(101).value(), 100);
        assert_eq!(Confidence::new(255).value(), 100);
    }

    #[test]
    fn confidence_try_new_rejects_over_100() {
        let result = Confidence::try_new(120);
        assert!(matches!(
            result,
            Err(ValidationError::OutOfRange { actual: 120, .. })
        ));
    }

    #[test]
    fn confidence_displays_as_percentage() {
        assert_eq!(format!("{}", Confidence::new(92)), "92%");
    }

    #[test]
    fn confidence_serializes_as_bare_number() {
        let json = serde_json::to_string(&Confidence::new(42)).unwrap();
        assert_eq!(json, "42");
    }
}
