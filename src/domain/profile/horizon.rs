//! Prediction horizon value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// How far into the future the user wants their prediction to reach.
///
/// Only the four horizons offered by the registration form are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PredictionHorizon {
    FiveYears,
    TenYears,
    FifteenYears,
    TwentyYears,
}

impl PredictionHorizon {
    /// All selectable horizons, in form order.
    pub const ALL: [PredictionHorizon; 4] = [
        PredictionHorizon::FiveYears,
        PredictionHorizon::TenYears,
        PredictionHorizon::FifteenYears,
        PredictionHorizon::TwentyYears,
    ];

    /// The horizon expressed in years.
    pub fn as_years(&self) -> u32 {
        match self {
            PredictionHorizon::FiveYears => 5,
            PredictionHorizon::TenYears => 10,
            PredictionHorizon::FifteenYears => 15,
            PredictionHorizon::TwentyYears => 20,
        }
    }

    /// Parses a year count from the fixed set {5, 10, 15, 20}.
    pub fn try_from_years(years: u32) -> Result<Self, ValidationError> {
        match years {
            5 => Ok(PredictionHorizon::FiveYears),
            10 => Ok(PredictionHorizon::TenYears),
            15 => Ok(PredictionHorizon::FifteenYears),
            20 => Ok(PredictionHorizon::TwentyYears),
            other => Err(ValidationError::invalid_format(
                "yearsToPredict",
                format!("{} is not one of the offered horizons (5, 10, 15, 20)", other),
            )),
        }
    }
}

impl Default for PredictionHorizon {
    fn default() -> Self {
        Self::FiveYears
    }
}

impl TryFrom<u32> for PredictionHorizon {
    type Error = ValidationError;

    fn try_from(years: u32) -> Result<Self, Self::Error> {
        Self::try_from_years(years)
    }
}

impl From<PredictionHorizon> for u32 {
    fn from(horizon: PredictionHorizon) -> u32 {
        horizon.as_years()
    }
}

impl fmt::Display for PredictionHorizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} years", self.as_years())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_offered_horizon_parses() {
        for horizon in PredictionHorizon::ALL {
            assert_eq!(
                PredictionHorizon::try_from_years(horizon.as_years()).unwrap(),
                horizon
            );
        }
    }

    #[test]
    fn unoffered_year_counts_are_rejected() {
        for years in [0, 1, 7, 25, 100] {
            assert!(PredictionHorizon::try_from_years(years).is_err());
        }
    }

    #[test]
    fn serializes_as_bare_year_count() {
        let json = serde_json::to_string(&PredictionHorizon::TenYears).unwrap();
        assert_eq!(json, "10");
    }

    #[test]
    fn deserializes_from_year_count() {
        let horizon: PredictionHorizon = serde_json::from_str("20").unwrap();
        assert_eq!(horizon, PredictionHorizon::TwentyYears);
    }
}
