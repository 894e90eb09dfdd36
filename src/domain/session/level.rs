//! Level value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// One of the five ordered conversation stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Level(u8);

impl Level {
    /// The first level, unlocked from the start.
    pub const FIRST: Level = Level(1);

    /// The final level.
    pub const LAST: Level = Level(5);

    /// Creates a level, validating it lies in 1..=5.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(1..=5).contains(&value) {
            return Err(ValidationError::out_of_range("level", 1, 5, value as i32));
        }
        Ok(Self(value))
    }

    /// Returns the level number.
    pub fn get(&self) -> u8 {
        self.0
    }

    /// The next level, or None past the last.
    pub fn next(&self) -> Option<Level> {
        if *self < Self::LAST {
            Some(Level(self.0 + 1))
        } else {
            None
        }
    }

    /// Iterates all five levels in order.
    pub fn all() -> impl Iterator<Item = Level> {
        (1..=5).map(Level)
    }
}

impl TryFrom<u8> for Level {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> u8 {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
