//! UserProfile aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId, ValidationError};

use super::PredictionHorizon;

/// Identity and stated parameters captured at registration.
///
/// # Invariants
///
/// - `name` and `profession` are non-blank
/// - `age` is a positive integer
/// - Immutable once created; created exactly once per registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    id: UserId,
    name: String,
    age: u32,
    profession: String,
    #[serde(rename = "yearsToPredict")]
    horizon: PredictionHorizon,
    created_at: Timestamp,
}

impl UserProfile {
    /// Creates a profile from registration form input.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if name or profession is blank
    /// - `InvalidFormat` if age is zero
    pub fn new(
        name: impl Into<String>,
        age: u32,
        profession: impl Into<String>,
        horizon: PredictionHorizon,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        let profession = profession.into();
        if profession.trim().is_empty() {
            return Err(ValidationError::empty_field("profession"));
        }
        if age == 0 {
            return Err(ValidationError::invalid_format(
                "age",
                "must be a positive integer",
            ));
        }

        Ok(Self {
            id: UserId::new(),
            name,
            age,
            profession,
            horizon,
            created_at: Timestamp::now(),
        })
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn profession(&self) -> &str {
        &self.profession
    }

    pub fn horizon(&self) -> PredictionHorizon {
        self.horizon
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ava() -> UserProfile {
        UserProfile::new("Ava", 29, "Engineer", PredictionHorizon::TenYears).unwrap()
    }

    #[test]
    fn new_accepts_complete_registration() {
        let profile = ava();
        assert_eq!(profile.name(), "Ava");
        assert_eq!(profile.age(), 29);
        assert_eq!(profile.profession(), "Engineer");
        assert_eq!(profile.horizon().as_years(), 10);
    }

    #[test]
    fn new_rejects_blank_name() {
        let result = UserProfile::new("   ", 29, "Engineer", PredictionHorizon::TenYears);
        assert!(matches!(result, Err(ValidationError::EmptyField { field }) if field == "name"));
    }

    #[test]
    fn new_rejects_blank_profession() {
        let result = UserProfile::new("Ava", 29, "", PredictionHorizon::TenYears);
        assert!(
            matches!(result, Err(ValidationError::EmptyField { field }) if field == "profession")
        );
    }

    #[test]
    fn new_rejects_zero_age() {
        let result = UserProfile::new("Ava", 0, "Engineer", PredictionHorizon::TenYears);
        assert!(matches!(result, Err(ValidationError::InvalidFormat { field, .. }) if field == "age"));
    }

    #[test]
    fn profiles_get_unique_ids() {
        assert_ne!(ava().id(), ava().id());
    }

    #[test]
    fn serializes_with_original_wire_keys() {
        let json = serde_json::to_value(ava()).unwrap();
        assert!(json.get("yearsToPredict").is_some());
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["yearsToPredict"], 10);
    }
}
