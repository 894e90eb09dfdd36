//! Future-self prediction report.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Confidence;

/// The derived, never-persisted future-self report.
///
/// Computed on demand once all five levels are complete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    career_stage: String,
    personality_development: Vec<String>,
    emotional_intelligence: String,
    growth_roadmap: Vec<String>,
    confidence_score: Confidence,
}

impl Prediction {
    pub fn new(
        career_stage: impl Into<String>,
        personality_development: Vec<String>,
        emotional_intelligence: impl Into<String>,
        growth_roadmap: Vec<String>,
        confidence_score: Confidence,
    ) -> Self {
        Self {
            career_stage: career_stage.into(),
            personality_development,
            emotional_intelligence: emotional_intelligence.into(),
            growth_roadmap,
            confidence_score,
        }
    }

    pub fn career_stage(&self) -> &str {
        &self.career_stage
    }

    pub fn personality_development(&self) -> &[String] {
        &self.personality_development
    }

    pub fn emotional_intelligence(&self) -> &str {
        &self.emotional_intelligence
    }

    pub fn growth_roadmap(&self) -> &[String] {
        &self.growth_roadmap
    }

    pub fn confidence_score(&self) -> Confidence {
        self.confidence_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prediction_exposes_its_parts() {
        let prediction = Prediction::new(
            "Stage",
            vec!["growth".to_string()],
            "narrative",
            vec!["step".to_string()],
            Confidence::new(92),
        );

        assert_eq!(prediction.career_stage(), "Stage");
        assert_eq!(prediction.personality_development().len(), 1);
        assert_eq!(prediction.growth_roadmap().len(), 1);
        assert_eq!(prediction.confidence_score().value(), 92);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let prediction = Prediction::new("Stage", vec![], "n", vec![], Confidence::new(92));
        let json = serde_json::to_value(&prediction).unwrap();
        assert!(json.get("careerStage").is_some());
        assert!(json.get("confidenceScore").is_some());
        assert!(json.get("growthRoadmap").is_some());
    }
}
