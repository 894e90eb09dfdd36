//! Template Prediction - PredictionStrategy returning the fixed report.
//!
//! The report is identical for every profile and ignores session content
//! entirely. The strategy port exists precisely so this can be replaced by
//! something that reads the accumulated sessions.

use crate::domain::foundation::Confidence;
use crate::domain::prediction::Prediction;
use crate::domain::profile::UserProfile;
use crate::ports::PredictionStrategy;

/// Prediction generator with one canned answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplatePrediction;

impl TemplatePrediction {
    pub fn new() -> Self {
        Self
    }
}

impl PredictionStrategy for TemplatePrediction {
    fn predict(&self, _profile: &UserProfile) -> Prediction {
        Prediction::new(
            "Senior Leadership Professional",
            vec![
                "Enhanced emotional intelligence and empathy".to_string(),
                "Stronger decision-making capabilities under pressure".to_string(),
                "Improved ability to inspire and motivate others".to_string(),
                "Greater self-awareness and authenticity".to_string(),
                "Advanced communication and conflict resolution skills".to_string(),
            ],
            "You will have developed exceptional emotional intelligence, allowing you to navigate complex interpersonal dynamics with ease and lead with both confidence and compassion.",
            vec![
                "Develop advanced leadership skills through challenging projects".to_string(),
                "Build a strong professional network and mentoring relationships".to_string(),
                "Expand expertise through continuous learning and education".to_string(),
                "Take on increasing levels of responsibility and impact".to_string(),
                "Establish yourself as a thought leader in your field".to_string(),
                "Create lasting positive change in your organization and community".to_string(),
            ],
            Confidence::new(92),
        )
    }
}
