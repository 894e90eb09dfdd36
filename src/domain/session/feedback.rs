//! Feedback derivation from terminal emotion samples.
//!
//! The wording and thresholds here are fixed contract: downstream display
//! and the recorded feedback strings depend on them verbatim.

use crate::domain::emotion::EmotionSample;

/// Summary line for a typed conversation session.
///
/// Thresholds: authenticity > 80 reads "high", engagement > 75 reads
/// "strong", stress < 30 reads "excellent".
pub fn conversation_summary(emotions: &EmotionSample) -> String {
    format!(
        "Based on our conversation, you demonstrate {} authenticity and {} engagement. Your emotional stability appears {}.",
        if emotions.authenticity > 80.0 { "high" } else { "moderate" },
        if emotions.engagement > 75.0 { "strong" } else { "good" },
        if emotions.stress < 30.0 { "excellent" } else { "good" },
    )
}

/// Summary line for a voiced session with live video analysis.
pub fn voice_summary(emotions: &EmotionSample) -> String {
    format!(
        "Based on our voice conversation and video analysis, you demonstrate {} authenticity and {} engagement levels. Your emotional stability and confidence show great potential for future growth.",
        if emotions.authenticity > 80.0 { "exceptional" } else { "strong" },
        if emotions.engagement > 75.0 { "high" } else { "good" },
    )
}

/// One per-metric line of the feedback report.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricInsight {
    pub metric: &'static str,
    pub value: f64,
    pub grade: &'static str,
    pub insight: &'static str,
}

/// Letter grade for a 0-100 metric value.
pub fn grade(value: f64) -> &'static str {
    if value >= 90.0 {
        "A+"
    } else if value >= 80.0 {
        "A"
    } else if value >= 70.0 {
        "B+"
    } else if value >= 60.0 {
        "B"
    } else {
        "C+"
    }
}

/// Per-metric insight lines shown on the feedback screen.
pub fn metric_insights(emotions: &EmotionSample) -> Vec<MetricInsight> {
    vec![
        MetricInsight {
            metric: "Authenticity",
            value: emotions.authenticity,
            grade: grade(emotions.authenticity),
            insight: if emotions.authenticity > 80.0 {
                "You expressed yourself genuinely and openly."
            } else {
                "Consider being more open in future conversations."
            },
        },
        MetricInsight {
            metric: "Engagement",
            value: emotions.engagement,
            grade: grade(emotions.engagement),
            insight: if emotions.engagement > 75.0 {
                "You showed strong interest and participation."
            } else {
                "Try to engage more actively with the questions."
            },
        },
        MetricInsight {
            metric: "Confidence",
            value: emotions.confidence,
            grade: grade(emotions.confidence),
            insight: if emotions.confidence > 70.0 {
                "You demonstrated self-assurance in your responses."
            } else {
                "Building confidence will enhance your future growth."
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(authenticity: f64, engagement: f64, stress: f64) -> EmotionSample {
        EmotionSample::new(75.0, 68.0, stress, engagement, authenticity)
    }

    mod conversation_summary_wording {
        use super::*;

        #[test]
        fn strong_session_gets_all_positive_qualifiers() {
            let summary = conversation_summary(&sample(85.0, 80.0, 20.0));
            assert!(summary.contains("high authenticity"));
            assert!(summary.contains("strong engagement"));
            assert!(summary.contains("appears excellent"));
        }

        #[test]
        fn flat_session_gets_the_moderate_qualifiers() {
            let summary = conversation_summary(&sample(70.0, 70.0, 45.0));
            assert!(summary.contains("moderate authenticity"));
            assert!(summary.contains("good engagement"));
            assert!(summary.contains("appears good"));
        }

        #[test]
        fn thresholds_are_strict_inequalities() {
            // Exactly at the threshold falls on the lower side.
            let summary = conversation_summary(&sample(80.0, 75.0, 30.0));
            assert!(summary.contains("moderate authenticity"));
            assert!(summary.contains("good engagement"));
            assert!(summary.contains("appears good"));
        }
    }

    mod voice_summary_wording {
        use super::*;

        #[test]
        fn strong_session_reads_exceptional_and_high() {
            let summary = voice_summary(&sample(85.0, 80.0, 20.0));
            assert!(summary.contains("exceptional authenticity"));
            assert!(summary.contains("high engagement"));
        }

        #[test]
        fn flat_session_reads_strong_and_good() {
            let summary = voice_summary(&sample(70.0, 70.0, 45.0));
            assert!(summary.contains("strong authenticity"));
            assert!(summary.contains("good engagement"));
        }
    }

    mod grades {
        use super::*;

        #[test]
        fn grade_boundaries() {
            assert_eq!(grade(95.0), "A+");
            assert_eq!(grade(90.0), "A+");
            assert_eq!(grade(85.0), "A");
            assert_eq!(grade(72.0), "B+");
            assert_eq!(grade(60.0), "B");
            assert_eq!(grade(42.0), "C+");
        }

        #[test]
        fn insights_cover_the_three_reported_metrics() {
            let insights = metric_insights(&sample(85.0, 80.0, 20.0));
            let metrics: Vec<_> = insights.iter().map(|i| i.metric).collect();
            assert_eq!(metrics, vec!["Authenticity", "Engagement", "Confidence"]);
            assert_eq!(insights[0].insight, "You expressed yourself genuinely and openly.");
        }
    }
}
