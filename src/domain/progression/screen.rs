//! Screens of the guided experience and their flow.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// The screen currently driving the experience.
///
/// Flow: `Welcome → Registration → LevelSelect → Interaction → Feedback`,
/// then back to `LevelSelect` until all five levels are complete, at which
/// point `Feedback → Prediction → Welcome` closes the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    Welcome,
    Registration,
    LevelSelect,
    Interaction,
    Feedback,
    Prediction,
}

impl Screen {
    /// Short label suitable for display.
    pub fn label(&self) -> &'static str {
        match self {
            Screen::Welcome => "Welcome",
            Screen::Registration => "Registration",
            Screen::LevelSelect => "Level Select",
            Screen::Interaction => "Interaction",
            Screen::Feedback => "Feedback",
            Screen::Prediction => "Prediction",
        }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::Welcome
    }
}

impl StateMachine for Screen {
    fn can_transition_to(&self, target: &Self) -> bool {
        use Screen::*;
        matches!(
            (self, target),
            (Welcome, Registration)
                | (Registration, LevelSelect)
                | (LevelSelect, Interaction)
                | (Interaction, Feedback)
                | (Feedback, LevelSelect)
                | (Feedback, Prediction)
                | (Prediction, Welcome)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use Screen::*;
        match self {
            Welcome => vec![Registration],
            Registration => vec![LevelSelect],
            LevelSelect => vec![Interaction],
            Interaction => vec![Feedback],
            Feedback => vec![LevelSelect, Prediction],
            Prediction => vec![Welcome],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_screen_is_welcome() {
        assert_eq!(Screen::default(), Screen::Welcome);
    }

    #[test]
    fn feedback_branches_to_level_select_or_prediction() {
        assert!(Screen::Feedback.can_transition_to(&Screen::LevelSelect));
        assert!(Screen::Feedback.can_transition_to(&Screen::Prediction));
        assert!(!Screen::Feedback.can_transition_to(&Screen::Welcome));
    }

    #[test]
    fn no_screen_is_terminal() {
        for screen in [
            Screen::Welcome,
            Screen::Registration,
            Screen::LevelSelect,
            Screen::Interaction,
            Screen::Feedback,
            Screen::Prediction,
        ] {
            assert!(!screen.is_terminal());
        }
    }

    #[test]
    fn interaction_cannot_be_skipped_into_from_welcome() {
        assert!(Screen::Welcome.transition_to(Screen::Interaction).is_err());
    }

    #[test]
    fn serializes_to_kebab_case() {
        let json = serde_json::to_string(&Screen::LevelSelect).unwrap();
        assert_eq!(json, "\"level-select\"");
    }
}
