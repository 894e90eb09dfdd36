//! Progression aggregate - the cross-level state machine.
//!
//! Owns which level is unlocked, which are completed, the running history
//! of session records, and the active screen. Every trigger is a validated
//! method; an invalid trigger returns an error and leaves the aggregate
//! untouched.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::domain::foundation::{StateMachine, ValidationError};
use crate::domain::profile::UserProfile;
use crate::domain::session::{Level, SessionRecord};

use super::{ProgressSnapshot, Screen};

/// Errors raised by progression triggers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProgressionError {
    /// The chosen level is not yet unlocked.
    #[error("level {level} is locked; levels are unlocked through level {unlocked}")]
    LevelLocked { level: Level, unlocked: Level },

    /// A trigger arrived on a screen that cannot handle it, or required
    /// context (selected level, displayed record) is missing.
    #[error("illegal state on screen {screen:?}: {reason}")]
    IllegalState { screen: Screen, reason: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ProgressionError {
    fn illegal(screen: Screen, reason: impl Into<String>) -> Self {
        ProgressionError::IllegalState {
            screen,
            reason: reason.into(),
        }
    }
}

/// The mutable cross-level aggregate.
///
/// # Invariants
///
/// - `unlocked` starts at level 1 and only ever increases, up to 5
/// - `completed` is a subset of levels at or below `unlocked`
/// - `history` is append-only; replays append without changing unlocks
/// - `selected` is `Some` exactly while on the Interaction screen
/// - `displayed` is `Some` exactly while on the Feedback screen
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressionState {
    screen: Screen,
    user: Option<UserProfile>,
    unlocked: Level,
    completed: BTreeSet<Level>,
    history: Vec<SessionRecord>,
    selected: Option<Level>,
    displayed: Option<SessionRecord>,
}

impl ProgressionState {
    /// Fresh state: Welcome screen, level 1 unlocked, nothing completed.
    pub fn new() -> Self {
        Self {
            screen: Screen::Welcome,
            user: None,
            unlocked: Level::FIRST,
            completed: BTreeSet::new(),
            history: Vec::new(),
            selected: None,
            displayed: None,
        }
    }

    /// Restores state from a persisted snapshot, landing on LevelSelect.
    pub fn restore(snapshot: ProgressSnapshot) -> Self {
        Self {
            screen: Screen::LevelSelect,
            user: Some(snapshot.user),
            unlocked: snapshot.current_level,
            completed: snapshot.completed_levels,
            history: snapshot.session_history,
            selected: None,
            displayed: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// Highest currently unlocked level.
    pub fn unlocked_level(&self) -> Level {
        self.unlocked
    }

    pub fn completed_levels(&self) -> &BTreeSet<Level> {
        &self.completed
    }

    pub fn history(&self) -> &[SessionRecord] {
        &self.history
    }

    /// Level chosen for the in-progress interaction, if any.
    pub fn selected_level(&self) -> Option<Level> {
        self.selected
    }

    /// Record currently shown on the feedback screen, if any.
    pub fn displayed_record(&self) -> Option<&SessionRecord> {
        self.displayed.as_ref()
    }

    /// A level is available iff it is at or below the unlocked level.
    pub fn is_available(&self, level: Level) -> bool {
        level <= self.unlocked
    }

    /// True once every level has been completed at least once.
    pub fn all_levels_complete(&self) -> bool {
        self.completed.len() == Level::LAST.get() as usize
    }

    /// The durable view of this state, present once a user is registered.
    pub fn snapshot(&self) -> Option<ProgressSnapshot> {
        self.user.as_ref().map(|user| ProgressSnapshot {
            user: user.clone(),
            current_level: self.unlocked,
            completed_levels: self.completed.clone(),
            session_history: self.history.clone(),
        })
    }

    /// Welcome → Registration.
    pub fn start(&mut self) -> Result<(), ProgressionError> {
        self.expect_screen(Screen::Welcome, "start requested")?;
        self.screen = self.screen.transition_to(Screen::Registration)?;
        Ok(())
    }

    /// Registration → LevelSelect, storing the submitted profile.
    pub fn register(&mut self, profile: UserProfile) -> Result<(), ProgressionError> {
        self.expect_screen(Screen::Registration, "profile submitted")?;
        self.screen = self.screen.transition_to(Screen::LevelSelect)?;
        self.user = Some(profile);
        Ok(())
    }

    /// LevelSelect → Interaction, recording the chosen level.
    ///
    /// # Errors
    ///
    /// `LevelLocked` when the level is above the unlocked level; no state
    /// changes in that case.
    pub fn select_level(&mut self, level: Level) -> Result<(), ProgressionError> {
        self.expect_screen(Screen::LevelSelect, "level chosen")?;
        if !self.is_available(level) {
            return Err(ProgressionError::LevelLocked {
                level,
                unlocked: self.unlocked,
            });
        }
        self.screen = self.screen.transition_to(Screen::Interaction)?;
        self.selected = Some(level);
        Ok(())
    }

    /// Interaction → Feedback, folding the finished session into history.
    ///
    /// Appends the record unconditionally; marks the level completed
    /// (idempotently); advances the unlocked level by one only when the
    /// completed level *is* the unlocked level and the last level has not
    /// been reached.
    pub fn complete_session(&mut self, record: SessionRecord) -> Result<(), ProgressionError> {
        self.expect_screen(Screen::Interaction, "session finished")?;
        let selected = self.selected.ok_or_else(|| {
            ProgressionError::illegal(self.screen, "no level selected for the active session")
        })?;
        if selected != record.level() {
            return Err(ProgressionError::illegal(
                self.screen,
                format!(
                    "session record is for level {} but level {} was selected",
                    record.level(),
                    selected
                ),
            ));
        }

        self.screen = self.screen.transition_to(Screen::Feedback)?;

        let level = record.level();
        self.history.push(record.clone());
        if self.completed.insert(level) && level == self.unlocked {
            if let Some(next) = self.unlocked.next() {
                self.unlocked = next;
            }
        }
        self.displayed = Some(record);
        self.selected = None;
        Ok(())
    }

    /// Feedback → Prediction when all levels are complete, else back to
    /// LevelSelect.
    pub fn continue_from_feedback(&mut self) -> Result<Screen, ProgressionError> {
        self.expect_screen(Screen::Feedback, "continue requested")?;
        if self.displayed.is_none() {
            return Err(ProgressionError::illegal(
                self.screen,
                "no session record to show feedback for",
            ));
        }
        let target = if self.all_levels_complete() {
            Screen::Prediction
        } else {
            Screen::LevelSelect
        };
        self.screen = self.screen.transition_to(target)?;
        self.displayed = None;
        Ok(self.screen)
    }

    /// Prediction → Welcome, dropping every piece of accumulated state.
    pub fn restart(&mut self) -> Result<(), ProgressionError> {
        self.expect_screen(Screen::Prediction, "restart requested")?;
        *self = Self::new();
        Ok(())
    }

    fn expect_screen(&self, expected: Screen, trigger: &str) -> Result<(), ProgressionError> {
        if self.screen != expected {
            return Err(ProgressionError::illegal(
                self.screen,
                format!("'{}' is only valid on the {} screen", trigger, expected.label()),
            ));
        }
        Ok(())
    }
}

impl Default for ProgressionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::emotion::EmotionSample;
    use crate::domain::profile::PredictionHorizon;

    fn ava() -> UserProfile {
        UserProfile::new("Ava", 29, "Engineer", PredictionHorizon::TenYears).unwrap()
    }

    fn record_for(level: Level) -> SessionRecord {
        SessionRecord::new(
            level,
            "a | b | c".to_string(),
            EmotionSample::baseline(),
            "Insight.".to_string(),
            "Feedback.".to_string(),
        )
    }

    fn level(n: u8) -> Level {
        Level::try_new(n).unwrap()
    }

    /// Drives a fresh state to LevelSelect with Ava registered.
    fn registered() -> ProgressionState {
        let mut state = ProgressionState::new();
        state.start().unwrap();
        state.register(ava()).unwrap();
        state
    }

    fn complete(state: &mut ProgressionState, n: u8) {
        state.select_level(level(n)).unwrap();
        state.complete_session(record_for(level(n))).unwrap();
        state.continue_from_feedback().unwrap();
    }

    mod screen_flow {
        use super::*;

        #[test]
        fn fresh_state_starts_on_welcome_with_level_one() {
            let state = ProgressionState::new();
            assert_eq!(state.screen(), Screen::Welcome);
            assert_eq!(state.unlocked_level(), Level::FIRST);
            assert!(state.completed_levels().is_empty());
            assert!(state.history().is_empty());
        }

        #[test]
        fn registration_example_scenario() {
            let state = registered();
            assert_eq!(state.screen(), Screen::LevelSelect);
            assert_eq!(state.unlocked_level(), Level::FIRST);
            assert_eq!(state.user().unwrap().name(), "Ava");
        }

        #[test]
        fn completing_level_one_unlocks_level_two() {
            let mut state = registered();
            state.select_level(level(1)).unwrap();
            assert_eq!(state.screen(), Screen::Interaction);
            assert_eq!(state.selected_level(), Some(level(1)));

            state.complete_session(record_for(level(1))).unwrap();
            assert_eq!(state.screen(), Screen::Feedback);
            assert_eq!(state.history().len(), 1);
            assert_eq!(state.unlocked_level(), level(2));
            assert!(state.completed_levels().contains(&level(1)));

            let next = state.continue_from_feedback().unwrap();
            assert_eq!(next, Screen::LevelSelect);
        }

        #[test]
        fn triggers_on_the_wrong_screen_are_illegal_and_change_nothing() {
            let mut state = registered();
            let before = state.clone();

            assert!(matches!(state.start(), Err(ProgressionError::IllegalState { .. })));
            assert!(matches!(
                state.complete_session(record_for(level(1))),
                Err(ProgressionError::IllegalState { .. })
            ));
            assert!(matches!(
                state.continue_from_feedback(),
                Err(ProgressionError::IllegalState { .. })
            ));
            assert!(matches!(state.restart(), Err(ProgressionError::IllegalState { .. })));
            assert_eq!(state, before);
        }

        #[test]
        fn record_for_a_different_level_than_selected_is_illegal() {
            let mut state = registered();
            state.select_level(level(1)).unwrap();

            let result = state.complete_session(record_for(level(2)));

            assert!(matches!(result, Err(ProgressionError::IllegalState { .. })));
            assert_eq!(state.screen(), Screen::Interaction);
            assert!(state.history().is_empty());
        }
    }

    mod unlock_rules {
        use super::*;

        #[test]
        fn locked_level_selection_fails_without_state_change() {
            let mut state = registered();

            let result = state.select_level(level(3));

            assert_eq!(
                result,
                Err(ProgressionError::LevelLocked {
                    level: level(3),
                    unlocked: level(1),
                })
            );
            assert_eq!(state.screen(), Screen::LevelSelect);
            assert_eq!(state.selected_level(), None);
        }

        #[test]
        fn availability_tracks_the_unlocked_level() {
            let mut state = registered();
            complete(&mut state, 1);
            complete(&mut state, 2);

            for l in Level::all() {
                assert_eq!(state.is_available(l), l <= level(3));
            }
        }

        #[test]
        fn replaying_a_lower_level_does_not_advance_the_unlock() {
            let mut state = registered();
            complete(&mut state, 1);
            complete(&mut state, 2);
            assert_eq!(state.unlocked_level(), level(3));

            complete(&mut state, 1);

            assert_eq!(state.unlocked_level(), level(3));
            assert_eq!(state.completed_levels().len(), 2);
            assert_eq!(state.history().len(), 3);
        }

        #[test]
        fn unlock_stops_at_level_five() {
            let mut state = registered();
            for n in 1..=5 {
                complete(&mut state, n);
            }
            assert_eq!(state.unlocked_level(), level(5));
            assert!(state.all_levels_complete());
        }
    }

    mod prediction_and_restart {
        use super::*;

        #[test]
        fn prediction_is_reached_only_after_all_five_levels() {
            let mut state = registered();
            for n in 1..=4 {
                complete(&mut state, n);
                assert_eq!(state.screen(), Screen::LevelSelect);
            }

            state.select_level(level(5)).unwrap();
            state.complete_session(record_for(level(5))).unwrap();
            let next = state.continue_from_feedback().unwrap();

            assert_eq!(next, Screen::Prediction);
        }

        #[test]
        fn restart_resets_to_the_initial_configuration() {
            let mut state = registered();
            for n in 1..=5 {
                complete(&mut state, n);
            }
            assert_eq!(state.screen(), Screen::Prediction);

            state.restart().unwrap();

            assert_eq!(state, ProgressionState::new());
        }
    }

    mod snapshots {
        use super::*;

        #[test]
        fn snapshot_is_absent_before_registration() {
            assert!(ProgressionState::new().snapshot().is_none());
        }

        #[test]
        fn snapshot_roundtrips_through_restore() {
            let mut state = registered();
            complete(&mut state, 1);

            let snapshot = state.snapshot().unwrap();
            let restored = ProgressionState::restore(snapshot);

            assert_eq!(restored.screen(), Screen::LevelSelect);
            assert_eq!(restored.unlocked_level(), level(2));
            assert_eq!(restored.history().len(), 1);
            assert_eq!(restored.user().unwrap().name(), "Ava");
        }
    }
}
