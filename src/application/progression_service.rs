//! ProgressionService - progression aggregate wired to durable storage.
//!
//! Owns the cross-level state for one run of the experience: restores it
//! from the state store at startup, persists it after every mutating
//! trigger, and clears storage on restart. All transition rules live in
//! the domain aggregate; this service only adds persistence.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::domain::prediction::Prediction;
use crate::domain::profile::{PredictionHorizon, UserProfile};
use crate::domain::progression::{ProgressionError, ProgressionState, Screen};
use crate::domain::session::{InteractionMode, InteractionSession, Level, SessionRecord};
use crate::ports::{PredictionStrategy, StateStore, StateStoreError};

/// Registration form input, validated into a [`UserProfile`].
#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub age: u32,
    pub profession: String,
    pub horizon_years: u32,
}

/// Errors raised by progression triggers or their persistence.
#[derive(Debug, Error)]
pub enum ProgressionServiceError {
    #[error(transparent)]
    Progression(#[from] ProgressionError),

    #[error(transparent)]
    Store(#[from] StateStoreError),
}

/// The progression aggregate plus its state store.
pub struct ProgressionService {
    state: ProgressionState,
    store: Arc<dyn StateStore>,
}

impl ProgressionService {
    /// Starts from persisted progress when a profile snapshot exists,
    /// otherwise from a fresh Welcome state.
    ///
    /// # Errors
    ///
    /// Storage failures during the restore attempt.
    pub async fn restore_or_new(store: Arc<dyn StateStore>) -> Result<Self, ProgressionServiceError> {
        let state = match store.load().await? {
            Some(snapshot) => {
                info!(
                    user = snapshot.user.name(),
                    level = %snapshot.current_level,
                    "restored persisted progress"
                );
                ProgressionState::restore(snapshot)
            }
            None => ProgressionState::new(),
        };
        Ok(Self { state, store })
    }

    /// Read access to the underlying aggregate.
    pub fn state(&self) -> &ProgressionState {
        &self.state
    }

    /// Welcome → Registration.
    pub fn start(&mut self) -> Result<(), ProgressionError> {
        self.state.start()
    }

    /// Registration → LevelSelect: validates the form into a profile,
    /// stores it, and persists the first snapshot.
    ///
    /// # Errors
    ///
    /// Validation failures (blank fields, zero age, unoffered horizon)
    /// leave the aggregate untouched; storage failures happen after the
    /// transition and are surfaced to the caller.
    pub async fn register(&mut self, form: Registration) -> Result<(), ProgressionServiceError> {
        let horizon =
            PredictionHorizon::try_from_years(form.horizon_years).map_err(ProgressionError::from)?;
        let profile = UserProfile::new(form.name, form.age, form.profession, horizon)
            .map_err(ProgressionError::from)?;

        self.state.register(profile)?;
        self.persist().await
    }

    /// LevelSelect → Interaction.
    pub fn select_level(&mut self, level: Level) -> Result<(), ProgressionError> {
        self.state.select_level(level)
    }

    /// Builds the interaction session for the currently selected level.
    ///
    /// # Errors
    ///
    /// `IllegalState` when no interaction is in progress.
    pub fn interaction(&self, mode: InteractionMode) -> Result<InteractionSession, ProgressionError> {
        let level = self.state.selected_level().ok_or_else(|| {
            ProgressionError::IllegalState {
                screen: self.state.screen(),
                reason: "no level selected for an interaction".to_string(),
            }
        })?;
        Ok(match mode {
            InteractionMode::Conversation => InteractionSession::conversation(level),
            InteractionMode::Voice => InteractionSession::voice(level),
        })
    }

    /// Interaction → Feedback: folds the record into history and persists.
    pub async fn complete_session(
        &mut self,
        record: SessionRecord,
    ) -> Result<(), ProgressionServiceError> {
        self.state.complete_session(record)?;
        self.persist().await
    }

    /// Feedback → Prediction or LevelSelect.
    pub fn continue_from_feedback(&mut self) -> Result<Screen, ProgressionError> {
        self.state.continue_from_feedback()
    }

    /// Derives the future-self report on the Prediction screen.
    ///
    /// # Errors
    ///
    /// `IllegalState` before all five levels are complete.
    pub fn prediction(
        &self,
        strategy: &dyn PredictionStrategy,
    ) -> Result<Prediction, ProgressionError> {
        if self.state.screen() != Screen::Prediction {
            return Err(ProgressionError::IllegalState {
                screen: self.state.screen(),
                reason: "the prediction is only available on the Prediction screen".to_string(),
            });
        }
        let user = self.state.user().ok_or_else(|| ProgressionError::IllegalState {
            screen: self.state.screen(),
            reason: "no registered profile to predict for".to_string(),
        })?;
        Ok(strategy.predict(user))
    }

    /// Prediction → Welcome: resets the aggregate and clears storage.
    pub async fn restart(&mut self) -> Result<(), ProgressionServiceError> {
        self.state.restart()?;
        self.store.clear().await?;
        info!("progress cleared; back to the welcome screen");
        Ok(())
    }

    async fn persist(&self) -> Result<(), ProgressionServiceError> {
        // A snapshot exists for every state that reaches this point: the
        // only persisting triggers run at or after registration.
        if let Some(snapshot) = self.state.snapshot() {
            self.store.save(&snapshot).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::prediction::TemplatePrediction;
    use crate::adapters::storage::InMemoryStateStore;
    use crate::domain::emotion::EmotionSample;

    fn ava_form() -> Registration {
        Registration {
            name: "Ava".to_string(),
            age: 29,
            profession: "Engineer".to_string(),
            horizon_years: 10,
        }
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

    async fn registered(store: Arc<dyn StateStore>) -> ProgressionService {
        let mut service = ProgressionService::restore_or_new(store).await.unwrap();
        service.start().unwrap();
        service.register(ava_form()).await.unwrap();
        service
    }

    async fn complete(service: &mut ProgressionService, n: u8) {
        service.select_level(level(n)).unwrap();
        service.complete_session(record_for(level(n))).await.unwrap();
        service.continue_from_feedback().unwrap();
    }

    #[tokio::test]
    async fn fresh_store_starts_on_welcome() {
        let store = Arc::new(InMemoryStateStore::new());
        let service = ProgressionService::restore_or_new(store).await.unwrap();
        assert_eq!(service.state().screen(), Screen::Welcome);
    }

    #[tokio::test]
    async fn registration_persists_the_first_snapshot() {
        let store: Arc<dyn StateStore> = Arc::new(InMemoryStateStore::new());
        let service = registered(Arc::clone(&store)).await;

        assert_eq!(service.state().screen(), Screen::LevelSelect);
        let saved = store.load().await.unwrap().unwrap();
        assert_eq!(saved.user.name(), "Ava");
        assert_eq!(saved.current_level, Level::FIRST);
    }

    #[tokio::test]
    async fn invalid_registration_leaves_state_and_storage_untouched() {
        let store: Arc<dyn StateStore> = Arc::new(InMemoryStateStore::new());
        let mut service = ProgressionService::restore_or_new(Arc::clone(&store))
            .await
            .unwrap();
        service.start().unwrap();

        let result = service
            .register(Registration {
                horizon_years: 7,
                ..ava_form()
            })
            .await;

        assert!(matches!(
            result,
            Err(ProgressionServiceError::Progression(
                ProgressionError::Validation(_)
            ))
        ));
        assert_eq!(service.state().screen(), Screen::Registration);
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn completed_sessions_are_persisted_as_they_happen() {
        let store: Arc<dyn StateStore> = Arc::new(InMemoryStateStore::new());
        let mut service = registered(Arc::clone(&store)).await;

        complete(&mut service, 1).await;

        let saved = store.load().await.unwrap().unwrap();
        assert_eq!(saved.current_level, level(2));
        assert_eq!(saved.session_history.len(), 1);
        assert!(saved.completed_levels.contains(&level(1)));
    }

    #[tokio::test]
    async fn restored_service_resumes_on_level_select() {
        let store: Arc<dyn StateStore> = Arc::new(InMemoryStateStore::new());
        let mut service = registered(Arc::clone(&store)).await;
        complete(&mut service, 1).await;
        drop(service);

        let restored = ProgressionService::restore_or_new(store).await.unwrap();

        assert_eq!(restored.state().screen(), Screen::LevelSelect);
        assert_eq!(restored.state().unlocked_level(), level(2));
    }

    #[tokio::test]
    async fn interaction_requires_a_selected_level() {
        let store = Arc::new(InMemoryStateStore::new());
        let service = registered(store).await;

        let result = service.interaction(InteractionMode::Conversation);

        assert!(matches!(result, Err(ProgressionError::IllegalState { .. })));
    }

    #[tokio::test]
    async fn prediction_is_gated_on_the_prediction_screen() {
        let store = Arc::new(InMemoryStateStore::new());
        let mut service = registered(store).await;
        let strategy = TemplatePrediction::new();

        assert!(matches!(
            service.prediction(&strategy),
            Err(ProgressionError::IllegalState { .. })
        ));

        for n in 1..=5 {
            complete(&mut service, n).await;
        }
        assert_eq!(service.state().screen(), Screen::Prediction);

        let prediction = service.prediction(&strategy).unwrap();
        assert_eq!(prediction.confidence_score().value(), 92);
    }

    #[tokio::test]
    async fn restart_clears_storage_and_resets_state() {
        let store: Arc<dyn StateStore> = Arc::new(InMemoryStateStore::new());
        let mut service = registered(Arc::clone(&store)).await;
        for n in 1..=5 {
            complete(&mut service, n).await;
        }

        service.restart().await.unwrap();

        assert_eq!(service.state().screen(), Screen::Welcome);
        assert_eq!(service.state().unlocked_level(), Level::FIRST);
        assert!(store.load().await.unwrap().is_none());
    }
}
