//! SessionRunner - drives one voiced session over the device ports.
//!
//! For each of the level's three spoken prompts: synthesize and play the
//! prompt, listen for a final transcript, fold the answer into the
//! interaction session together with the latest emotion sample. Synthesis
//! failures skip playback and keep the session alive; capture failures end
//! the run. The emotion feed and the audio sink are stopped on every exit
//! path, including errors and cancellation.

use std::sync::Arc;
use std::time::Duration;

use futures::future;
use thiserror::Error;
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use crate::domain::session::{InteractionSession, Level, SessionProgress, SessionRecord};
use crate::ports::{
    AnalysisError, AudioSink, CaptureError, EmotionFeed, EmotionSource, NarrativeStrategy,
    SpeechError, SpeechRecognizer, SpeechSynthesizer, VoiceSettings,
};

/// Pacing and rendering knobs for one run.
#[derive(Debug, Clone)]
pub struct RunnerOptions {
    /// How long to wait for a final transcript before giving up.
    pub listen_timeout: Duration,
    /// Pause between an accepted answer and the next spoken prompt.
    pub prompt_pause: Duration,
    /// Voice rendering parameters for synthesis.
    pub voice_settings: VoiceSettings,
}

impl Default for RunnerOptions {
    fn default() -> Self {
        Self {
            listen_timeout: Duration::from_secs(30),
            prompt_pause: Duration::from_secs(2),
            voice_settings: VoiceSettings::default(),
        }
    }
}

/// What a finished run produced.
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    /// The completed session record.
    pub record: SessionRecord,
    /// Indices of prompts whose audio playback was skipped after a
    /// synthesis or playback failure.
    pub skipped_playback: Vec<usize>,
}

/// Errors that end a run early.
#[derive(Debug, Error)]
pub enum SessionRunnerError {
    #[error("emotion feed failed to start: {0}")]
    Emotion(#[from] AnalysisError),

    #[error("speech capture failed: {0}")]
    Capture(#[from] CaptureError),

    #[error("capture ended before a final transcript arrived")]
    TranscriptEnded,

    #[error("no final transcript within {0:?}")]
    ListenTimeout(Duration),

    #[error("session was cancelled")]
    Cancelled,
}

/// Orchestrates one voiced session over the ports.
pub struct SessionRunner {
    synthesizer: Option<Arc<dyn SpeechSynthesizer>>,
    sink: Arc<dyn AudioSink>,
    recognizer: Arc<dyn SpeechRecognizer>,
    emotions: Arc<dyn EmotionSource>,
    narrative: Arc<dyn NarrativeStrategy>,
    options: RunnerOptions,
}

impl SessionRunner {
    /// Creates a runner without voice output; prompts are only shown, not
    /// spoken, until a synthesizer is attached.
    pub fn new(
        sink: Arc<dyn AudioSink>,
        recognizer: Arc<dyn SpeechRecognizer>,
        emotions: Arc<dyn EmotionSource>,
        narrative: Arc<dyn NarrativeStrategy>,
    ) -> Self {
        Self {
            synthesizer: None,
            sink,
            recognizer,
            emotions,
            narrative,
            options: RunnerOptions::default(),
        }
    }

    /// Attaches a speech synthesizer for spoken prompts.
    pub fn with_synthesizer(mut self, synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        self.synthesizer = Some(synthesizer);
        self
    }

    /// Overrides the default pacing options.
    pub fn with_options(mut self, options: RunnerOptions) -> Self {
        self.options = options;
        self
    }

    /// Runs one level to completion.
    pub async fn run(&self, level: Level) -> Result<SessionOutcome, SessionRunnerError> {
        let (_cancel_tx, cancel_rx) = oneshot::channel();
        self.run_cancellable(level, cancel_rx).await
    }

    /// Runs one level, stopping early when `cancel` fires.
    ///
    /// Dropping the sender does not cancel the run; only an explicit send
    /// does. Cancellation stops the emotion feed, the audio sink, and the
    /// in-flight capture before returning.
    pub async fn run_cancellable(
        &self,
        level: Level,
        cancel: oneshot::Receiver<()>,
    ) -> Result<SessionOutcome, SessionRunnerError> {
        // Acquisition failures surface before anything needs cleanup.
        let feed = self.emotions.start().await?;

        let result = tokio::select! {
            result = self.drive(level, &feed) => result,
            _ = cancelled(cancel) => Err(SessionRunnerError::Cancelled),
        };

        // Teardown runs whether the session completed, failed, or was
        // cancelled. Dropping the select arm already ended any in-flight
        // capture stream; stop the rest explicitly.
        self.sink.stop();
        feed.shutdown().await;
        result
    }

    async fn drive(
        &self,
        level: Level,
        feed: &EmotionFeed,
    ) -> Result<SessionOutcome, SessionRunnerError> {
        let mut session = InteractionSession::voice(level);
        let mut skipped = Vec::new();
        info!(%level, "voice session started");

        loop {
            let index = session.prompt_index();
            if let Err(err) = self.speak(session.current_prompt()).await {
                warn!(%err, prompt = index, "skipping prompt playback");
                skipped.push(index);
            }

            let progress = loop {
                let answer = self.listen().await?;
                session.observe(feed.latest());
                match session.advance(&answer, self.narrative.as_ref()) {
                    Ok(progress) => break progress,
                    Err(err) => debug!(%err, "blank transcript; listening again"),
                }
            };

            match progress {
                SessionProgress::NextPrompt(_) => {
                    if !self.options.prompt_pause.is_zero() {
                        tokio::time::sleep(self.options.prompt_pause).await;
                    }
                }
                SessionProgress::Completed(record) => {
                    info!(%level, skipped = skipped.len(), "voice session completed");
                    return Ok(SessionOutcome {
                        record,
                        skipped_playback: skipped,
                    });
                }
            }
        }
    }

    /// Speaks one prompt. Without a synthesizer this is a no-op; with one,
    /// synthesis or playback failure is returned for the caller to log and
    /// skip, never to abort the session.
    async fn speak(&self, text: &str) -> Result<(), SpeechError> {
        let Some(synthesizer) = &self.synthesizer else {
            return Ok(());
        };
        let clip = synthesizer
            .synthesize(text, &self.options.voice_settings)
            .await?;
        let playback = self.sink.play(clip).await?;
        playback.finished().await;
        Ok(())
    }

    /// Captures until a final transcript arrives, under the listen timeout.
    async fn listen(&self) -> Result<String, SessionRunnerError> {
        let mut stream = self.recognizer.start_listening().await?;

        let capture = async {
            while let Some(event) = stream.next_event().await {
                if event.is_final {
                    debug!(confidence = event.confidence, "final transcript received");
                    return Some(event.text);
                }
            }
            None
        };

        match tokio::time::timeout(self.options.listen_timeout, capture).await {
            Ok(Some(text)) => Ok(text),
            Ok(None) => Err(SessionRunnerError::TranscriptEnded),
            // The timed-out future drops the stream, which stops capture.
            Err(_) => Err(SessionRunnerError::ListenTimeout(self.options.listen_timeout)),
        }
    }
}

/// Resolves when cancellation is requested; never resolves when the sender
/// is simply dropped.
async fn cancelled(cancel: oneshot::Receiver<()>) {
    if cancel.await.is_err() {
        future::pending::<()>().await;
    }
}
