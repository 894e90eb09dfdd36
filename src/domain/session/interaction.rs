//! One level's worth of question/answer exchange.

use crate::domain::emotion::EmotionSample;
use crate::domain::foundation::ValidationError;
use crate::ports::NarrativeStrategy;

use super::feedback;
use super::script::{script_for, PROMPTS_PER_LEVEL};
use super::{Level, SessionRecord};

/// Which prompt register and transcript format the session uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionMode {
    /// Typed exchange; transcript is the answers joined with `" | "`.
    Conversation,
    /// Spoken exchange; transcript interleaves `AI:`/`USER:` lines.
    Voice,
}

/// Result of accepting one answer.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionProgress {
    /// More prompts remain; the contained prompt is the next one to pose.
    NextPrompt(&'static str),
    /// The session is finished.
    Completed(SessionRecord),
}

/// Drives one level: a cursor over its three prompts, the growing list of
/// answers, and the latest observed emotion sample.
#[derive(Debug, Clone)]
pub struct InteractionSession {
    level: Level,
    mode: InteractionMode,
    cursor: usize,
    answers: Vec<String>,
    latest_sample: EmotionSample,
}

impl InteractionSession {
    /// Starts a typed conversation session for a level.
    pub fn conversation(level: Level) -> Self {
        Self::with_mode(level, InteractionMode::Conversation)
    }

    /// Starts a voiced session for a level.
    pub fn voice(level: Level) -> Self {
        Self::with_mode(level, InteractionMode::Voice)
    }

    fn with_mode(level: Level, mode: InteractionMode) -> Self {
        Self {
            level,
            mode,
            cursor: 0,
            answers: Vec::new(),
            latest_sample: EmotionSample::baseline(),
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// The prompt currently awaiting an answer.
    pub fn current_prompt(&self) -> &'static str {
        self.prompts()[self.cursor]
    }

    /// Zero-based index of the current prompt.
    pub fn prompt_index(&self) -> usize {
        self.cursor
    }

    /// Total number of prompts in this session.
    pub fn prompt_count(&self) -> usize {
        PROMPTS_PER_LEVEL
    }

    /// Answers accepted so far.
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Records the most recent emotion sample.
    ///
    /// The sample retained at completion is whatever was observed last.
    pub fn observe(&mut self, sample: EmotionSample) {
        self.latest_sample = sample;
    }

    /// The most recently observed emotion sample.
    pub fn latest_sample(&self) -> &EmotionSample {
        &self.latest_sample
    }

    /// Accepts one answer and advances the cursor.
    ///
    /// A blank answer is rejected with no state change. Answering the last
    /// prompt finalizes the session into a [`SessionRecord`] built from the
    /// transcript, the last emotion sample, a narrative chosen by the given
    /// strategy, and the threshold-derived feedback summary.
    ///
    /// # Errors
    ///
    /// `EmptyField` when the answer is blank.
    pub fn advance(
        &mut self,
        answer: &str,
        narrative: &dyn NarrativeStrategy,
    ) -> Result<SessionProgress, ValidationError> {
        let answer = answer.trim();
        if answer.is_empty() {
            return Err(ValidationError::empty_field("answer"));
        }

        self.answers.push(answer.to_string());

        if self.cursor + 1 < self.prompts().len() {
            self.cursor += 1;
            return Ok(SessionProgress::NextPrompt(self.current_prompt()));
        }

        let record = SessionRecord::new(
            self.level,
            self.transcript(),
            self.latest_sample,
            narrative.narrative(self.level, &self.answers),
            self.feedback_summary(),
        );
        Ok(SessionProgress::Completed(record))
    }

    fn prompts(&self) -> &'static [&'static str; PROMPTS_PER_LEVEL] {
        let script = script_for(self.level);
        match self.mode {
            InteractionMode::Conversation => &script.prompts,
            InteractionMode::Voice => &script.spoken_prompts,
        }
    }

    fn transcript(&self) -> String {
        match self.mode {
            InteractionMode::Conversation => self.answers.join(" | "),
            InteractionMode::Voice => {
                let prompts = self.prompts();
                self.answers
                    .iter()
                    .enumerate()
                    .map(|(i, answer)| format!("AI: {}\nUSER: {}", prompts[i], answer))
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
    }

    fn feedback_summary(&self) -> String {
        match self.mode {
            InteractionMode::Conversation => feedback::conversation_summary(&self.latest_sample),
            InteractionMode::Voice => feedback::voice_summary(&self.latest_sample),
        }
    }
}
