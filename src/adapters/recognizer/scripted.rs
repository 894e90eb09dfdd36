//! Scripted Recognizer - SpeechRecognizer fed from a fixed utterance queue.
//!
//! Stands in for the OS speech facility: each `start_listening` consumes
//! the next queued utterance and replays it as interim word-by-word events
//! followed by one final result, then ends the stream. An exhausted queue
//! reports capture as unavailable.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::ports::{CaptureError, SpeechRecognizer, TranscriptEvent, TranscriptStream};

const FINAL_CONFIDENCE: f32 = 0.92;

/// Recognizer that replays queued utterances.
#[derive(Debug)]
pub struct ScriptedRecognizer {
    utterances: Mutex<VecDeque<String>>,
    chunk_delay: Duration,
}

impl ScriptedRecognizer {
    /// Creates a recognizer with an empty queue.
    pub fn new() -> Self {
        Self {
            utterances: Mutex::new(VecDeque::new()),
            chunk_delay: Duration::ZERO,
        }
    }

    /// Queues one utterance for a future capture.
    pub fn with_utterance(self, text: impl Into<String>) -> Self {
        self.utterances.lock().unwrap().push_back(text.into());
        self
    }

    /// Queues several utterances at once.
    pub fn with_utterances<I, S>(self, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        {
            let mut queue = self.utterances.lock().unwrap();
            for text in texts {
                queue.push_back(text.into());
            }
        }
        self
    }

    /// Adds a delay between emitted events, for timeout testing.
    pub fn with_chunk_delay(mut self, delay: Duration) -> Self {
        self.chunk_delay = delay;
        self
    }

    /// Utterances not yet consumed.
    pub fn remaining(&self) -> usize {
        self.utterances.lock().unwrap().len()
    }
}

impl Default for ScriptedRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechRecognizer for ScriptedRecognizer {
    async fn start_listening(&self) -> Result<TranscriptStream, CaptureError> {
        let utterance = self
            .utterances
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| CaptureError::Unavailable("no scripted utterances left".to_string()))?;

        let (tx, rx) = mpsc::channel(8);
        let chunk_delay = self.chunk_delay;

        tokio::spawn(async move {
            let mut partial = String::new();
            for word in utterance.split_whitespace() {
                if !chunk_delay.is_zero() {
                    tokio::time::sleep(chunk_delay).await;
                }
                if !partial.is_empty() {
                    partial.push(' ');
                }
                partial.push_str(word);
                // A closed receiver means the caller stopped listening.
                if tx.send(TranscriptEvent::interim(partial.clone())).await.is_err() {
                    return;
                }
            }
            let _ = tx
                .send(TranscriptEvent::final_result(utterance, FINAL_CONFIDENCE))
                .await;
        });

        Ok(TranscriptStream::new(rx))
    }
}
