//! Speech Recognizer Port - Interface for speech-to-text capture.
//!
//! Capture delivers interim and final transcript events over a channel;
//! the end of the stream is the terminal signal. A failed start surfaces
//! as an error and leaves the recognizer stopped.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// One recognition result, interim or final.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptEvent {
    pub text: String,
    pub confidence: f32,
    pub is_final: bool,
}

impl TranscriptEvent {
    pub fn interim(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            confidence: 0.0,
            is_final: false,
        }
    }

    pub fn final_result(text: impl Into<String>, confidence: f32) -> Self {
        Self {
            text: text.into(),
            confidence,
            is_final: true,
        }
    }
}

/// Errors raised when starting capture.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("speech capture is not available: {0}")]
    Unavailable(String),

    #[error("microphone permission denied")]
    PermissionDenied,
}

/// Handle to one active capture.
///
/// Dropping the stream, or calling [`TranscriptStream::stop`], tells the
/// recognizer to stop delivering events.
pub struct TranscriptStream {
    events: mpsc::Receiver<TranscriptEvent>,
}

impl TranscriptStream {
    /// Wraps the receiving end of a capture channel.
    pub fn new(events: mpsc::Receiver<TranscriptEvent>) -> Self {
        Self { events }
    }

    /// The next event, or `None` once capture has ended.
    pub async fn next_event(&mut self) -> Option<TranscriptEvent> {
        self.events.recv().await
    }

    /// Stops the capture. Idempotent; already-buffered events can still be
    /// drained afterwards.
    pub fn stop(&mut self) {
        self.events.close();
    }
}

/// Port for the speech-to-text facility.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    /// Begins listening, returning the transcript event stream.
    ///
    /// # Errors
    ///
    /// `CaptureError` when the microphone or recognizer cannot be acquired;
    /// the recognizer stays stopped in that case.
    async fn start_listening(&self) -> Result<TranscriptStream, CaptureError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stream_yields_events_then_ends() {
        let (tx, rx) = mpsc::channel(4);
        let mut stream = TranscriptStream::new(rx);

        tx.send(TranscriptEvent::interim("hel")).await.unwrap();
        tx.send(TranscriptEvent::final_result("hello", 0.92)).await.unwrap();
        drop(tx);

        let first = stream.next_event().await.unwrap();
        assert!(!first.is_final);
        let second = stream.next_event().await.unwrap();
        assert!(second.is_final);
        assert_eq!(second.text, "hello");
        assert!(stream.next_event().await.is_none());
    }

    #[tokio::test]
    async fn stop_is_idempotent_and_signals_the_sender() {
        let (tx, rx) = mpsc::channel::<TranscriptEvent>(1);
        let mut stream = TranscriptStream::new(rx);

        stream.stop();
        stream.stop();

        tx.closed().await;
    }
}
