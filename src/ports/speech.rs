//! Speech Ports - Interfaces for speech synthesis and audio playback.
//!
//! Synthesis turns text into a playable clip via an external endpoint;
//! playback owns the audio output resource. Synthesis failures are surfaced
//! to the caller (the flow continues without voice); playback `stop` is
//! idempotent and safe to call when nothing is playing.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::watch;

/// Voice rendering parameters sent with every synthesis request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
    pub style: f32,
    pub use_speaker_boost: bool,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.75,
            similarity_boost: 0.8,
            style: 0.5,
            use_speaker_boost: true,
        }
    }
}

/// A synthesized, playable audio clip.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioClip {
    data: Vec<u8>,
    mime: String,
}

impl AudioClip {
    pub fn new(data: Vec<u8>, mime: impl Into<String>) -> Self {
        Self {
            data,
            mime: mime.into(),
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Errors raised by synthesis or playback.
#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("synthesis endpoint returned status {status}")]
    Endpoint { status: u16 },

    #[error("network error during synthesis: {0}")]
    Network(String),

    #[error("synthesis timed out after {0:?}")]
    Timeout(Duration),

    #[error("audio playback failed: {0}")]
    Playback(String),
}

/// Port for text-to-speech synthesis against an external endpoint.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesizes the given text into a playable clip.
    ///
    /// # Errors
    ///
    /// Endpoint, network, and timeout failures are reported to the caller;
    /// the synthesizer never retries on its own.
    async fn synthesize(&self, text: &str, settings: &VoiceSettings)
        -> Result<AudioClip, SpeechError>;
}

/// Port for the audio output device.
#[async_trait]
pub trait AudioSink: Send + Sync {
    /// Starts playing a clip, returning a handle that resolves on
    /// completion. Starting a new clip stops any current one.
    async fn play(&self, clip: AudioClip) -> Result<Playback, SpeechError>;

    /// Stops whatever is currently playing. Idempotent; safe to call when
    /// playback was never started.
    fn stop(&self);
}

/// Handle to one started playback.
pub struct Playback {
    finished: watch::Receiver<bool>,
}

impl Playback {
    /// Wraps a completion flag; the sink flips it to `true` when the clip
    /// ends or is stopped.
    pub fn new(finished: watch::Receiver<bool>) -> Self {
        Self { finished }
    }

    /// A playback that is already complete.
    pub fn completed() -> Self {
        let (_tx, rx) = watch::channel(true);
        Self { finished: rx }
    }

    /// Resolves once the clip has finished playing (or was stopped).
    pub async fn finished(mut self) {
        loop {
            if *self.finished.borrow() {
                return;
            }
            // A dropped sender counts as finished.
            if self.finished.changed().await.is_err() {
                return;
            }
        }
    }
}
