//! Null Audio Sink - AudioSink for headless runs.
//!
//! Accepts clips and reports immediate completion without touching any
//! audio device. Keeps the voiced flow exercisable where no output device
//! exists (CI, terminals, tests).

use async_trait::async_trait;
use tracing::debug;

use crate::ports::{AudioClip, AudioSink, Playback, SpeechError};

/// Audio sink that discards clips.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudioSink;

impl NullAudioSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AudioSink for NullAudioSink {
    async fn play(&self, clip: AudioClip) -> Result<Playback, SpeechError> {
        debug!(bytes = clip.len(), mime = clip.mime(), "discarding audio clip");
        Ok(Playback::completed())
    }

    fn stop(&self) {}
}
