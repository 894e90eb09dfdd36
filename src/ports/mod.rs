//! Ports: interfaces the application core depends on.
//!
//! Adapters implement these against real devices, endpoints, and storage;
//! tests implement them with scripted doubles.

mod emotion_source;
mod frame;
mod narrative;
mod prediction;
mod recognizer;
mod speech;
mod state_store;

pub use emotion_source::{EmotionFeed, EmotionSource};
pub use frame::{
    AnalysisError, BodyScores, FacialScores, FrameAnalyzer, FrameScores, FrameSource, FrameStream,
    JpegFrame,
};
pub use narrative::NarrativeStrategy;
pub use prediction::PredictionStrategy;
pub use recognizer::{CaptureError, SpeechRecognizer, TranscriptEvent, TranscriptStream};
pub use speech::{AudioClip, AudioSink, Playback, SpeechError, SpeechSynthesizer, VoiceSettings};
pub use state_store::{
    StateStore, StateStoreError, COMPLETED_LEVELS_KEY, CURRENT_LEVEL_KEY, SESSION_HISTORY_KEY,
    USER_KEY,
};
