//! Speech synthesis and playback adapters.

mod eleven_labs;
mod null_sink;

pub use eleven_labs::{ElevenLabsConfig, ElevenLabsSynthesizer};
pub use null_sink::NullAudioSink;
