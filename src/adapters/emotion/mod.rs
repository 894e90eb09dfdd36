//! Emotion source adapters.

mod camera;
mod simulated;

pub use camera::CameraEmotionSource;
pub use simulated::SimulatedEmotionSource;
