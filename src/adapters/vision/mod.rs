//! Frame capture and analysis adapters.

mod remote;
mod simulated;
mod static_camera;

pub use remote::{RemoteAnalyzerConfig, RemoteFrameAnalyzer};
pub use simulated::{simulated_scores, SimulatedFrameAnalyzer};
pub use static_camera::StaticFrameSource;
