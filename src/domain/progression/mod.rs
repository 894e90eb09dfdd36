//! Cross-level progression: unlocks, completion, history, screen flow.

mod screen;
mod snapshot;
mod state;

pub use screen::Screen;
pub use snapshot::ProgressSnapshot;
pub use state::{ProgressionError, ProgressionState};
