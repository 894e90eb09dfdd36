//! Application layer - orchestration over the domain and the ports.
//!
//! `ProgressionService` wires the progression aggregate to durable
//! storage; `SessionRunner` drives one voiced session over the speech,
//! capture, and emotion ports with cleanup on every exit path.

mod progression_service;
mod session_runner;

pub use progression_service::{ProgressionService, ProgressionServiceError, Registration};
pub use session_runner::{RunnerOptions, SessionOutcome, SessionRunner, SessionRunnerError};
