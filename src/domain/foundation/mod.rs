//! Foundation value objects and traits shared by every domain module.

mod confidence;
mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use confidence::Confidence;
pub use errors::ValidationError;
pub use ids::UserId;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
