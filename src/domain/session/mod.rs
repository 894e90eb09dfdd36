//! One level's question/answer exchange and its completed record.

pub mod feedback;
mod interaction;
mod level;
mod record;
mod script;

pub use interaction::{InteractionMode, InteractionSession, SessionProgress};
pub use level::Level;
pub use record::SessionRecord;
pub use script::{script_for, LevelScript, PROMPTS_PER_LEVEL};
