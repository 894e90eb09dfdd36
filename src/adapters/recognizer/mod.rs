//! Speech capture adapters.

mod scripted;

pub use scripted::ScriptedRecognizer;
