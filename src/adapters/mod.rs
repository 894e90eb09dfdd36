//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to devices, endpoints, and storage:
//! - `storage` - file and in-memory state stores
//! - `speech` - HTTP synthesizer and audio sinks
//! - `recognizer` - speech capture stand-ins
//! - `vision` - frame capture and scoring
//! - `emotion` - simulated and camera-backed emotion feeds
//! - `narrative` - AI closing-remark selection
//! - `prediction` - future-self report generation

pub mod emotion;
pub mod narrative;
pub mod prediction;
pub mod recognizer;
pub mod speech;
pub mod storage;
pub mod vision;
