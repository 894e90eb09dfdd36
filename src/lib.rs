//! Future You - Guided Five-Level Conversation Experience
//!
//! This crate implements a five-level guided conversation flow with
//! continuously sampled emotion metrics and a future-self prediction once
//! every level is complete.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
