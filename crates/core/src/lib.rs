//! Core types and traits for the seller command engine
//!
//! This crate provides the foundational types shared by the other crates:
//! - Language definitions and per-message language decisions
//! - The closed `Intent` enum and typed per-intent entity sets
//! - Time buckets / custom date ranges for report-style commands
//! - The `ParsedCommand` envelope returned to callers
//! - Trait seams for pluggable components (statistical intent model)

pub mod command;
pub mod language;
pub mod time;
pub mod traits;

pub use command::{EntitySet, Intent, ParseStatus, ParsedCommand};
pub use language::{Language, LanguageDecision, LanguageSegment};
pub use time::{TimeBucket, TimeWindow};

// Trait re-exports
pub use traits::{IntentModel, IntentPrediction};
