//! Multilingual command interpretation for the seller bot
//!
//! Converts free-form English / Hindi / code-switched chat messages into
//! structured, machine-actionable commands:
//!
//! - **Language identification**: script-ratio detection with a
//!   statistical fallback, mixed-language aware
//! - **Normalization**: transliteration, emoji and structured-input
//!   canonicalization, idempotent
//! - **Negation guard**: refusal statements short-circuit to `unknown`
//! - **Intent classification**: ordered rule cascade with an optional
//!   pluggable statistical model and cross-language fallback
//! - **Entity extraction**: typed, per-intent entity sets including
//!   bilingual date-range parsing
//!
//! # Example
//!
//! ```
//! use dukaan_nlu::{parse, Intent, ParseStatus};
//!
//! let command = parse("Add new product Rice 50rs 20qty");
//! assert_eq!(command.intent, Intent::AddProduct);
//! assert_eq!(command.status, ParseStatus::Success);
//! ```

pub mod engine;
pub mod entities;
pub mod hindi;
pub mod intent;
pub mod language;
pub mod model;
pub mod negation;
pub mod normalize;

mod error;

pub use engine::{CommandEngine, EngineConfig};
pub use error::{NluError, Result};
pub use intent::{Classification, ClassificationSource, IntentClassifier};
pub use language::LanguageIdentifier;
pub use model::NoopModel;
pub use negation::NegationDetector;
pub use normalize::Normalizer;

// Re-export the result types callers pattern-match on
pub use dukaan_core::{
    EntitySet, Intent, IntentModel, IntentPrediction, Language, LanguageDecision, ParseStatus,
    ParsedCommand, TimeBucket, TimeWindow,
};

use once_cell::sync::Lazy;

static DEFAULT_ENGINE: Lazy<CommandEngine> = Lazy::new(|| {
    CommandEngine::with_defaults().expect("built-in configuration compiles")
});

/// Interpret one message with the built-in configuration
///
/// Construct a [`CommandEngine`] directly to customize settings, pattern
/// tables, the lexicon or the statistical model.
pub fn parse(text: &str) -> ParsedCommand {
    DEFAULT_ENGINE.parse(text)
}

/// Identify the language mixture of a message with the built-in
/// configuration
pub fn detect_language(text: &str) -> LanguageDecision {
    DEFAULT_ENGINE.detect_language(text)
}
