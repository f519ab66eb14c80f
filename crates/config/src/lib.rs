//! Configuration for the seller command engine
//!
//! Supports loading configuration from:
//! - YAML/TOML files
//! - Environment variables (DUKAAN__ prefix)
//! - Built-in defaults
//!
//! The engine treats everything in this crate as immutable, process-wide
//! state: settings, intent pattern tables and the lexicon are loaded once
//! at startup and injected into the engine, never mutated afterwards.

// Centralized constants module
pub mod constants;
pub mod lexicon;
pub mod patterns;
pub mod settings;

pub use lexicon::Lexicon;
pub use patterns::{IntentPatternSet, IntentPatternsConfig, INTENT_PRIORITY};
pub use settings::{load_settings, EngineSettings, RuntimeEnvironment, Settings};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}
