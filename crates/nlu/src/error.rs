//! Error types for the engine crate
//!
//! Errors only occur while building an engine (bad override patterns,
//! unreadable config files). `parse()` itself never fails: every runtime
//! failure mode is represented as data in the `ParsedCommand`.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NluError>;

#[derive(Error, Debug)]
pub enum NluError {
    #[error("Invalid pattern for {intent}: {source}")]
    Pattern {
        intent: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid negation marker: {0}")]
    NegationMarker(#[from] regex::Error),

    #[error(transparent)]
    Config(#[from] dukaan_config::ConfigError),
}
