//! Centralized constants for the command engine
//!
//! Single source of truth for default thresholds and confidences used
//! across the crates. Runtime overrides go through `Settings`; these are
//! the values used when nothing else is configured.

/// Entity extraction defaults
pub mod extraction {
    /// Low-stock threshold assumed when the message gives no number
    pub const LOW_STOCK_THRESHOLD: u32 = 5;

    /// Result limit for top-products / top-customers queries
    pub const TOP_LIMIT: u32 = 5;
}

/// Classifier confidence model
pub mod confidence {
    /// Minimum confidence at which a statistical model prediction is
    /// accepted ahead of the rule cascade
    pub const ML_ACCEPT_THRESHOLD: f32 = 0.7;

    /// Confidence assigned to a rule match in the message's own language
    pub const RULE_MATCH: f32 = 0.9;

    /// Confidence assigned to a rule match found only in the other
    /// language's table
    pub const CROSS_LANGUAGE_MATCH: f32 = 0.7;

    /// Confidence reported when the statistical language fallback ran
    /// (no recognizable script characters in the input)
    pub const LANGUAGE_FALLBACK: f32 = 0.5;
}

/// Language identification
pub mod language_id {
    /// A script must account for at least this share of recognized
    /// characters before the message counts as mixed
    pub const MIXED_RATIO_THRESHOLD: f32 = 0.2;
}
