//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::constants::{confidence, extraction, language_id};
use crate::ConfigError;

/// Runtime environment enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    /// Development mode - relaxed validation, warnings only
    #[default]
    Development,
    /// Staging mode - stricter validation
    Staging,
    /// Production mode - all validations enforced
    Production,
}

impl RuntimeEnvironment {
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// Engine tunables
    #[serde(default)]
    pub engine: EngineSettings,

    /// Optional path to a YAML file overriding the built-in intent
    /// pattern tables
    #[serde(default)]
    pub patterns_path: Option<String>,

    /// Optional path to a YAML file overriding the built-in lexicon
    #[serde(default)]
    pub lexicon_path: Option<String>,
}

/// Engine tunables with centralized defaults
///
/// The default low-stock threshold and top-N limit were hardcoded in early
/// versions; they are configuration now so deployments can tune them
/// without a rebuild.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Low-stock threshold used when the message gives no number
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,

    /// Result limit for top-products / top-customers queries
    #[serde(default = "default_top_limit")]
    pub top_limit: u32,

    /// Minimum confidence for accepting a statistical model prediction
    #[serde(default = "default_ml_threshold")]
    pub ml_confidence_threshold: f32,

    /// Confidence assigned to a same-language rule match
    #[serde(default = "default_rule_confidence")]
    pub rule_confidence: f32,

    /// Confidence assigned to a cross-language fallback match
    #[serde(default = "default_cross_language_confidence")]
    pub cross_language_confidence: f32,

    /// Script share above which a message counts as mixed
    #[serde(default = "default_mixed_ratio_threshold")]
    pub mixed_ratio_threshold: f32,

    /// Confidence reported by the statistical language fallback
    #[serde(default = "default_language_fallback_confidence")]
    pub language_fallback_confidence: f32,
}

fn default_low_stock_threshold() -> u32 {
    extraction::LOW_STOCK_THRESHOLD
}

fn default_top_limit() -> u32 {
    extraction::TOP_LIMIT
}

fn default_ml_threshold() -> f32 {
    confidence::ML_ACCEPT_THRESHOLD
}

fn default_rule_confidence() -> f32 {
    confidence::RULE_MATCH
}

fn default_cross_language_confidence() -> f32 {
    confidence::CROSS_LANGUAGE_MATCH
}

fn default_mixed_ratio_threshold() -> f32 {
    language_id::MIXED_RATIO_THRESHOLD
}

fn default_language_fallback_confidence() -> f32 {
    confidence::LANGUAGE_FALLBACK
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            low_stock_threshold: default_low_stock_threshold(),
            top_limit: default_top_limit(),
            ml_confidence_threshold: default_ml_threshold(),
            rule_confidence: default_rule_confidence(),
            cross_language_confidence: default_cross_language_confidence(),
            mixed_ratio_threshold: default_mixed_ratio_threshold(),
            language_fallback_confidence: default_language_fallback_confidence(),
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        let engine = &self.engine;

        for (field, value) in [
            ("engine.ml_confidence_threshold", engine.ml_confidence_threshold),
            ("engine.rule_confidence", engine.rule_confidence),
            ("engine.cross_language_confidence", engine.cross_language_confidence),
            ("engine.mixed_ratio_threshold", engine.mixed_ratio_threshold),
            (
                "engine.language_fallback_confidence",
                engine.language_fallback_confidence,
            ),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: format!("Must be between 0.0 and 1.0, got {}", value),
                });
            }
        }

        if engine.cross_language_confidence > engine.rule_confidence {
            return Err(ConfigError::InvalidValue {
                field: "engine.cross_language_confidence".to_string(),
                message: format!(
                    "Cross-language matches must not outrank same-language matches ({} > {})",
                    engine.cross_language_confidence, engine.rule_confidence
                ),
            });
        }

        if engine.top_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "engine.top_limit".to_string(),
                message: "Must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

/// Load settings from config files and environment variables
///
/// Layering: `config/default.{yaml,toml}` → `config/{env}.{yaml,toml}` →
/// `DUKAAN__*` environment variables.
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    builder = builder.add_source(File::with_name("config/default").required(false));

    if let Some(env_name) = env {
        builder =
            builder.add_source(File::with_name(&format!("config/{}", env_name)).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix("DUKAAN")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.engine.low_stock_threshold, 5);
        assert_eq!(settings.engine.top_limit, 5);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_confidence_bounds_validated() {
        let mut settings = Settings::default();
        settings.engine.ml_confidence_threshold = 1.5;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_cross_language_must_rank_below_rule() {
        let mut settings = Settings::default();
        settings.engine.cross_language_confidence = 0.95;
        settings.engine.rule_confidence = 0.9;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_zero_top_limit_rejected() {
        let mut settings = Settings::default();
        settings.engine.top_limit = 0;
        assert!(settings.validate().is_err());
    }
}
