//! The command engine
//!
//! Wires the pipeline together: language identification → normalization →
//! negation guard → intent classification → entity extraction → envelope
//! assembly. Every stage is pure over immutable configuration, so one
//! engine instance can be shared freely across threads.

use std::sync::Arc;

use chrono::NaiveDate;

use dukaan_config::{EngineSettings, IntentPatternsConfig, Lexicon, Settings};
use dukaan_core::{
    EntitySet, Intent, IntentModel, LanguageDecision, ParseStatus, ParsedCommand,
};

use crate::entities::EntityExtractors;
use crate::error::Result;
use crate::intent::IntentClassifier;
use crate::language::LanguageIdentifier;
use crate::model::NoopModel;
use crate::negation::NegationDetector;
use crate::normalize::Normalizer;

/// Immutable configuration an engine is built from
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub settings: EngineSettings,
    pub patterns: IntentPatternsConfig,
    pub lexicon: Lexicon,
}

impl EngineConfig {
    /// Build a config from settings, loading pattern/lexicon override
    /// files when paths are configured
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let patterns = match &settings.patterns_path {
            Some(path) => IntentPatternsConfig::load(path)?,
            None => IntentPatternsConfig::default(),
        };
        let lexicon = match &settings.lexicon_path {
            Some(path) => Lexicon::load(path)?,
            None => Lexicon::default(),
        };
        Ok(Self {
            settings: settings.engine.clone(),
            patterns,
            lexicon,
        })
    }
}

/// The multilingual command interpretation engine
///
/// A pure function from message text to [`ParsedCommand`]; the only state
/// is read-only configuration fixed at construction.
pub struct CommandEngine {
    identifier: LanguageIdentifier,
    normalizer: Normalizer,
    negation: NegationDetector,
    classifier: IntentClassifier,
    extractors: EntityExtractors,
    reference_date: Option<NaiveDate>,
}

impl CommandEngine {
    /// Build an engine from a config and an optional statistical model
    pub fn new(config: EngineConfig, model: Option<Arc<dyn IntentModel>>) -> Result<Self> {
        let lexicon = Arc::new(config.lexicon);
        let model = model.unwrap_or_else(|| Arc::new(NoopModel));

        Ok(Self {
            identifier: LanguageIdentifier::new(&config.settings, Arc::clone(&lexicon)),
            normalizer: Normalizer::new(Arc::clone(&lexicon)),
            negation: NegationDetector::from_lexicon(&lexicon)?,
            classifier: IntentClassifier::new(&config.patterns, &config.settings, model)?,
            extractors: EntityExtractors::new(lexicon, &config.settings)?,
            reference_date: None,
        })
    }

    /// Engine with built-in configuration and no statistical model
    pub fn with_defaults() -> Result<Self> {
        Self::new(EngineConfig::default(), None)
    }

    /// Pin the reference date used to resolve relative time expressions.
    /// Production engines use the current date; tests pin a fixed one.
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Identify the language mixture of a message without parsing it
    pub fn detect_language(&self, text: &str) -> LanguageDecision {
        self.identifier.detect(text)
    }

    /// Interpret one message
    ///
    /// Never fails: malformed, empty or unresolvable input yields a
    /// well-formed result with the appropriate status.
    pub fn parse(&self, text: &str) -> ParsedCommand {
        let language = self.identifier.detect(text);
        let normalized = self.normalizer.normalize(text, &language);

        tracing::debug!(raw = text, normalized = %normalized, "interpreting message");

        if self.negation.is_negated(&normalized) {
            return ParsedCommand {
                raw_text: text.to_string(),
                normalized_text: normalized,
                language,
                intent: Intent::Unknown,
                entities: EntitySet::None,
                confidence: 1.0,
                has_negation: true,
                status: ParseStatus::Unknown,
            };
        }

        let classification = self.classifier.classify(&normalized, language.primary);

        if classification.intent == Intent::Unknown {
            return ParsedCommand {
                raw_text: text.to_string(),
                normalized_text: normalized,
                language,
                intent: Intent::Unknown,
                entities: EntitySet::None,
                confidence: 0.0,
                has_negation: false,
                status: ParseStatus::Unknown,
            };
        }

        let today = self
            .reference_date
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        let entities = self
            .extractors
            .extract(classification.intent, &normalized, today);

        let missing = entities.missing_fields();
        let status = if missing.is_empty() {
            ParseStatus::Success
        } else {
            ParseStatus::MissingEntity {
                fields: missing.iter().map(|f| f.to_string()).collect(),
            }
        };

        ParsedCommand {
            raw_text: text.to_string(),
            normalized_text: normalized,
            language,
            intent: classification.intent,
            entities,
            confidence: classification.confidence,
            has_negation: false,
            status,
        }
    }
}
