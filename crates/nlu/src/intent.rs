//! Intent classification
//!
//! A deterministic rule cascade over two ordered pattern tables, with an
//! optional statistical model consulted first. Overlap between intents is
//! resolved by an explicit priority list: the first intent in priority
//! order with any matching pattern wins, independent of table layout.
//!
//! When the primary language's table yields nothing, the other language's
//! table is tried as a lower-confidence fallback. Code-switched messages
//! routinely defeat the script-ratio detector; the fallback makes the
//! classifier robust to that.

use std::collections::HashMap;
use std::sync::Arc;

use regex::Regex;

use dukaan_config::{EngineSettings, IntentPatternsConfig};
use dukaan_core::{Intent, IntentModel, Language};

use crate::error::{NluError, Result};

/// Where a classification came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationSource {
    /// Accepted statistical model prediction
    Model,
    /// Rule match in the message's own language table
    Rule,
    /// Rule match found only in the other language's table
    CrossLanguageRule,
    /// Nothing matched
    Unresolved,
}

/// Outcome of intent classification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub intent: Intent,
    pub confidence: f32,
    pub source: ClassificationSource,
}

/// Rule cascade with optional model front-end
pub struct IntentClassifier {
    english: HashMap<Intent, Vec<Regex>>,
    hindi: HashMap<Intent, Vec<Regex>>,
    priority: Vec<Intent>,
    model: Arc<dyn IntentModel>,
    ml_threshold: f32,
    rule_confidence: f32,
    cross_language_confidence: f32,
}

impl IntentClassifier {
    pub fn new(
        patterns: &IntentPatternsConfig,
        settings: &EngineSettings,
        model: Arc<dyn IntentModel>,
    ) -> Result<Self> {
        Ok(Self {
            english: compile_table(&patterns.english)?,
            hindi: compile_table(&patterns.hindi)?,
            priority: patterns.priority.clone(),
            model,
            ml_threshold: settings.ml_confidence_threshold,
            rule_confidence: settings.rule_confidence,
            cross_language_confidence: settings.cross_language_confidence,
        })
    }

    /// Classify a normalized message
    pub fn classify(&self, text: &str, primary: Language) -> Classification {
        // Best-effort model consultation; anything below the threshold
        // (or no model at all) falls through to the rules
        if self.model.is_enabled() {
            if let Some(prediction) = self.model.predict(text) {
                if prediction.intent != Intent::Unknown
                    && prediction.confidence >= self.ml_threshold
                {
                    tracing::debug!(
                        intent = %prediction.intent,
                        confidence = prediction.confidence,
                        "model prediction accepted"
                    );
                    return Classification {
                        intent: prediction.intent,
                        confidence: prediction.confidence,
                        source: ClassificationSource::Model,
                    };
                }
            }
        }

        if let Some(intent) = self.match_table(primary, text) {
            return Classification {
                intent,
                confidence: self.rule_confidence,
                source: ClassificationSource::Rule,
            };
        }

        if let Some(intent) = self.match_table(primary.other(), text) {
            return Classification {
                intent,
                confidence: self.cross_language_confidence,
                source: ClassificationSource::CrossLanguageRule,
            };
        }

        Classification {
            intent: Intent::Unknown,
            confidence: 0.0,
            source: ClassificationSource::Unresolved,
        }
    }

    /// First intent in priority order with any matching pattern
    fn match_table(&self, language: Language, text: &str) -> Option<Intent> {
        let table = match language {
            Language::English => &self.english,
            Language::Hindi => &self.hindi,
        };
        for intent in &self.priority {
            if let Some(patterns) = table.get(intent) {
                if patterns.iter().any(|pattern| pattern.is_match(text)) {
                    return Some(*intent);
                }
            }
        }
        None
    }
}

fn compile_table(
    sets: &[dukaan_config::IntentPatternSet],
) -> Result<HashMap<Intent, Vec<Regex>>> {
    let mut table = HashMap::new();
    for set in sets {
        let mut compiled = Vec::with_capacity(set.patterns.len());
        for pattern in &set.patterns {
            compiled.push(Regex::new(pattern).map_err(|source| NluError::Pattern {
                intent: set.intent.as_str(),
                source,
            })?);
        }
        table.insert(set.intent, compiled);
    }
    Ok(table)
}
