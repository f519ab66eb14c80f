//! Pluggable statistical intent model
//!
//! The engine consults an `IntentModel` before the rule cascade. The
//! prediction is accepted only above a configured confidence threshold;
//! any error, timeout or absent model falls through to the rules, so the
//! rule path has zero hard dependency on a model runtime.

use serde::{Deserialize, Serialize};

use crate::command::Intent;

/// A model prediction with its confidence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentPrediction {
    pub intent: Intent,
    /// 0.0 - 1.0, as reported by the model
    pub confidence: f32,
}

/// Statistical intent classifier consulted ahead of the rule cascade
///
/// Implementations must be cheap to call and bounded in time; the engine
/// treats `None` as "no usable prediction" and never retries.
pub trait IntentModel: Send + Sync {
    /// Predict the intent of a normalized message, if the model can
    fn predict(&self, text: &str) -> Option<IntentPrediction>;

    /// Whether a real model is loaded (used only for logging)
    fn is_enabled(&self) -> bool {
        true
    }
}
