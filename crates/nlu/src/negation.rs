//! Negation detection
//!
//! Guards the classifier against refusal statements: "I don't want soap"
//! must not become a product search. The detector scans normalized text
//! against fixed marker tables (English, Hindi, mixed) and a single hit
//! short-circuits the whole pipeline, regardless of what else would have
//! matched.

use regex::Regex;

use dukaan_config::Lexicon;

use crate::error::{NluError, Result};

/// Fixed-marker negation scanner
pub struct NegationDetector {
    markers: Vec<Regex>,
}

impl NegationDetector {
    /// Compile the marker tables from the lexicon
    pub fn from_lexicon(lexicon: &Lexicon) -> Result<Self> {
        let mut markers = Vec::new();
        for pattern in lexicon
            .negation_english
            .iter()
            .chain(lexicon.negation_hindi.iter())
            .chain(lexicon.negation_mixed.iter())
        {
            markers.push(Regex::new(pattern).map_err(NluError::NegationMarker)?);
        }
        Ok(Self { markers })
    }

    /// Whether the normalized text contains any negation marker
    pub fn is_negated(&self, text: &str) -> bool {
        for marker in &self.markers {
            if marker.is_match(text) {
                tracing::debug!(marker = %marker.as_str(), "negation marker matched");
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> NegationDetector {
        NegationDetector::from_lexicon(&Lexicon::default()).unwrap()
    }

    #[test]
    fn test_english_negations() {
        let detector = detector();
        assert!(detector.is_negated("i don't want soap"));
        assert!(detector.is_negated("do not need rice"));
        assert!(detector.is_negated("not interested in this"));
        assert!(detector.is_negated("no need for sugar"));
        assert!(detector.is_negated("cancel my order"));
        assert!(detector.is_negated("never mind"));
    }

    #[test]
    fn test_hindi_negations() {
        let detector = detector();
        assert!(detector.is_negated("मुझे साबुन नहीं चाहिए"));
        assert!(detector.is_negated("मत दिखाओ"));
        assert!(detector.is_negated("ज़रूरत नहीं है"));
        assert!(detector.is_negated("रद्द करो"));
    }

    #[test]
    fn test_mixed_negations() {
        let detector = detector();
        assert!(detector.is_negated("नहीं want this"));
        assert!(detector.is_negated("order cancel करो"));
    }

    #[test]
    fn test_plain_commands_pass() {
        let detector = detector();
        assert!(!detector.is_negated("show me all orders"));
        assert!(!detector.is_negated("चावल का स्टॉक 100 करो"));
        assert!(!detector.is_negated("add new product rice 50rs 20qty"));
    }
}
