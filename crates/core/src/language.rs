//! Language definitions and per-message language decisions
//!
//! The engine supports English, Hindi, and code-switched ("Hinglish")
//! messages. A `LanguageDecision` is computed exactly once per message and
//! carried through the pipeline unchanged.

use serde::{Deserialize, Serialize};

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[serde(alias = "en")]
    English,
    #[serde(alias = "hi")]
    Hindi,
}

impl Language {
    /// ISO 639-1 code ("en" / "hi")
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
        }
    }

    /// The other supported language (used for cross-language fallback)
    pub fn other(&self) -> Language {
        match self {
            Language::English => Language::Hindi,
            Language::Hindi => Language::English,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A same-language run of text inside a mixed message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageSegment {
    pub language: Language,
    pub text: String,
}

/// Result of language identification for one message
///
/// `primary` is always set, even for mixed input. `confidence` is the
/// winning script ratio, or a fixed low constant when the statistical
/// fallback was used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageDecision {
    /// Dominant language of the message
    pub primary: Language,
    /// Both scripts (or transliterated Hindi) present in significant amounts
    pub is_mixed: bool,
    /// 0.0 - 1.0
    pub confidence: f32,
    /// Ordered same-language substrings, populated only when mixed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segments: Option<Vec<LanguageSegment>>,
}

impl LanguageDecision {
    /// Decision for a message that is entirely one language
    pub fn single(language: Language, confidence: f32) -> Self {
        Self {
            primary: language,
            is_mixed: false,
            confidence,
            segments: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Hindi.code(), "hi");
    }

    #[test]
    fn test_other_language() {
        assert_eq!(Language::English.other(), Language::Hindi);
        assert_eq!(Language::Hindi.other(), Language::English);
    }

    #[test]
    fn test_serde_aliases() {
        let lang: Language = serde_yaml::from_str("hi").unwrap();
        assert_eq!(lang, Language::Hindi);
        let lang: Language = serde_yaml::from_str("english").unwrap();
        assert_eq!(lang, Language::English);
    }

    #[test]
    fn test_single_decision() {
        let decision = LanguageDecision::single(Language::Hindi, 0.95);
        assert_eq!(decision.primary, Language::Hindi);
        assert!(!decision.is_mixed);
        assert!(decision.segments.is_none());
    }
}
