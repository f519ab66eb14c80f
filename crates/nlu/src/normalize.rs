//! Text normalization
//!
//! Canonicalizes a raw message before any matching happens:
//!
//! 1. Emoji → canonical domain word (🍚 → "चावल", 📦 → "स्टॉक")
//! 2. Structured "key: value" input collapsed into a one-line command
//! 3. Newlines, pipes and arrow characters standardized
//! 4. Noise punctuation scrubbed (₹, commas, dashes, apostrophes kept)
//! 5. Devanagari digits folded to ASCII
//! 6. Case folding (Devanagari has no case, so this only affects Latin)
//! 7. Word-level Hinglish → Devanagari transliteration, with a
//!    compound-word heuristic for run-together tokens
//! 8. Whitespace collapse
//!
//! Normalization is idempotent: running it on its own output is a no-op.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use dukaan_config::Lexicon;
use dukaan_core::{Language, LanguageDecision};

use crate::hindi;

// Structured "key: value" product/stock forms collapsed to one line
static STRUCTURED_LABELED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:product|item|प्रोडक्ट|आइटम|वस्तु)\s*[:\-]\s*([^\n,]+?)\s*(?:\n|,)\s*(?:quantity|stock|मात्रा|स्टॉक)\s*[:\-]\s*([^\n]+)",
    )
    .unwrap()
});
static STRUCTURED_BARE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)([^\n:]+?)\s*:\s*(?:\n|,)\s*(?:quantity|stock|मात्रा|स्टॉक)\s*[:\-]\s*([^\n]+)",
    )
    .unwrap()
});
static STRUCTURED_UNIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([^\n:]+?)\s*:\s*(?:\n|,)\s*([\d.]+\s*(?:किलो|kilo|kg|किग्रा))").unwrap()
});

static ARROWS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[→➡⟶⇒⇨⟹]").unwrap());
static NOISE: Lazy<Regex> =
    Lazy::new(|| Regex::new("[!@#$%^&*()_+=\\[\\]{};\"<>?\u{FE0F}]").unwrap());
static LONG_DASH: Lazy<Regex> = Lazy::new(|| Regex::new(r"[–—]").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Idempotent normalizer over a fixed lexicon
pub struct Normalizer {
    lexicon: Arc<Lexicon>,
    /// Transliteration keys of length >= 4, longest first, for the
    /// compound-word heuristic
    compound_keys: Vec<(String, String)>,
}

impl Normalizer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        let mut compound_keys: Vec<(String, String)> = lexicon
            .transliterations
            .iter()
            .filter(|(k, _)| k.chars().count() >= 4)
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        compound_keys.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then(a.0.cmp(&b.0)));
        Self {
            lexicon,
            compound_keys,
        }
    }

    /// Normalize one message
    pub fn normalize(&self, text: &str, decision: &LanguageDecision) -> String {
        if text.is_empty() {
            return String::new();
        }

        let mut out = text.to_string();

        for (emoji, word) in &self.lexicon.emoji_words {
            if out.contains(emoji.as_str()) {
                out = out.replace(emoji.as_str(), &format!(" {} ", word));
            }
        }

        out = collapse_structured(&out);

        out = out.replace('\n', " ").replace('\r', " ");
        out = ARROWS.replace_all(&out, " to ").into_owned();
        out = out.replace('|', ",");
        out = NOISE.replace_all(&out, " ").into_owned();
        out = LONG_DASH.replace_all(&out, "-").into_owned();
        out = hindi::devanagari_digits_to_ascii(&out);
        out = out.to_lowercase();

        // Pure Hindi messages have no Latin-script words to transliterate
        if decision.primary != Language::Hindi || decision.is_mixed {
            out = self.transliterate(&out);
        }

        WHITESPACE.replace_all(&out, " ").trim().to_string()
    }

    /// Replace romanized Hindi words with their Devanagari forms,
    /// preserving every separator
    fn transliterate(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut word = String::new();

        for c in text.chars() {
            if c.is_alphanumeric() {
                word.push(c);
            } else {
                if !word.is_empty() {
                    self.push_word(&mut out, &word);
                    word.clear();
                }
                out.push(c);
            }
        }
        if !word.is_empty() {
            self.push_word(&mut out, &word);
        }
        out
    }

    fn push_word(&self, out: &mut String, word: &str) {
        if word.chars().any(hindi::is_devanagari) {
            out.push_str(word);
            return;
        }
        if let Some(replacement) = self.lexicon.transliterate_word(word) {
            out.push_str(replacement);
            return;
        }
        // Compound heuristic: run-together tokens like "chawalka" still
        // carry a recognizable Hinglish stem
        if word.chars().count() >= 6
            && !self.lexicon.english_preserve.contains(word)
            && !self
                .lexicon
                .english_preserve
                .iter()
                .any(|eng| word.contains(eng.as_str()))
        {
            for (key, replacement) in &self.compound_keys {
                if word.contains(key.as_str()) {
                    out.push_str(&word.replace(key.as_str(), replacement));
                    return;
                }
            }
        }
        out.push_str(word);
    }
}

/// Collapse structured "key: value" product/stock input into the
/// canonical one-line command for its script
fn collapse_structured(text: &str) -> String {
    for pattern in [&*STRUCTURED_LABELED, &*STRUCTURED_BARE, &*STRUCTURED_UNIT] {
        if let Some(captures) = pattern.captures(text) {
            let product = captures.get(1).map_or("", |m| m.as_str()).trim();
            let quantity = captures.get(2).map_or("", |m| m.as_str()).trim();
            if product.is_empty() || quantity.is_empty() {
                continue;
            }
            return if text.chars().any(hindi::is_devanagari) {
                format!("{} का स्टॉक {} अपडेट करो", product, quantity)
            } else {
                format!("update stock of {} to {}", product, quantity)
            };
        }
    }
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> Normalizer {
        Normalizer::new(Arc::new(Lexicon::default()))
    }

    fn en() -> LanguageDecision {
        LanguageDecision::single(Language::English, 1.0)
    }

    fn mixed() -> LanguageDecision {
        LanguageDecision {
            primary: Language::English,
            is_mixed: true,
            confidence: 0.6,
            segments: None,
        }
    }

    #[test]
    fn test_lowercases_english() {
        assert_eq!(
            normalizer().normalize("Show Me All Orders", &en()),
            "show me all orders"
        );
    }

    #[test]
    fn test_transliterates_hinglish() {
        assert_eq!(
            normalizer().normalize("pichhle hafte ka report dikhao", &mixed()),
            "पिछले हफ्ते का report दिखाओ"
        );
    }

    #[test]
    fn test_preserves_english_commerce_words() {
        let out = normalizer().normalize("update stock of rice to 20", &en());
        assert_eq!(out, "update stock of rice to 20");
    }

    #[test]
    fn test_emoji_substitution() {
        let out = normalizer().normalize("🍚 का स्टॉक 20 करो", &mixed());
        assert_eq!(out, "चावल का स्टॉक 20 करो");
    }

    #[test]
    fn test_structured_input_collapses_english() {
        let out = normalizer().normalize("product: tea\nstock: 25", &en());
        assert_eq!(out, "update stock of tea to 25");
    }

    #[test]
    fn test_structured_input_collapses_hindi() {
        let out = normalizer().normalize("प्रोडक्ट: चाय\nस्टॉक: 25", &mixed());
        assert_eq!(out, "चाय का स्टॉक 25 अपडेट करो");
    }

    #[test]
    fn test_devanagari_digits_folded() {
        let out = normalizer().normalize("चावल का स्टॉक ५० करो", &mixed());
        assert_eq!(out, "चावल का स्टॉक 50 करो");
    }

    #[test]
    fn test_negative_numbers_survive() {
        let out = normalizer().normalize("update stock of rice to -5", &en());
        assert_eq!(out, "update stock of rice to -5");
    }

    #[test]
    fn test_pipes_become_commas() {
        let out = normalizer().normalize("Add product Aata | 55 | 10", &en());
        assert_eq!(out, "add product आटा , 55 , 10");
    }

    #[test]
    fn test_idempotent() {
        let normalizer = normalizer();
        for input in [
            "Add new product Rice 50rs 20qty",
            "pichhle hafte ka report dikhao",
            "🍚 का स्टॉक २० करो",
            "product: tea\nstock: 25",
            "मुझे साबुन नहीं चाहिए",
            "Update stock of Sugar to -15!!",
        ] {
            let once = normalizer.normalize(input, &mixed());
            let twice = normalizer.normalize(&once, &mixed());
            assert_eq!(once, twice, "normalize must be idempotent for {input:?}");
        }
    }

    #[test]
    fn test_whitespace_collapse() {
        let out = normalizer().normalize("  show   my   orders  ", &en());
        assert_eq!(out, "show my orders");
    }
}
