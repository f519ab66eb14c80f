//! Product-name extraction for search queries
//!
//! Ordered alternatives over the usual phrasings ("search for X", "is X
//! available", "do we have X", "क्या X उपलब्ध है", "X खोजो"), with a
//! stop-word-stripping fallback over the whole utterance when nothing
//! matches. Trailing location qualifiers ("in inventory", "in stock")
//! are trimmed from the captured span.

use once_cell::sync::Lazy;
use regex::Regex;

use dukaan_config::Lexicon;
use dukaan_core::EntitySet;

use super::product::fallback_name;

static PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        // English
        Regex::new(r"(?:search|look)\s+for\s+([\w\s]+)").unwrap(),
        Regex::new(r"check\s+(?:if|whether)\s+([\w\s]+?)\s+(?:is|are)\s+(?:in\s+stock|available)").unwrap(),
        Regex::new(r"is\s+([\w\s]+?)\s+(?:available|in\s+stock)").unwrap(),
        Regex::new(r"do\s+(?:you|we|i)\s+have\s+([\w\s]+)").unwrap(),
        Regex::new(r"(?:find|locate)\s+([\w\s]+)").unwrap(),
        // Hindi
        Regex::new(r"क्या\s+(?:आपके|हमारे|मेरे)\s+पास\s+([\w\s]+?)\s+(?:है|हैं)").unwrap(),
        Regex::new(r"क्या\s+([\w\s]+?)\s+(?:उपलब्ध|स्टॉक\s+में|मिलेगा)").unwrap(),
        Regex::new(r"([\w\s]+?)\s+(?:उपलब्ध|स्टॉक\s+में)\s+(?:है|हैं)").unwrap(),
        Regex::new(r"([\w\s]+?)\s+(?:को\s+)?(?:इन्वेंटरी\s+में\s+)?(?:खोजो|खोजें|ढूंढो|देखो|देखें)").unwrap(),
        Regex::new(r"([\w\s]+?)\s+(?:सर्च|खोज|ढूंढ)\s+(?:करो|करें)").unwrap(),
        Regex::new(r"(?:खोजो|खोजें|ढूंढो|सर्च\s+करो|सर्च\s+करें)\s+([\w\s]+)").unwrap(),
        Regex::new(r"([\w\s]+?)\s+के\s+बारे\s+में").unwrap(),
    ]
});

// Trailing qualifiers trimmed off the captured span
static TRAILING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+(?:in\s+(?:inventory|stock)|available|इन्वेंटरी\s+में|स्टॉक\s+में)\s*$")
        .unwrap()
});

/// Extract the searched-for product name from a normalized query
pub fn extract_search(text: &str, lexicon: &Lexicon) -> EntitySet {
    for pattern in PATTERNS.iter() {
        if let Some(captures) = pattern.captures(text) {
            if let Some(name) = clean(&captures[1]) {
                return EntitySet::Search { name: Some(name) };
            }
        }
    }

    EntitySet::Search {
        name: fallback_name(text, lexicon).and_then(|n| clean(&n)),
    }
}

fn clean(raw: &str) -> Option<String> {
    let trimmed = TRAILING.replace(raw.trim(), "").trim().to_lowercase();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::default()
    }

    fn name(entities: EntitySet) -> Option<String> {
        match entities {
            EntitySet::Search { name } => name,
            other => panic!("expected Search, got {other:?}"),
        }
    }

    #[test]
    fn test_search_for() {
        assert_eq!(
            name(extract_search("search for red shirt", &lexicon())).as_deref(),
            Some("red shirt")
        );
    }

    #[test]
    fn test_trailing_qualifier_trimmed() {
        assert_eq!(
            name(extract_search("search for tea in inventory", &lexicon())).as_deref(),
            Some("tea")
        );
    }

    #[test]
    fn test_availability_question() {
        assert_eq!(
            name(extract_search("is sugar available", &lexicon())).as_deref(),
            Some("sugar")
        );
    }

    #[test]
    fn test_do_we_have() {
        assert_eq!(
            name(extract_search("do we have basmati rice", &lexicon())).as_deref(),
            Some("basmati rice")
        );
    }

    #[test]
    fn test_hindi_search_verb() {
        assert_eq!(
            name(extract_search("लाल शर्ट खोजो", &lexicon())).as_deref(),
            Some("लाल शर्ट")
        );
    }

    #[test]
    fn test_hindi_search_with_locative() {
        assert_eq!(
            name(extract_search("चाय को इन्वेंटरी में खोजो", &lexicon())).as_deref(),
            Some("चाय")
        );
    }

    #[test]
    fn test_hindi_availability() {
        assert_eq!(
            name(extract_search("क्या चावल उपलब्ध है", &lexicon())).as_deref(),
            Some("चावल")
        );
    }

    #[test]
    fn test_fallback_stop_word_strip() {
        assert_eq!(
            name(extract_search("नीली जींस", &lexicon())).as_deref(),
            Some("नीली जींस")
        );
    }
}
