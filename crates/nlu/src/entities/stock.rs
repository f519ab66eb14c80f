//! Stock update and low-stock threshold extraction
//!
//! Edit-stock commands arrive in English ("update stock of sugar to 15"),
//! Hindi ("चीनी का स्टॉक 15 करो") and code-switched forms ("blue shirt का
//! stock update करो to 30"). The pattern lists are ordered most-specific
//! first; the first hit wins.
//!
//! The new stock value is parsed as a *signed* integer: negative values
//! pass through unchanged, matching the permissive behavior callers rely
//! on for corrections. Validation is the caller's concern.

use once_cell::sync::Lazy;
use regex::Regex;

use dukaan_config::Lexicon;
use dukaan_core::EntitySet;

use super::product::fallback_name;

// English forms
static EN_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?:update|change|modify|edit|set)\s+(?:the\s+)?(?:stock|inventory|quantity)\s+(?:of\s+|for\s+)?([\w\s]+?)\s+(?:to|as)\s+(-?\d+)").unwrap(),
        Regex::new(r"(?:make|set)\s+([\w\s]+?)\s+(?:stock|inventory|quantity)\s+(?:to|as)\s+(-?\d+)").unwrap(),
        Regex::new(r"update\s+([\w\s]+?)\s+stock\s+to\s+(-?\d+)").unwrap(),
        Regex::new(r"(?:update|change)\s+([a-z\s]+?)\s+(?:to|as)\s+(-?\d+)").unwrap(),
        Regex::new(r"([\w\s]+?)\s+(?:stock|inventory|quantity)\s+(?:update|change|modify|edit|set)\s*(?:to|as)?\s*(-?\d+)").unwrap(),
    ]
});

// Hindi forms
static HI_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"([\w\s]+?)\s+(?:का|की|के)\s+(?:स्टॉक|मात्रा|इन्वेंटरी)\s+(-?\d+)\s+(?:करो|करें|कर|बनाओ|बनाएं)").unwrap(),
        Regex::new(r"([\w\s]+?)\s+(?:स्टॉक|मात्रा|इन्वेंटरी)\s+(-?\d+)\s+(?:करो|करें|कर|बनाओ|बनाएं|अपडेट)").unwrap(),
        Regex::new(r"([\w\s]+?)\s+स्टॉक\s+अपडेट\s+(?:करो|करें)\s+(-?\d+)").unwrap(),
        Regex::new(r"(?:स्टॉक|मात्रा)\s+(?:अपडेट|बदलो|बदलें|सेट)\s+(?:करो|करें)?\s*([\w\s]+?)\s+(-?\d+)").unwrap(),
        Regex::new(r"मुझे\s+([\w\s]+?)\s+का\s+स्टॉक\s+(-?\d+)").unwrap(),
    ]
});

// Code-switched forms
static MIXED_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"([\w\s]+?)\s+(?:का|की|के)\s+(?:stock|स्टॉक)\s+(?:update\s+|अपडेट\s+)?(?:करो\s+|करें\s+)?(?:to\s+)?(-?\d+)").unwrap(),
        Regex::new(r"(?:अपडेट|update)\s+(?:स्टॉक|stock)\s+(?:of\s+)?([\w\s]+?)\s+to\s+(-?\d+)").unwrap(),
    ]
});

static SIGNED_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"-?\d+").unwrap());
static STOCK_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:stock|स्टॉक|मात्रा|इन्वेंटरी)").unwrap());

// Threshold forms for low-stock queries
static THRESHOLD_EN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:below|under|less\s+than)\s+(\d+)").unwrap());
static THRESHOLD_HI: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s+से\s+(?:कम|नीचे)").unwrap());

/// Extract product name and new stock value from an edit-stock command
pub fn extract_edit_stock(text: &str, lexicon: &Lexicon) -> EntitySet {
    for pattern in EN_PATTERNS
        .iter()
        .chain(HI_PATTERNS.iter())
        .chain(MIXED_PATTERNS.iter())
    {
        if let Some(captures) = pattern.captures(text) {
            let name = clean_name(&captures[1], lexicon);
            let stock = captures[2].parse().ok();
            if name.is_some() || stock.is_some() {
                return EntitySet::EditStock { name, stock };
            }
        }
    }

    // Keyword fallback: a stock-ish word plus a trailing number is still
    // an update, however mangled the phrasing
    if STOCK_WORD.is_match(text) {
        let stock = SIGNED_NUMBER
            .find_iter(text)
            .last()
            .and_then(|m| m.as_str().parse().ok());
        let name = fallback_name(text, lexicon).and_then(|n| clean_name(&n, lexicon));
        if name.is_some() || stock.is_some() {
            return EntitySet::EditStock { name, stock };
        }
    }

    EntitySet::EditStock {
        name: None,
        stock: None,
    }
}

/// Extract the low-stock threshold, if the message names one
pub fn extract_threshold(text: &str) -> Option<u32> {
    THRESHOLD_EN
        .captures(text)
        .or_else(|| THRESHOLD_HI.captures(text))
        .and_then(|c| c[1].parse().ok())
}

/// Trim, lowercase and snap known romanized variants to their canonical
/// Devanagari product name
fn clean_name(raw: &str, lexicon: &Lexicon) -> Option<String> {
    let trimmed = raw.trim().to_lowercase();
    if trimmed.is_empty() {
        return None;
    }
    match lexicon.canonical_product(&trimmed) {
        Some(canonical) => Some(canonical.to_string()),
        None => Some(trimmed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::default()
    }

    fn parts(entities: EntitySet) -> (Option<String>, Option<i64>) {
        match entities {
            EntitySet::EditStock { name, stock } => (name, stock),
            other => panic!("expected EditStock, got {other:?}"),
        }
    }

    #[test]
    fn test_english_update() {
        let (name, stock) = parts(extract_edit_stock("update stock of sugar to 15", &lexicon()));
        assert_eq!(name.as_deref(), Some("sugar"));
        assert_eq!(stock, Some(15));
    }

    #[test]
    fn test_english_change_shorthand() {
        let (name, stock) = parts(extract_edit_stock("change tea to 50", &lexicon()));
        assert_eq!(name.as_deref(), Some("tea"));
        assert_eq!(stock, Some(50));
    }

    #[test]
    fn test_hindi_update() {
        let (name, stock) = parts(extract_edit_stock("चावल का स्टॉक 100 करो", &lexicon()));
        assert_eq!(name.as_deref(), Some("चावल"));
        assert_eq!(stock, Some(100));
    }

    #[test]
    fn test_hindi_reversed_form() {
        let (name, stock) = parts(extract_edit_stock("चाय 50 स्टॉक अपडेट करें", &lexicon()));
        assert_eq!(name.as_deref(), Some("चाय"));
        assert_eq!(stock, Some(50));
    }

    #[test]
    fn test_mixed_code_switching() {
        let (name, stock) = parts(extract_edit_stock(
            "blue shirt का stock update करो to 30",
            &lexicon(),
        ));
        assert_eq!(name.as_deref(), Some("blue shirt"));
        assert_eq!(stock, Some(30));
    }

    #[test]
    fn test_negative_stock_accepted() {
        let (name, stock) = parts(extract_edit_stock("update stock of rice to -5", &lexicon()));
        assert_eq!(name.as_deref(), Some("rice"));
        assert_eq!(stock, Some(-5));
    }

    #[test]
    fn test_romanized_name_snaps_to_canonical() {
        let (name, stock) = parts(extract_edit_stock("update stock of chawal to 12", &lexicon()));
        assert_eq!(name.as_deref(), Some("चावल"));
        assert_eq!(stock, Some(12));
    }

    #[test]
    fn test_keyword_fallback() {
        let (name, stock) = parts(extract_edit_stock("साबुन स्टॉक 3", &lexicon()));
        assert_eq!(name.as_deref(), Some("साबुन"));
        assert_eq!(stock, Some(3));
    }

    #[test]
    fn test_nothing_extractable() {
        let (name, stock) = parts(extract_edit_stock("update things", &lexicon()));
        assert_eq!(name, None);
        assert_eq!(stock, None);
    }

    #[test]
    fn test_thresholds() {
        assert_eq!(extract_threshold("show low stock items below 15"), Some(15));
        assert_eq!(extract_threshold("items with stock less than 8"), Some(8));
        assert_eq!(
            extract_threshold("10 से कम स्टॉक वाले आइटम दिखाओ"),
            Some(10)
        );
        assert_eq!(extract_threshold("show low stock items"), None);
    }
}
