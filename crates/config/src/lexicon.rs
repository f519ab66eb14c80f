//! Curated lexicon for normalization and extraction
//!
//! Holds the word-level data the engine needs at runtime: the Hinglish →
//! Devanagari transliteration map, emoji → domain-word substitutions,
//! romanized product-name variants, the bilingual month lookup, negation
//! markers and stop-word lists. Ships with built-in defaults and can be
//! loaded from a YAML file for deployments that maintain their own
//! vocabulary.
//!
//! The transliteration map deliberately contains only words that are
//! unambiguously romanized Hindi. English words that double as commerce
//! vocabulary ("stock", "price", "update", "is", "to") must stay in Latin
//! script; the pattern tables carry them as loanword alternatives instead.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::ConfigError;

/// Word-level language data used by the normalizer and extractors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lexicon {
    /// Romanized Hindi word → Devanagari replacement
    #[serde(default)]
    pub transliterations: HashMap<String, String>,

    /// English words that must never be touched by compound-word
    /// substring transliteration
    #[serde(default)]
    pub english_preserve: HashSet<String>,

    /// Emoji → canonical domain word
    #[serde(default)]
    pub emoji_words: HashMap<String, String>,

    /// Canonical Devanagari product name → romanized/misspelled variants
    #[serde(default)]
    pub product_variants: HashMap<String, Vec<String>>,

    /// Month name / abbreviation / transliteration → month number (1-12)
    #[serde(default)]
    pub months: HashMap<String, u32>,

    /// Negation marker regexes, per surface language
    #[serde(default)]
    pub negation_english: Vec<String>,
    #[serde(default)]
    pub negation_hindi: Vec<String>,
    #[serde(default)]
    pub negation_mixed: Vec<String>,

    /// Words dropped by the stop-word fallback when carving a product
    /// name out of an unmatched utterance
    #[serde(default)]
    pub stop_words: HashSet<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        builtin()
    }
}

impl Lexicon {
    /// Load a replacement lexicon from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::FileNotFound(format!("{}: {}", path.as_ref().display(), e))
        })?;
        let lexicon: Self =
            serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        tracing::debug!(
            path = %path.as_ref().display(),
            transliterations = lexicon.transliterations.len(),
            "loaded lexicon"
        );
        Ok(lexicon)
    }

    /// Whether a lowercased word is a known romanized Hindi word
    pub fn is_transliterated_hindi(&self, word: &str) -> bool {
        self.transliterations.contains_key(word)
    }

    /// Devanagari replacement for a lowercased romanized word
    pub fn transliterate_word(&self, word: &str) -> Option<&str> {
        self.transliterations.get(word).map(|s| s.as_str())
    }

    /// Snap a romanized or misspelled product name to its canonical
    /// Devanagari form, if it is a known variant
    pub fn canonical_product(&self, name: &str) -> Option<&str> {
        let lowered = name.trim().to_lowercase();
        if lowered.is_empty() {
            return None;
        }
        if self.product_variants.contains_key(lowered.as_str()) {
            // Already canonical
            return self
                .product_variants
                .get_key_value(lowered.as_str())
                .map(|(k, _)| k.as_str());
        }
        self.product_variants
            .iter()
            .find(|(_, variants)| variants.iter().any(|v| v == &lowered))
            .map(|(canonical, _)| canonical.as_str())
    }

    /// Month number for an English/Hindi/transliterated month token
    pub fn month_number(&self, token: &str) -> Option<u32> {
        self.months.get(token.trim().to_lowercase().as_str()).copied()
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }
}

fn string_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn string_set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn string_vec(patterns: &[&str]) -> Vec<String> {
    patterns.iter().map(|p| p.to_string()).collect()
}

/// The built-in lexicon
fn builtin() -> Lexicon {
    let transliterations = string_map(&[
        // Verbs
        ("dikhao", "दिखाओ"),
        ("dikhaao", "दिखाओ"),
        ("dikhaw", "दिखाओ"),
        ("dikha", "दिखा"),
        ("batao", "बताओ"),
        ("bataao", "बताओ"),
        ("btao", "बताओ"),
        ("karo", "करो"),
        ("kro", "करो"),
        ("karein", "करें"),
        ("karen", "करें"),
        ("kijiye", "कीजिए"),
        ("banao", "बनाओ"),
        ("badlo", "बदलो"),
        ("badlen", "बदलें"),
        ("bhejo", "भेजो"),
        ("jodo", "जोड़ो"),
        ("jodein", "जोड़ें"),
        ("rakho", "रखो"),
        ("khojo", "खोजो"),
        ("hai", "है"),
        ("hain", "हैं"),
        // Time words
        ("aaj", "आज"),
        ("aj", "आज"),
        ("kal", "कल"),
        ("kl", "कल"),
        ("subah", "सुबह"),
        ("shaam", "शाम"),
        ("raat", "रात"),
        ("din", "दिन"),
        ("dino", "दिनों"),
        ("hafte", "हफ्ते"),
        ("hafta", "हफ्ता"),
        ("saptah", "सप्ताह"),
        ("saptaah", "सप्ताह"),
        ("mahine", "महीने"),
        ("mahina", "महीना"),
        ("maheene", "महीने"),
        ("maah", "माह"),
        ("saal", "साल"),
        ("varsh", "वर्ष"),
        ("pichhle", "पिछले"),
        ("pichle", "पिछले"),
        ("pichhla", "पिछला"),
        ("pichla", "पिछला"),
        ("pichhli", "पिछली"),
        ("pehle", "पहले"),
        ("pahle", "पहले"),
        ("phle", "पहले"),
        ("agla", "अगला"),
        ("agle", "अगले"),
        // Connectors and pronouns
        ("se", "से"),
        ("sey", "से"),
        ("tak", "तक"),
        ("thak", "तक"),
        ("ka", "का"),
        ("kaa", "का"),
        ("ki", "की"),
        ("ke", "के"),
        ("mera", "मेरा"),
        ("meri", "मेरी"),
        ("mujhe", "मुझे"),
        ("sabhi", "सभी"),
        ("sab", "सब"),
        ("naam", "नाम"),
        ("nahi", "नहीं"),
        ("nahin", "नहीं"),
        ("mat", "मत"),
        ("zaroorat", "ज़रूरत"),
        ("jarurat", "ज़रूरत"),
        // Commerce nouns (romanized Hindi only)
        ("mulya", "मूल्य"),
        ("kimat", "कीमत"),
        ("keemat", "कीमत"),
        ("daam", "दाम"),
        ("matra", "मात्रा"),
        ("samaan", "सामान"),
        ("saman", "सामान"),
        ("cheez", "चीज़"),
        ("vastu", "वस्तु"),
        ("dukaan", "दुकान"),
        ("dukan", "दुकान"),
        ("grahak", "ग्राहक"),
        ("bikri", "बिक्री"),
        // Products and their common misspellings
        ("chawal", "चावल"),
        ("chaawal", "चावल"),
        ("chaval", "चावल"),
        ("choawal", "चावल"),
        ("chawl", "चावल"),
        ("aalu", "आलू"),
        ("aaloo", "आलू"),
        ("alu", "आलू"),
        ("aloo", "आलू"),
        ("alloo", "आलू"),
        ("aalo", "आलू"),
        ("pyaaz", "प्याज"),
        ("pyaj", "प्याज"),
        ("pyaz", "प्याज"),
        ("tamatar", "टमाटर"),
        ("tamaatar", "टमाटर"),
        ("tamater", "टमाटर"),
        ("mirch", "मिर्च"),
        ("mirchi", "मिर्च"),
        ("daal", "दाल"),
        ("sabzi", "सब्जी"),
        ("sabji", "सब्जी"),
        ("cheeni", "चीनी"),
        ("chini", "चीनी"),
        ("namak", "नमक"),
        ("sabun", "साबुन"),
        ("saabun", "साबुन"),
        ("saboon", "साबुन"),
        ("namkeen", "नमकीन"),
        ("namkin", "नमकीन"),
        ("masala", "मसाला"),
        ("masaala", "मसाला"),
        ("haldi", "हल्दी"),
        ("adrak", "अदरक"),
        ("lahsun", "लहसुन"),
        ("lehsun", "लहसुन"),
        ("lasun", "लहसुन"),
        ("paneer", "पनीर"),
        ("panir", "पनीर"),
        ("dahi", "दही"),
        ("gehun", "गेहूं"),
        ("gehu", "गेहूं"),
        ("atta", "आटा"),
        ("aata", "आटा"),
        ("maida", "मैदा"),
        ("gajar", "गाजर"),
        ("gaajar", "गाजर"),
        ("matar", "मटर"),
        ("bhindi", "भिंडी"),
        ("gobhi", "गोभी"),
        ("gobi", "गोभी"),
        ("dhaniya", "धनिया"),
        ("dhania", "धनिया"),
        // Colours (product qualifiers)
        ("laal", "लाल"),
        ("neeli", "नीली"),
        ("nili", "नीली"),
        ("safed", "सफेद"),
        ("hara", "हरा"),
        ("kala", "काला"),
    ]);

    let english_preserve = string_set(&[
        "weather", "rice", "potato", "onion", "tomato", "sugar", "salt", "soap", "oil", "flour",
        "wheat", "price", "rate", "report", "reports", "today", "yesterday", "tomorrow", "month",
        "months", "week", "weeks", "day", "days", "year", "years", "morning", "evening", "night",
        "stock", "update", "add", "new", "product", "products", "item", "items", "inventory",
        "order", "orders", "sale", "sales", "customer", "customers", "search", "find", "check",
        "show", "list", "view", "display", "available", "information", "details", "quantity",
        "units", "pieces", "below", "under", "less", "than", "from", "between", "good", "bad",
        "hello", "thank", "please", "welcome",
    ]);

    let emoji_words = string_map(&[
        // Food items
        ("🍅", "टमाटर"),
        ("🥔", "आलू"),
        ("🍚", "चावल"),
        ("🧅", "प्याज"),
        ("🌶️", "मिर्च"),
        ("🧄", "लहसुन"),
        ("🥕", "गाजर"),
        ("🍆", "बैंगन"),
        ("🥒", "खीरा"),
        ("🌽", "मक्का"),
        ("🍎", "सेब"),
        ("🍌", "केला"),
        ("🥭", "आम"),
        ("🍋", "नींबू"),
        ("🍞", "ब्रेड"),
        ("🥚", "अंडा"),
        ("🧀", "पनीर"),
        ("🧂", "नमक"),
        ("🍯", "शहद"),
        ("🍛", "दाल"),
        ("🍵", "चाय"),
        ("☕", "कॉफी"),
        ("🥛", "दूध"),
        ("🧈", "मक्खन"),
        ("🫓", "रोटी"),
        // Domain words
        ("📅", "तारीख"),
        ("🗓️", "कैलेंडर"),
        ("📆", "दिनांक"),
        ("📊", "रिपोर्ट"),
        ("📦", "स्टॉक"),
        ("🏷️", "मूल्य"),
        ("💰", "पैसा"),
        ("🛒", "खरीदें"),
        ("🧾", "बिल"),
        ("🔄", "अपडेट"),
        ("➕", "जोड़ें"),
        ("✏️", "एडिट"),
        ("❌", "हटाएं"),
        ("🔍", "खोजें"),
    ]);

    let product_variants: HashMap<String, Vec<String>> = [
        ("चावल", vec!["chawal", "chaawal", "chaval", "choawal", "chawl"]),
        ("आलू", vec!["aalu", "aaloo", "alu", "aloo", "alloo", "aalo"]),
        ("दाल", vec!["daal", "dal", "dhaal"]),
        ("चीनी", vec!["cheeni", "chini", "cheene"]),
        ("साबुन", vec!["sabun", "saabun", "saboon"]),
        ("नमक", vec!["namak", "namk"]),
        ("मसाला", vec!["masala", "masaala", "msala"]),
        ("मिर्च", vec!["mirch", "mirchi"]),
        ("हल्दी", vec!["haldi", "huldi"]),
        ("अदरक", vec!["adrak", "adruk"]),
        ("लहसुन", vec!["lahsun", "lehsun", "lasun"]),
        ("पनीर", vec!["paneer", "panir"]),
        ("दही", vec!["dahi"]),
        ("घी", vec!["ghee", "ghi"]),
        ("गेहूं", vec!["gehun", "gehu", "gehoon"]),
        ("आटा", vec!["atta", "aata", "aatta"]),
        ("मैदा", vec!["maida", "mayda"]),
        ("टमाटर", vec!["tamatar", "tamaatar", "tamater"]),
        ("प्याज", vec!["pyaaz", "pyaj", "pyaz", "pyaaj"]),
        ("गाजर", vec!["gajar", "gaajar"]),
        ("नमकीन", vec!["namkeen", "namkin", "namakeen"]),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.into_iter().map(String::from).collect()))
    .collect();

    let months = [
        // English full names
        ("january", 1u32),
        ("february", 2),
        ("march", 3),
        ("april", 4),
        ("may", 5),
        ("june", 6),
        ("july", 7),
        ("august", 8),
        ("september", 9),
        ("october", 10),
        ("november", 11),
        ("december", 12),
        // English abbreviations
        ("jan", 1),
        ("feb", 2),
        ("mar", 3),
        ("apr", 4),
        ("jun", 6),
        ("jul", 7),
        ("aug", 8),
        ("sep", 9),
        ("sept", 9),
        ("oct", 10),
        ("nov", 11),
        ("dec", 12),
        // Hindi month names
        ("जनवरी", 1),
        ("फरवरी", 2),
        ("मार्च", 3),
        ("अप्रैल", 4),
        ("मई", 5),
        ("जून", 6),
        ("जुलाई", 7),
        ("अगस्त", 8),
        ("सितंबर", 9),
        ("अक्टूबर", 10),
        ("नवंबर", 11),
        ("दिसंबर", 12),
        // Hindi abbreviations
        ("जन", 1),
        ("फर", 2),
        ("अप्र", 4),
        ("जुल", 7),
        ("अग", 8),
        ("सित", 9),
        ("अक्ट", 10),
        ("नव", 11),
        ("दिस", 12),
        // Transliterated Hindi
        ("janvari", 1),
        ("farvari", 2),
        ("aprail", 4),
        ("joon", 6),
        ("julai", 7),
        ("agast", 8),
        ("sitambar", 9),
        ("aktubar", 10),
        ("navambar", 11),
        ("disambar", 12),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();

    let negation_english = string_vec(&[
        r"don'?t\s+(?:need|want|require|show)",
        r"do\s+not\s+(?:need|want|require|show)",
        r"not\s+(?:interested|needed|required)",
        r"no\s+(?:need|interest)(?:\s+(?:for|in))?",
        r"won'?t\s+(?:need|want|require)",
        r"won'?t\s+be\s+(?:needing|wanting|requiring)",
        r"never\s+(?:mind|show|bring)",
        r"remove\s+(?:from|the)\s+(?:list|cart)",
        r"cancel\s+(?:the|my)?\s*(?:order|request)",
        r"stop\s+showing",
    ]);

    let negation_hindi = string_vec(&[
        r"नहीं",
        r"मत\s+(?:दिखाओ|लाओ|भेजो)",
        r"ज़रूरत\s+नहीं",
        r"जरूरत\s+नहीं",
        r"आवश्यकता\s+नहीं",
        r"हटा\s+(?:दो|दें)",
        r"रद्द\s+(?:करो|करें)",
        r"बंद\s+(?:करो|करें)",
    ]);

    let negation_mixed = string_vec(&[
        r"नहीं\s+(?:need|want|chahiye)",
        r"don'?t\s+चाहिए",
        r"no\s+ज़रूरत",
        r"cancel\s+(?:करो|करें)",
        r"remove\s+(?:करो|करें)",
    ]);

    let stop_words = string_set(&[
        // English command scaffolding
        "add", "new", "product", "products", "item", "items", "create", "register", "called",
        "search", "find", "locate", "look", "check", "show", "view", "list", "get", "display",
        "for", "with", "the", "a", "an", "me", "my", "in", "of", "to", "at", "is", "are", "do",
        "you", "we", "i", "have", "stock", "inventory", "available", "information", "details",
        "about", "give", "please", "rs", "rupees", "qty", "quantity", "units", "pieces", "pcs",
        "price",
        // Hindi command scaffolding
        "नया", "नई", "प्रोडक्ट", "प्रॉडक्ट", "आइटम", "सामान", "जोड़ो", "जोड़ें", "एड", "ऐड",
        "सर्च", "खोज", "खोजो", "खोजें", "ढूंढ", "ढूंढो", "देखो", "देखें", "दिखाओ", "दिखाएं",
        "जांच", "जानकारी", "विवरण", "बारे", "में", "उपलब्ध", "है", "हैं", "क्या", "के", "की",
        "का", "दो", "करो", "करें", "स्टॉक", "मात्रा", "मूल्य", "कीमत", "दाम", "रुपये", "पीस",
        "इकाई", "नग", "किलो", "ग्राम", "मुझे", "मेरे", "पास",
    ]);

    Lexicon {
        transliterations,
        english_preserve,
        emoji_words,
        product_variants,
        months,
        negation_english,
        negation_hindi,
        negation_mixed,
        stop_words,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transliteration_lookup() {
        let lexicon = Lexicon::default();
        assert_eq!(lexicon.transliterate_word("dikhao"), Some("दिखाओ"));
        assert_eq!(lexicon.transliterate_word("chawal"), Some("चावल"));
        assert_eq!(lexicon.transliterate_word("stock"), None);
        assert!(lexicon.is_transliterated_hindi("pichhle"));
    }

    #[test]
    fn test_english_words_not_in_transliterations() {
        // Words that double as English must never be transliterated
        let lexicon = Lexicon::default();
        for word in ["is", "to", "do", "this", "last", "day", "update", "price"] {
            assert!(
                !lexicon.is_transliterated_hindi(word),
                "{word} must not be in the transliteration map"
            );
        }
    }

    #[test]
    fn test_canonical_product() {
        let lexicon = Lexicon::default();
        assert_eq!(lexicon.canonical_product("chawal"), Some("चावल"));
        assert_eq!(lexicon.canonical_product("AALOO"), Some("आलू"));
        assert_eq!(lexicon.canonical_product("चावल"), Some("चावल"));
        assert_eq!(lexicon.canonical_product("rice"), None);
        assert_eq!(lexicon.canonical_product(""), None);
    }

    #[test]
    fn test_month_lookup_three_scripts() {
        let lexicon = Lexicon::default();
        assert_eq!(lexicon.month_number("June"), Some(6));
        assert_eq!(lexicon.month_number("जून"), Some(6));
        assert_eq!(lexicon.month_number("joon"), Some(6));
        assert_eq!(lexicon.month_number("sept"), Some(9));
        assert_eq!(lexicon.month_number("sonntag"), None);
    }

    #[test]
    fn test_emoji_words() {
        let lexicon = Lexicon::default();
        assert_eq!(lexicon.emoji_words.get("🍚").map(String::as_str), Some("चावल"));
        assert_eq!(lexicon.emoji_words.get("📦").map(String::as_str), Some("स्टॉक"));
    }

    #[test]
    fn test_yaml_round_trip() {
        let lexicon = Lexicon::default();
        let yaml = serde_yaml::to_string(&lexicon).unwrap();
        let parsed: Lexicon = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.transliterations.len(), lexicon.transliterations.len());
        assert_eq!(parsed.months.len(), lexicon.months.len());
    }
}
