//! Intent pattern tables
//!
//! Two ordered tables (English, Hindi) mapping each intent to its regex
//! alternatives, plus the explicit priority list that resolves overlap
//! between intents. The tables ship with built-in defaults and can be
//! replaced wholesale from a YAML file.
//!
//! Patterns are written against *normalized* text: lowercased, Hinglish
//! words already transliterated to Devanagari, Devanagari digits already
//! folded to ASCII. The Hindi table deliberately tolerates common Latin
//! loanwords ("stock", "report", "orders") because code-switched messages
//! keep them in Latin script after normalization.

use serde::{Deserialize, Serialize};
use std::path::Path;

use dukaan_core::Intent;

use crate::ConfigError;

/// Priority order resolving pattern overlap between intents
///
/// The first intent in this list with any matching pattern wins,
/// independent of table construction order.
pub const INTENT_PRIORITY: [Intent; 9] = [
    Intent::GetLowStock,
    Intent::AddProduct,
    Intent::EditStock,
    Intent::GetReport,
    Intent::GetOrders,
    Intent::SearchProduct,
    Intent::GetInventory,
    Intent::GetTopProducts,
    Intent::GetCustomerData,
];

/// Pattern alternatives for one intent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentPatternSet {
    pub intent: Intent,
    pub patterns: Vec<String>,
}

/// The full pattern configuration (both languages + priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentPatternsConfig {
    #[serde(default)]
    pub english: Vec<IntentPatternSet>,
    #[serde(default)]
    pub hindi: Vec<IntentPatternSet>,
    #[serde(default = "default_priority")]
    pub priority: Vec<Intent>,
}

fn default_priority() -> Vec<Intent> {
    INTENT_PRIORITY.to_vec()
}

impl Default for IntentPatternsConfig {
    fn default() -> Self {
        Self {
            english: builtin_english(),
            hindi: builtin_hindi(),
            priority: default_priority(),
        }
    }
}

impl IntentPatternsConfig {
    /// Load a replacement table set from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::FileNotFound(format!("{}: {}", path.as_ref().display(), e))
        })?;
        let config: Self =
            serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        tracing::debug!(
            path = %path.as_ref().display(),
            english_sets = config.english.len(),
            hindi_sets = config.hindi.len(),
            "loaded intent pattern tables"
        );
        Ok(config)
    }

    /// Patterns for one intent in the English table
    pub fn english_patterns(&self, intent: Intent) -> Option<&[String]> {
        self.english
            .iter()
            .find(|set| set.intent == intent)
            .map(|set| set.patterns.as_slice())
    }

    /// Patterns for one intent in the Hindi table
    pub fn hindi_patterns(&self, intent: Intent) -> Option<&[String]> {
        self.hindi
            .iter()
            .find(|set| set.intent == intent)
            .map(|set| set.patterns.as_slice())
    }
}

fn set(intent: Intent, patterns: &[&str]) -> IntentPatternSet {
    IntentPatternSet {
        intent,
        patterns: patterns.iter().map(|p| p.to_string()).collect(),
    }
}

/// Built-in English pattern table
fn builtin_english() -> Vec<IntentPatternSet> {
    vec![
        set(
            Intent::GetLowStock,
            &[
                r"(?:show|view|list|get|find|display)\s+(?:me\s+)?(?:the\s+)?(?:low|out\s+of)\s+stock\s+(?:items|products)",
                r"(?:which|what)\s+(?:products|items)\s+(?:are\s+)?(?:running|getting)\s+low",
                r"(?:products|items)\s+(?:running|getting)\s+low",
                r"low\s+stock\s+(?:items|products|alert)",
                r"(?:items|products)\s+(?:with\s+)?low\s+stock",
                r"(?:show|view|list|get|find|display)\s+(?:me\s+)?(?:the\s+)?(?:items|products)\s+(?:with\s+)?(?:stock\s+)?(?:below|less\s+than|under)\s+\d+",
            ],
        ),
        set(
            Intent::AddProduct,
            &[
                r"add\s+(?:a\s+)?(?:new\s+)?product\s+\S+",
                r"(?:create|register)\s+(?:a\s+)?(?:new\s+)?product\b",
                r"i\s+want\s+to\s+add\s+(?:a\s+)?(?:new\s+)?product",
                r"add\s+(?:a\s+)?(?:new\s+)?(?:product|item)\s+called",
            ],
        ),
        set(
            Intent::EditStock,
            &[
                r"(?:update|change|modify|edit|set)\s+(?:the\s+)?(?:stock|inventory|quantity)\s+(?:of\s+|for\s+)?[\w\s]+\s+(?:to|as)\s+-?\d+",
                r"(?:make|set)\s+[\w\s]+\s+(?:stock|inventory|quantity)\s+(?:to|as)\s+-?\d+",
                r"update\s+[\w\s]+\s+stock\s+to\s+-?\d+",
                r"(?:update|change)\s+[\w\s]+\s+(?:to|as)\s+-?\d+",
                r"[\w\s]+\s+(?:stock|inventory|quantity)\s+(?:update|change|modify|edit|set)",
                r"(?:change|update)\s+(?:the\s+)?quantity",
                r"stock\s+(?:update|change)",
            ],
        ),
        set(
            Intent::GetReport,
            &[
                r"(?:send|get|show|view|display)\s+(?:me\s+)?(?:the\s+)?(?:sales?\s+)?report",
                r"(?:sales?\s+)?report\s+(?:for|from|between)\s+\S+",
                r"(?:yesterday|today|this\s+week|this\s+month)(?:'s)?\s+(?:sales?\s+)?report",
                r"sales?\s+report",
            ],
        ),
        set(
            Intent::GetOrders,
            &[
                r"(?:show|list|view|get)\s+(?:me\s+)?(?:my\s+)?(?:all\s+)?(?:recent\s+)?orders",
                r"get\s+(?:today'?s?|yesterday'?s?)\s+orders",
                r"orders?\s+(?:from|between)\s+\S+",
                r"order\s+history",
                r"customer\s+orders",
                r"recent\s+orders",
            ],
        ),
        set(
            Intent::SearchProduct,
            &[
                r"(?:search|look)\s+for\s+\S+",
                r"do\s+(?:you|we|i)\s+have\s+\S+",
                r"is\s+[\w\s]+\s+(?:in\s+stock|available)",
                r"check\s+(?:if|whether)\s+[\w\s]+\s+(?:is|are)\s+(?:in\s+stock|available)",
                r"(?:find|locate)\s+\S+",
            ],
        ),
        set(
            Intent::GetInventory,
            &[
                r"(?:show|view|list|display)\s+(?:me\s+)?(?:all\s+)?(?:my\s+)?(?:products|inventory|items)\b",
                r"(?:show|view|get)\s+today'?s?\s+(?:inventory|stock)",
                r"(?:show|view)\s+me\s+[\w\s]+\s+inventory",
                r"what\s+(?:products|items)\s+do\s+i\s+have",
                r"inventory\s+status",
                r"current\s*[-.]?\s*(?:stock|स्टॉक)",
            ],
        ),
        set(
            Intent::GetTopProducts,
            &[
                r"(?:show|get|view|display)\s+(?:me\s+)?(?:the\s+)?top\s+(?:\d+\s+)?(?:selling\s+)?products",
                r"top\s+(?:\d+\s+)?(?:selling\s+)?products",
                r"best\s+sell(?:ing|er)s?",
            ],
        ),
        set(
            Intent::GetCustomerData,
            &[
                r"(?:show|get)\s+(?:me\s+)?(?:the\s+)?customer\s+(?:data|details|insights|information)",
                r"(?:show|list|display)\s+(?:my\s+)?(?:top\s+)?(?:\d+\s+)?customers",
                r"who\s+(?:are|were)\s+(?:my\s+)?(?:top\s+)?(?:\d+\s+)?customers",
            ],
        ),
    ]
}

/// Built-in Hindi pattern table
///
/// Latin loanwords ("stock", "report", "orders", "sale") appear as
/// alternatives because code-switched messages keep them untransliterated.
fn builtin_hindi() -> Vec<IntentPatternSet> {
    vec![
        set(
            Intent::GetLowStock,
            &[
                r"(?:कम|सीमित)\s+(?:स्टॉक|इन्वेंटरी|stock)",
                r"कम\s+(?:स्टॉक|stock)\s+वाले",
                r"\d+\s+से\s+(?:कम|नीचे)\s+(?:स्टॉक|stock)",
                r"(?:स्टॉक|stock)\s+कम\s+है",
                r"कम\s+मात्रा\s+वाले",
                r"(?:रीस्टॉक|रीऑर्डर)\s+करने",
            ],
        ),
        set(
            Intent::AddProduct,
            &[
                r"(?:नया|नई|एक)\s+(?:प्रोडक्ट|प्रॉडक्ट|आइटम|सामान|product)\b",
                r"(?:प्रोडक्ट|product)\s+[\w\s]+\s+(?:जोड़ो|जोड़ें|जोड़ना)",
                r"(?:प्रोडक्ट|आइटम|सामान)\s+(?:जोड़ो|जोड़ें|जोड़ना\s+है)",
                r"ऐड\s+(?:new\s+)?(?:product|प्रोडक्ट)",
                r"(?:इन्वेंटरी|स्टॉक)\s+में\s+(?:नया|एक)\s+(?:प्रोडक्ट|आइटम|सामान)",
                r"\d+\s+\S+\s+जोड़ो",
            ],
        ),
        set(
            Intent::EditStock,
            &[
                r"[\w\s]+\s+(?:का|की|के)\s+(?:स्टॉक|मात्रा|इन्वेंटरी|stock)\s+-?\d+\s+(?:करो|करें|कर)",
                r"[\w\s]+\s+(?:का|की|के)\s+(?:स्टॉक|stock)\s+(?:अपडेट|update|बदलो|बदलें)",
                r"[\w\s]+\s+(?:स्टॉक|stock)\s+(?:अपडेट|update)\s*(?:करो|करें)?\s*(?:to\s+)?-?\d+",
                r"[\w\s]+\s+-?\d+\s+(?:स्टॉक|stock)\s+(?:करो|करें|अपडेट|बनाओ|बनाएं)",
                r"(?:स्टॉक|stock)\s+(?:अपडेट|update|बदलो|बदलें)\s+[\w\s]+\s+-?\d+",
                r"(?:स्टॉक|मात्रा|इन्वेंटरी)\s+(?:अपडेट|बदलो|बदलें|अपडेट\s+करो|अपडेट\s+करें)",
                r"मुझे\s+\S+\s+का\s+स्टॉक\s+-?\d+\s+करना\s+है",
            ],
        ),
        set(
            Intent::GetReport,
            &[
                r"(?:बिक्री|सेल्स|सेल|sales?)\s+(?:रिपोर्ट|report)",
                r"(?:रिपोर्ट|report)\s+(?:दिखाओ|दिखाएं|भेजो|भेजें|दो|बताओ)",
                r"(?:आज|कल)\s+(?:की|का|के)\s+(?:बिक्री\s+|सेल्स\s+)?(?:रिपोर्ट|report)",
                r"(?:इस|पिछले)\s+(?:हफ्ते|महीने|माह|सप्ताह)\s+(?:की|का|के)\s+(?:बिक्री\s+|सेल्स\s+)?(?:रिपोर्ट|report)",
                r"(?:कितना|कितनी)\s+(?:बिक्री|सेल)",
                r"[\w\s]+\s+से\s+[\w\s]+\s+तक\s+(?:की\s+)?(?:बिक्री\s+|सेल्स\s+)?(?:रिपोर्ट|report)",
                r"(?:रिपोर्ट|report)\s+[\w\s]+\s+से\s+[\w\s]+\s+तक",
                r"(?:बिक्री|सेल्स|सेल|sales?|sale)\s+(?:बताओ|दिखाओ)",
            ],
        ),
        set(
            Intent::GetOrders,
            &[
                r"(?:ऑर्डर|आर्डर|ऑर्डर्स|orders?)\s+(?:दिखाओ|दिखाएं|बताओ|दो|देखना\s+है)",
                r"(?:मेरे|नए|सभी|हाल\s+के|रीसेंट)\s+(?:ऑर्डर|आर्डर|orders?)",
                r"(?:आज|कल)\s+के\s+(?:ऑर्डर|आर्डर|orders?)",
                r"(?:कौन|क्या)\s+(?:ऑर्डर|आर्डर)\s+(?:हैं|है|आए\s+हैं)",
                r"(?:ऑर्डर|आर्डर)\s+लिस्ट",
            ],
        ),
        set(
            Intent::SearchProduct,
            &[
                r"[\w\s]+\s+(?:सर्च|खोज|ढूंढ)\s*(?:करो|करें)?",
                r"[\w\s]+\s+(?:को\s+)?(?:इन्वेंटरी\s+में\s+)?(?:खोजो|खोजें|ढूंढो|देखो|देखें)",
                r"(?:खोजो|खोजें|सर्च\s+करो|सर्च\s+करें|ढूंढो)\s+[\w\s]+",
                r"क्या\s+[\w\s]+\s+(?:उपलब्ध|स्टॉक\s+में|मिलेगा)",
                r"[\w\s]+\s+(?:उपलब्ध|स्टॉक\s+में)\s+(?:है|हैं)",
                r"क्या\s+(?:आपके|हमारे|मेरे)\s+पास\s+[\w\s]+\s+(?:है|हैं)",
                r"[\w\s]+\s+के\s+बारे\s+में\s+(?:जानकारी|विवरण|information)",
            ],
        ),
        set(
            Intent::GetInventory,
            &[
                r"(?:मेरे|मेरा|सभी|सारे|पूरा|पूरी)\s+(?:प्रोडक्ट|आइटम|सामान|इन्वेंटरी|स्टॉक|inventory|products)",
                r"(?:प्रोडक्ट|आइटम|सामान|इन्वेंटरी|inventory)\s+(?:दिखाओ|दिखाएं|देखना\s+है)",
                r"(?:कौन|क्या)\s+(?:प्रोडक्ट|आइटम|सामान)\s+(?:हैं|है|उपलब्ध\s+हैं)",
                r"प्रोडक्ट\s+लिस्ट",
                r"(?:आज\s+का\s+)?(?:स्टॉक|इन्वेंटरी)\s+(?:दिखाओ|दिखाएं)",
            ],
        ),
        set(
            Intent::GetTopProducts,
            &[
                r"(?:टॉप|बेस्ट|top)\s+(?:\d+\s+)?(?:प्रोडक्ट|प्रोडक्ट्स|आइटम|सामान|products?)",
                r"सबसे\s+(?:ज्यादा|अधिक)\s+बिकने\s+वाले",
                r"सबसे\s+लोकप्रिय",
            ],
        ),
        set(
            Intent::GetCustomerData,
            &[
                r"(?:कस्टमर|ग्राहक|customer)\s*(?:का|की|के)?\s*(?:डाटा|डेटा|जानकारी|data)",
                r"ग्राहकों\s+की\s+जानकारी",
                r"(?:टॉप|बेस्ट)\s+(?:\d+\s+)?(?:कस्टमर|ग्राहक|customers?)",
                r"(?:कौन|कौनसे)\s+से?\s*(?:कस्टमर|ग्राहक)",
            ],
        ),
    ]
}
