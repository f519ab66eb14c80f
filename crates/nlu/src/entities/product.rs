//! Product detail extraction for add-product commands
//!
//! Accepts the full range of formats sellers actually type: verb-first
//! labeled attributes in either order ("add product rice price 50 stock
//! 20"), comma or pipe separated lists ("Aata, ₹55, 10 kg"), compact
//! unit-suffixed forms ("Rice 50rs 20qty"), spelled-out English ("called
//! wheat for 45 rupees with 30 pieces") and Hindi keyword-labeled
//! variants ("नया प्रोडक्ट चावल मूल्य 50 स्टॉक 20"). Currency and unit
//! tokens are stripped from the values.
//!
//! Extraction is best-effort: whatever was found is returned and the
//! envelope reports absent required fields as `missing_entity`.

use once_cell::sync::Lazy;
use regex::Regex;

use dukaan_config::Lexicon;
use dukaan_core::EntitySet;

// Labeled and symbol-adjacent price forms
static PRICE_LABELED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:price|rate|मूल्य|कीमत|दाम|प्राइस|रेट)\s*:?\s*(\d+)").unwrap()
});
static PRICE_SYMBOL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:₹|\brs\.?|\brupees?|रुपये|रुपए)\s*(\d+)").unwrap());
static PRICE_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*(?:rs\b|rupees?\b|₹|रुपये|रुपए)").unwrap());

// Labeled and unit-suffixed stock forms
static STOCK_LABELED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:stock|qty|quantity|स्टॉक|मात्रा)\s*:?\s*(\d+)").unwrap()
});
static STOCK_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)\s*(?:qty|units?|pcs|pieces?|पीस|इकाई|नग|किलो|kgs?\b|grams?\b|gms?\b|ग्राम)")
        .unwrap()
});

// Hindi "20 नमक जोड़ो ₹30 में" (stock, name, price)
static HI_COUNT_FIRST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s+(\S+)\s+(?:जोड़ो|जोड़ें)\s+₹\s*(\d+)").unwrap());

// "called wheat for 45 rupees with 30 pieces"
static CALLED: Lazy<Regex> = Lazy::new(|| Regex::new(r"called\s+(\w+)").unwrap());

// Name after an add/product keyword, terminated by the first attribute
// keyword, currency token or digit
static NAME_AFTER_KEYWORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:add|create|register|ऐड|एड|नया|नई|एक)\s+(?:a\s+)?(?:new\s+)?(?:product|item|प्रोडक्ट|प्रॉडक्ट|आइटम|सामान)\s+([\w\s]+?)\s*(?:,|price|stock|qty|quantity|rate|मूल्य|कीमत|दाम|प्राइस|स्टॉक|मात्रा|₹|rs\b|rupees\b|रुपये|रुपए|at\b|@|\d|$)",
    )
    .unwrap()
});
static NAME_BEFORE_JODO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:product|प्रोडक्ट|प्रॉडक्ट)\s+([\w\s]+?)\s+(?:जोड़ो|जोड़ें|add\s+करो)").unwrap()
});

// Leading command scaffolding stripped from the first comma-part
static PART_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:add|create|register|ऐड|एड|नया|नई|एक)?\s*(?:a\s+)?(?:new\s+)?(?:product|item|प्रोडक्ट|प्रॉडक्ट|आइटम|सामान)?\s*",
    )
    .unwrap()
});

static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+\b").unwrap());
static BARE_NUMBER_PART: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\d+\s*$").unwrap());

/// Extract name/price/stock from a normalized add-product command
pub fn extract_add_product(text: &str, lexicon: &Lexicon) -> EntitySet {
    let (name, price, stock) = if text.contains(',') {
        extract_delimited(text)
    } else {
        extract_inline(text, lexicon)
    };

    EntitySet::AddProduct {
        name: name
            .map(|n| n.trim().to_lowercase())
            .filter(|n| !n.is_empty()),
        price,
        stock,
    }
}

/// Comma/pipe separated: first part names the product, the rest carry
/// the attributes in any order
fn extract_delimited(text: &str) -> (Option<String>, Option<i64>, Option<i64>) {
    let mut parts = text.split(',').map(str::trim);
    let name = parts.next().map(|first| {
        let stripped = PART_PREFIX.replace(first, "").trim().to_string();
        if stripped.is_empty() {
            first.to_string()
        } else {
            stripped
        }
    });

    let mut price = None;
    let mut stock = None;
    for part in parts {
        if part.is_empty() {
            continue;
        }
        if price.is_none() {
            if let Some(value) = capture_number(&PRICE_LABELED, part)
                .or_else(|| capture_number(&PRICE_SYMBOL, part))
                .or_else(|| capture_number(&PRICE_SUFFIX, part))
            {
                price = Some(value);
                continue;
            }
        }
        if stock.is_none() {
            if let Some(value) = capture_number(&STOCK_LABELED, part)
                .or_else(|| capture_number(&STOCK_SUFFIX, part))
            {
                stock = Some(value);
                continue;
            }
        }
        // Unlabeled number: price fills first, then stock
        if BARE_NUMBER_PART.is_match(part) {
            if let Ok(value) = part.trim().parse::<i64>() {
                if price.is_none() {
                    price = Some(value);
                } else if stock.is_none() {
                    stock = Some(value);
                }
            }
        }
    }

    (name, price, stock)
}

/// Space-separated formats
fn extract_inline(text: &str, lexicon: &Lexicon) -> (Option<String>, Option<i64>, Option<i64>) {
    if let Some(captures) = HI_COUNT_FIRST.captures(text) {
        return (
            Some(captures[2].to_string()),
            captures[3].parse().ok(),
            captures[1].parse().ok(),
        );
    }

    let mut name = CALLED
        .captures(text)
        .map(|c| c[1].to_string())
        .or_else(|| NAME_AFTER_KEYWORD.captures(text).map(|c| c[1].to_string()))
        .or_else(|| NAME_BEFORE_JODO.captures(text).map(|c| c[1].to_string()));

    let mut price = capture_number(&PRICE_LABELED, text)
        .or_else(|| capture_number(&PRICE_SYMBOL, text))
        .or_else(|| capture_number(&PRICE_SUFFIX, text));
    let mut stock =
        capture_number(&STOCK_LABELED, text).or_else(|| capture_number(&STOCK_SUFFIX, text));

    // Unlabeled numbers fill remaining slots in order: price, then stock
    if price.is_none() || stock.is_none() {
        let mut leftovers: Vec<i64> = NUMBER
            .find_iter(text)
            .filter_map(|m| m.as_str().parse().ok())
            .filter(|n| Some(*n) != price && Some(*n) != stock)
            .collect();
        if price.is_none() && !leftovers.is_empty() {
            price = Some(leftovers.remove(0));
        }
        if stock.is_none() && !leftovers.is_empty() {
            stock = Some(leftovers.remove(0));
        }
    }

    // Stop-word fallback: first run of non-numeric content words
    if name.is_none() {
        name = fallback_name(text, lexicon);
    }

    (name, price, stock)
}

/// First contiguous run of tokens that are neither numbers nor command
/// scaffolding
pub(crate) fn fallback_name(text: &str, lexicon: &Lexicon) -> Option<String> {
    let mut run: Vec<&str> = Vec::new();
    for token in text.split_whitespace() {
        let word = token.trim_matches(|c: char| !c.is_alphanumeric());
        if word.is_empty() {
            continue;
        }
        let is_content = !lexicon.is_stop_word(word) && word.parse::<i64>().is_err();
        if is_content {
            run.push(word);
        } else if !run.is_empty() {
            break;
        }
    }
    if run.is_empty() {
        None
    } else {
        Some(run.join(" "))
    }
}

fn capture_number(pattern: &Regex, text: &str) -> Option<i64> {
    pattern
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::default()
    }

    fn parts(entities: EntitySet) -> (Option<String>, Option<i64>, Option<i64>) {
        match entities {
            EntitySet::AddProduct { name, price, stock } => (name, price, stock),
            other => panic!("expected AddProduct, got {other:?}"),
        }
    }

    #[test]
    fn test_compact_unit_suffixes() {
        let (name, price, stock) =
            parts(extract_add_product("add new product rice 50rs 20qty", &lexicon()));
        assert_eq!(name.as_deref(), Some("rice"));
        assert_eq!(price, Some(50));
        assert_eq!(stock, Some(20));
    }

    #[test]
    fn test_labeled_attributes() {
        let (name, price, stock) = parts(extract_add_product(
            "add product red shirt price 500 stock 10",
            &lexicon(),
        ));
        assert_eq!(name.as_deref(), Some("red shirt"));
        assert_eq!(price, Some(500));
        assert_eq!(stock, Some(10));
    }

    #[test]
    fn test_reversed_attribute_order() {
        let (name, price, stock) = parts(extract_add_product(
            "add product red shirt stock 10 price 500",
            &lexicon(),
        ));
        assert_eq!(name.as_deref(), Some("red shirt"));
        assert_eq!(price, Some(500));
        assert_eq!(stock, Some(10));
    }

    #[test]
    fn test_comma_separated_with_currency() {
        let (name, price, stock) =
            parts(extract_add_product("add product आटा , ₹55 , 10 किलो", &lexicon()));
        assert_eq!(name.as_deref(), Some("आटा"));
        assert_eq!(price, Some(55));
        assert_eq!(stock, Some(10));
    }

    #[test]
    fn test_comma_separated_bare_numbers() {
        let (name, price, stock) =
            parts(extract_add_product("add product soap , 30 , 12", &lexicon()));
        assert_eq!(name.as_deref(), Some("soap"));
        assert_eq!(price, Some(30));
        assert_eq!(stock, Some(12));
    }

    #[test]
    fn test_plain_two_numbers() {
        let (name, price, stock) =
            parts(extract_add_product("add product sugar 40 25", &lexicon()));
        assert_eq!(name.as_deref(), Some("sugar"));
        assert_eq!(price, Some(40));
        assert_eq!(stock, Some(25));
    }

    #[test]
    fn test_called_form() {
        let (name, price, stock) = parts(extract_add_product(
            "i want to add a new product called wheat for 45 rupees with 30 pieces",
            &lexicon(),
        ));
        assert_eq!(name.as_deref(), Some("wheat"));
        assert_eq!(price, Some(45));
        assert_eq!(stock, Some(30));
    }

    #[test]
    fn test_hindi_labeled_any_order() {
        let (name, price, stock) = parts(extract_add_product(
            "नया प्रोडक्ट चावल मूल्य 50 स्टॉक 20",
            &lexicon(),
        ));
        assert_eq!(name.as_deref(), Some("चावल"));
        assert_eq!(price, Some(50));
        assert_eq!(stock, Some(20));

        let (name, price, stock) = parts(extract_add_product(
            "नया प्रोडक्ट चावल स्टॉक 20 मूल्य 50",
            &lexicon(),
        ));
        assert_eq!(name.as_deref(), Some("चावल"));
        assert_eq!(price, Some(50));
        assert_eq!(stock, Some(20));
    }

    #[test]
    fn test_hindi_count_first_form() {
        let (name, price, stock) =
            parts(extract_add_product("20 नमक जोड़ो ₹30 में", &lexicon()));
        assert_eq!(name.as_deref(), Some("नमक"));
        assert_eq!(price, Some(30));
        assert_eq!(stock, Some(20));
    }

    #[test]
    fn test_missing_attributes_left_absent() {
        let (name, price, stock) =
            parts(extract_add_product("add new product biscuits", &lexicon()));
        assert_eq!(name.as_deref(), Some("biscuits"));
        assert_eq!(price, None);
        assert_eq!(stock, None);
    }

    #[test]
    fn test_price_only() {
        let (name, price, stock) =
            parts(extract_add_product("add product tea price 80", &lexicon()));
        assert_eq!(name.as_deref(), Some("tea"));
        assert_eq!(price, Some(80));
        assert_eq!(stock, None);
    }
}
