//! Hindi language utilities
//!
//! Shared helpers for Devanagari text: digit folding and number words.

/// The Devanagari Unicode block (U+0900 - U+097F)
pub fn is_devanagari(c: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&c)
}

/// Check if a character is a Devanagari numeral (०-९)
pub fn is_devanagari_digit(c: char) -> bool {
    ('०'..='९').contains(&c)
}

/// Convert Devanagari numerals to ASCII digits, leaving everything else
/// untouched
pub fn devanagari_digits_to_ascii(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '०' => '0',
            '१' => '1',
            '२' => '2',
            '३' => '3',
            '४' => '4',
            '५' => '5',
            '६' => '6',
            '७' => '7',
            '८' => '8',
            '९' => '9',
            _ => c,
        })
        .collect()
}

/// Convert a Hindi number word (Devanagari script) to its numeric value
///
/// Covers the small counts sellers actually speak ("टॉप पांच प्रोडक्ट");
/// larger quantities arrive as digits.
pub fn word_to_number(word: &str) -> Option<i64> {
    match word {
        "एक" => Some(1),
        "दो" => Some(2),
        "तीन" => Some(3),
        "चार" => Some(4),
        "पांच" | "पाँच" => Some(5),
        "छह" | "छः" | "छे" => Some(6),
        "सात" => Some(7),
        "आठ" => Some(8),
        "नौ" => Some(9),
        "दस" => Some(10),
        "बीस" => Some(20),
        "पच्चीस" => Some(25),
        "तीस" => Some(30),
        "चालीस" => Some(40),
        "पचास" => Some(50),
        "साठ" => Some(60),
        "सत्तर" => Some(70),
        "अस्सी" => Some(80),
        "नब्बे" => Some(90),
        "सौ" => Some(100),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_devanagari_detection() {
        assert!(is_devanagari('च'));
        assert!(is_devanagari('।'));
        assert!(!is_devanagari('a'));
        assert!(!is_devanagari('5'));
    }

    #[test]
    fn test_digit_folding() {
        assert_eq!(devanagari_digits_to_ascii("५०"), "50");
        assert_eq!(devanagari_digits_to_ascii("१२३४५"), "12345");
        assert_eq!(
            devanagari_digits_to_ascii("mixed १२ and 34"),
            "mixed 12 and 34"
        );
        assert_eq!(devanagari_digits_to_ascii("चावल"), "चावल");
    }

    #[test]
    fn test_is_devanagari_digit() {
        assert!(is_devanagari_digit('५'));
        assert!(!is_devanagari_digit('5'));
        assert!(!is_devanagari_digit('च'));
    }

    #[test]
    fn test_number_words() {
        assert_eq!(word_to_number("पांच"), Some(5));
        assert_eq!(word_to_number("पाँच"), Some(5));
        assert_eq!(word_to_number("छः"), Some(6));
        assert_eq!(word_to_number("दस"), Some(10));
        assert_eq!(word_to_number("सौ"), Some(100));
        assert_eq!(word_to_number("unknown"), None);
    }
}
