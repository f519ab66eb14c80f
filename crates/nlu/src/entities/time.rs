//! Time-window extraction for report-style commands
//!
//! Resolves either a named bucket ("last week", "पिछले महीने", "aaj") or a
//! custom absolute range ("1 June to 20 June", "1 जून से 20 जून तक",
//! "01/06 - 20/06"). Custom endpoints accept day+month with optional
//! ordinal suffix and year, or numeric DD/MM[/YYYY]; Hindi and
//! transliterated month names resolve through the lexicon's month lookup.
//! The year defaults to the reference date's year when omitted.
//!
//! Extraction never fails: a range marker with unparseable endpoints
//! falls back to the `Today` bucket, and a message with no time
//! expression at all yields `None` so the caller can apply its default.

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use dukaan_config::Lexicon;
use dukaan_core::{TimeBucket, TimeWindow};

use crate::error::{NluError, Result};
use crate::hindi;

/// Compiled time-expression matcher
pub struct TimeExtractor {
    last_n: Vec<(Regex, u32)>,
    ago: Vec<(Regex, u32)>,
    buckets: Vec<(Regex, TimeBucket)>,
    range_patterns: Vec<Regex>,
    numeric_date: Regex,
    day_month: Regex,
    month_day: Regex,
    date_material: Regex,
    limit_digits: Regex,
    limit_count: Regex,
    limit_word: Regex,
    month_lookup: MonthLookup,
}

/// Month tokens resolved through the lexicon (English, Hindi,
/// transliterations)
struct MonthLookup {
    entries: Vec<(String, u32)>,
}

impl MonthLookup {
    fn number(&self, token: &str) -> Option<u32> {
        let token = token.trim().to_lowercase();
        self.entries
            .iter()
            .find(|(name, _)| *name == token)
            .map(|(_, n)| *n)
    }
}

impl TimeExtractor {
    pub fn new(lexicon: &Lexicon) -> Result<Self> {
        let mut month_names: Vec<(String, u32)> = lexicon
            .months
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect();
        // Longest first so "जन" never shadows "जनवरी"
        month_names.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then(a.0.cmp(&b.0)));

        let month_alt = month_names
            .iter()
            .map(|(name, _)| regex::escape(name))
            .collect::<Vec<_>>()
            .join("|");

        let compile = |pattern: &str| -> Result<Regex> {
            Regex::new(pattern).map_err(|source| NluError::Pattern {
                intent: "time_window",
                source,
            })
        };

        let last_prefix = r"(?:last|previous|past|पिछले|पिछला|पिछली|गत|बीते|लास्ट)";
        let this_prefix = r"(?:this|current|is|इस|वर्तमान|चालू|मौजूदा)";
        let day_words = r"(?:days?|din|दिन|दिनों|दिवस)";
        let week_words = r"(?:weeks?|hafte|saptah|हफ्ते|हफ़्ते|हफ्ता|सप्ताह|वीक)";
        let month_words = r"(?:months?|mahine|महीने|महीना|माह|मंथ)";
        let year_words = r"(?:years?|saal|साल|वर्ष|इयर)";

        let last_n = vec![
            (
                compile(&format!(r"\b{last_prefix}\s+(\d+)\s+{day_words}\b"))?,
                1,
            ),
            (
                compile(&format!(r"\b{last_prefix}\s+(\d+)\s+{week_words}\b"))?,
                7,
            ),
            (
                compile(&format!(r"\b{last_prefix}\s+(\d+)\s+{month_words}\b"))?,
                30,
            ),
        ];

        let ago_suffix = r"(?:ago|pehle|पहले|पूर्व)";
        let ago = vec![
            (compile(&format!(r"\b(\d+)\s+{day_words}\s+{ago_suffix}"))?, 1),
            (compile(&format!(r"(\d+)\s+{week_words}\s+{ago_suffix}"))?, 7),
            (
                compile(&format!(r"(\d+)\s+{month_words}\s+{ago_suffix}"))?,
                30,
            ),
        ];

        let buckets = vec![
            (
                compile(&format!(r"\b{last_prefix}\s+{week_words}\b"))?,
                TimeBucket::LastWeek,
            ),
            (
                compile(&format!(r"\b{this_prefix}\s+{week_words}\b"))?,
                TimeBucket::ThisWeek,
            ),
            (
                compile(&format!(r"\b{last_prefix}\s+{month_words}\b"))?,
                TimeBucket::LastMonth,
            ),
            (
                compile(&format!(r"\b{this_prefix}\s+{month_words}\b"))?,
                TimeBucket::ThisMonth,
            ),
            (
                compile(&format!(r"\b{last_prefix}\s+{year_words}\b"))?,
                TimeBucket::LastYear,
            ),
            (
                compile(&format!(r"\b{this_prefix}\s+{year_words}\b"))?,
                TimeBucket::ThisYear,
            ),
            (
                compile(r"\b(?:yesterday|kal|कल|बीता\s+दिन|पिछला\s+दिन)\b")?,
                TimeBucket::Yesterday,
            ),
            (
                compile(r"\b(?:today|aaj|आज|वर्तमान\s+दिन)\b")?,
                TimeBucket::Today,
            ),
            (
                compile(r"\b(?:all|everything|entire|सभी|सब|पूरा|सारा|संपूर्ण|सम्पूर्ण)\b")?,
                TimeBucket::All,
            ),
        ];

        let range_patterns = vec![
            compile(r"(?:from|between)\s+(.+?)\s+(?:to|and|till|until|upto)\s+(.+)$")?,
            compile(r"(.+?)\s+से\s+(.+?)\s+तक")?,
            compile(r"(.+?)\s+से\s+(.+)$")?,
            compile(r"(.+?)\s+to\s+(.+)$")?,
            compile(r"(.+?)\s+-\s+(.+)$")?,
        ];

        Ok(Self {
            last_n,
            ago,
            buckets,
            range_patterns,
            numeric_date: compile(r"(\d{1,4})\s*[/.\-]\s*(\d{1,2})(?:\s*[/.\-]\s*(\d{2,4}))?")?,
            day_month: compile(&format!(
                r"(\d{{1,2}})(?:st|nd|rd|th)?\s+({month_alt})(?:\s+(\d{{4}}))?"
            ))?,
            month_day: compile(&format!(
                r"({month_alt})\s+(\d{{1,2}})(?:st|nd|rd|th)?(?:,?\s+(\d{{4}}))?"
            ))?,
            date_material: compile(&format!(r"\d|{month_alt}"))?,
            limit_digits: compile(r"(?:top|टॉप|बेस्ट|best)\s+(\d+)")?,
            limit_count: compile(r"(\d+)\s+(?:customers?|कस्टमर|ग्राहक)")?,
            limit_word: compile(r"(?:top|टॉप|बेस्ट|best)\s+([\x{0900}-\x{097F}]+)")?,
            month_lookup: MonthLookup {
                entries: month_names,
            },
        })
    }

    /// Extract a time window from normalized text, if one is present
    pub fn extract(&self, text: &str, today: NaiveDate) -> Option<TimeWindow> {
        for (pattern, multiplier) in self.last_n.iter().chain(self.ago.iter()) {
            if let Some(captures) = pattern.captures(text) {
                if let Ok(n) = captures[1].parse::<u32>() {
                    return Some(TimeWindow::bucket(TimeBucket::LastDays(n * multiplier)));
                }
            }
        }

        for (pattern, bucket) in &self.buckets {
            if pattern.is_match(text) {
                return Some(TimeWindow::bucket(*bucket));
            }
        }

        if self.date_material.is_match(text) {
            let mut saw_range_marker = false;
            for pattern in &self.range_patterns {
                if let Some(captures) = pattern.captures(text) {
                    saw_range_marker = true;
                    let start = self.parse_date(&captures[1], today);
                    let end = self.parse_date(&captures[2], today);
                    if let (Some(mut start), Some(mut end)) = (start, end) {
                        if start > end {
                            // Reversed endpoints: treat as the intended
                            // window rather than rejecting
                            std::mem::swap(&mut start, &mut end);
                        }
                        return Some(TimeWindow::range(start, end));
                    }
                }
            }
            if saw_range_marker {
                tracing::debug!(text, "unparseable custom range, defaulting to today");
                return Some(TimeWindow::bucket(TimeBucket::Today));
            }
        }

        None
    }

    /// Extract a top-N limit ("top 5", "टॉप ३", "टॉप पांच")
    pub fn extract_limit(&self, text: &str) -> Option<u32> {
        if let Some(captures) = self.limit_digits.captures(text) {
            return captures[1].parse().ok();
        }
        if let Some(captures) = self.limit_count.captures(text) {
            return captures[1].parse().ok();
        }
        if let Some(captures) = self.limit_word.captures(text) {
            return hindi::word_to_number(&captures[1]).and_then(|n| u32::try_from(n).ok());
        }
        None
    }

    /// Parse one range endpoint into a date
    fn parse_date(&self, text: &str, today: NaiveDate) -> Option<NaiveDate> {
        let text = text.trim();
        let current_year = today.year();

        if let Some(captures) = self.numeric_date.captures(text) {
            let first = &captures[1];
            let second: u32 = captures[2].parse().ok()?;
            let third = captures.get(3).map(|m| m.as_str());

            if first.len() == 4 {
                // YYYY/MM/DD needs all three parts
                let year: i32 = first.parse().ok()?;
                let day: u32 = third?.parse().ok()?;
                return NaiveDate::from_ymd_opt(year, second, day);
            }

            let day: u32 = first.parse().ok()?;
            let year = match third {
                Some(y) if y.len() == 2 => {
                    let y: i32 = y.parse().ok()?;
                    if y < 50 {
                        2000 + y
                    } else {
                        1900 + y
                    }
                }
                Some(y) => y.parse().ok()?,
                None => current_year,
            };
            // DD/MM first; swap for MM/DD input if that is the only
            // reading that makes a valid date
            return NaiveDate::from_ymd_opt(year, second, day)
                .or_else(|| NaiveDate::from_ymd_opt(year, day, second));
        }

        if let Some(captures) = self.day_month.captures(text) {
            let day: u32 = captures[1].parse().ok()?;
            let month = self.month_lookup.number(&captures[2])?;
            let year = captures
                .get(3)
                .and_then(|m| m.as_str().parse().ok())
                .unwrap_or(current_year);
            return NaiveDate::from_ymd_opt(year, month, day);
        }

        if let Some(captures) = self.month_day.captures(text) {
            let month = self.month_lookup.number(&captures[1])?;
            let day: u32 = captures[2].parse().ok()?;
            let year = captures
                .get(3)
                .and_then(|m| m.as_str().parse().ok())
                .unwrap_or(current_year);
            return NaiveDate::from_ymd_opt(year, month, day);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> TimeExtractor {
        TimeExtractor::new(&Lexicon::default()).unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        day(2025, 6, 18)
    }

    #[test]
    fn test_english_buckets() {
        let extractor = extractor();
        let cases = [
            ("show me orders from today", TimeBucket::Today),
            ("get yesterday's orders", TimeBucket::Yesterday),
            ("show this week's report", TimeBucket::ThisWeek),
            ("get orders from last week", TimeBucket::LastWeek),
            ("show me this month's sales", TimeBucket::ThisMonth),
            ("get report for last month", TimeBucket::LastMonth),
            ("report for this year", TimeBucket::ThisYear),
            ("last year's report", TimeBucket::LastYear),
            ("show all orders", TimeBucket::All),
        ];
        for (text, expected) in cases {
            assert_eq!(
                extractor.extract(text, today()),
                Some(TimeWindow::bucket(expected)),
                "for {text:?}"
            );
        }
    }

    #[test]
    fn test_hindi_buckets() {
        let extractor = extractor();
        let cases = [
            ("आज के ऑर्डर दिखाओ", TimeBucket::Today),
            ("कल के ऑर्डर दिखाओ", TimeBucket::Yesterday),
            ("इस हफ्ते की रिपोर्ट दिखाओ", TimeBucket::ThisWeek),
            ("पिछले हफ्ते के ऑर्डर दिखाओ", TimeBucket::LastWeek),
            ("इस महीने की बिक्री दिखाओ", TimeBucket::ThisMonth),
            ("पिछले महीने की रिपोर्ट दिखाओ", TimeBucket::LastMonth),
            ("सभी ऑर्डर दिखाओ", TimeBucket::All),
        ];
        for (text, expected) in cases {
            assert_eq!(
                extractor.extract(text, today()),
                Some(TimeWindow::bucket(expected)),
                "for {text:?}"
            );
        }
    }

    #[test]
    fn test_last_n_days() {
        let extractor = extractor();
        assert_eq!(
            extractor.extract("report for last 15 days", today()),
            Some(TimeWindow::bucket(TimeBucket::LastDays(15)))
        );
        assert_eq!(
            extractor.extract("पिछले 3 दिन की रिपोर्ट", today()),
            Some(TimeWindow::bucket(TimeBucket::LastDays(3)))
        );
        // Weeks and months normalize into day windows
        assert_eq!(
            extractor.extract("last 2 weeks report", today()),
            Some(TimeWindow::bucket(TimeBucket::LastDays(14)))
        );
        assert_eq!(
            extractor.extract("3 दिन पहले की रिपोर्ट", today()),
            Some(TimeWindow::bucket(TimeBucket::LastDays(3)))
        );
    }

    #[test]
    fn test_english_custom_range() {
        let window = extractor()
            .extract("get report from 1 june to 20 june", today())
            .unwrap();
        assert_eq!(
            window,
            TimeWindow::range(day(2025, 6, 1), day(2025, 6, 20))
        );
    }

    #[test]
    fn test_hindi_custom_range_matches_english() {
        let extractor = extractor();
        let english = extractor.extract("report from 1 june to 20 june", today());
        let hindi = extractor.extract("1 जून से 20 जून तक की रिपोर्ट", today());
        assert_eq!(english, hindi);
    }

    #[test]
    fn test_numeric_range_with_year() {
        let window = extractor()
            .extract("report from 01/01/2023 to 31/01/2023", today())
            .unwrap();
        assert_eq!(
            window,
            TimeWindow::range(day(2023, 1, 1), day(2023, 1, 31))
        );
    }

    #[test]
    fn test_ordinal_and_mixed_scripts() {
        let window = extractor()
            .extract("show orders from 1st march to 15 मार्च", today())
            .unwrap();
        assert_eq!(
            window,
            TimeWindow::range(day(2025, 3, 1), day(2025, 3, 15))
        );
    }

    #[test]
    fn test_reversed_range_is_swapped() {
        let window = extractor()
            .extract("report from 20 june to 1 june", today())
            .unwrap();
        assert_eq!(
            window,
            TimeWindow::range(day(2025, 6, 1), day(2025, 6, 20))
        );
    }

    #[test]
    fn test_unparseable_range_falls_back_to_today() {
        let window = extractor()
            .extract("report from 99 june to 1 june", today())
            .unwrap();
        assert_eq!(window, TimeWindow::bucket(TimeBucket::Today));
    }

    #[test]
    fn test_no_time_expression() {
        assert_eq!(extractor().extract("show my report", today()), None);
    }

    #[test]
    fn test_limits() {
        let extractor = extractor();
        assert_eq!(extractor.extract_limit("top 10 products"), Some(10));
        assert_eq!(extractor.extract_limit("टॉप 3 प्रोडक्ट दिखाओ"), Some(3));
        assert_eq!(extractor.extract_limit("टॉप पांच प्रोडक्ट"), Some(5));
        assert_eq!(extractor.extract_limit("show top products"), None);
    }

    #[test]
    fn test_invalid_calendar_dates_rejected() {
        let extractor = extractor();
        // 30 February is not a date in any reading
        let window = extractor
            .extract("report from 30/02/2023 to 31/03/2023", today())
            .unwrap();
        assert_eq!(window, TimeWindow::bucket(TimeBucket::Today));
    }
}
