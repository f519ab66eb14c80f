//! Script-ratio language identification
//!
//! Counts Devanagari-block characters against ASCII letters and decides
//! the primary language from the winning ratio. Messages with no
//! recognizable script characters fall through to a general-purpose
//! statistical detector (whatlang) with a fixed low confidence.
//!
//! A message counts as mixed when both scripts clear the configured ratio
//! threshold, or when an otherwise-Latin message contains known
//! transliterated Hindi words ("pichhle hafte ka report dikhao").

use std::sync::Arc;

use unicode_segmentation::UnicodeSegmentation;

use dukaan_config::{EngineSettings, Lexicon};
use dukaan_core::{Language, LanguageDecision, LanguageSegment};

use crate::hindi;

/// Ratio-based language identifier with statistical fallback
pub struct LanguageIdentifier {
    mixed_threshold: f32,
    fallback_confidence: f32,
    lexicon: Arc<Lexicon>,
}

impl LanguageIdentifier {
    pub fn new(settings: &EngineSettings, lexicon: Arc<Lexicon>) -> Self {
        Self {
            mixed_threshold: settings.mixed_ratio_threshold,
            fallback_confidence: settings.language_fallback_confidence,
            lexicon,
        }
    }

    /// Identify the language mixture of one message
    pub fn detect(&self, text: &str) -> LanguageDecision {
        let hindi_chars = text.chars().filter(|c| hindi::is_devanagari(*c)).count();
        let ascii_letters = text.chars().filter(char::is_ascii_alphabetic).count();
        let total = hindi_chars + ascii_letters;

        if total == 0 {
            return self.statistical_fallback(text);
        }

        let hindi_ratio = hindi_chars as f32 / total as f32;
        let english_ratio = ascii_letters as f32 / total as f32;

        let transliterated_hits = text
            .to_lowercase()
            .unicode_words()
            .filter(|w| self.lexicon.is_transliterated_hindi(w))
            .count();

        let is_mixed = (hindi_ratio >= self.mixed_threshold
            && english_ratio >= self.mixed_threshold)
            || (ascii_letters > 0 && transliterated_hits > 0);

        let (primary, confidence) = if hindi_ratio > english_ratio {
            (Language::Hindi, hindi_ratio)
        } else {
            (Language::English, english_ratio)
        };

        let segments = if is_mixed { segment(text) } else { None };

        LanguageDecision {
            primary,
            is_mixed,
            confidence,
            segments,
        }
    }

    /// No recognizable script characters: ask the statistical detector,
    /// defaulting to English
    fn statistical_fallback(&self, text: &str) -> LanguageDecision {
        let language = match whatlang::detect(text) {
            Some(info) if info.lang() == whatlang::Lang::Hin => Language::Hindi,
            _ => Language::English,
        };
        tracing::debug!(language = %language, "statistical language fallback");
        LanguageDecision::single(language, self.fallback_confidence)
    }
}

/// Split a mixed message into ordered same-script runs
///
/// Whitespace extends the current run; any other script switch closes it.
fn segment(text: &str) -> Option<Vec<LanguageSegment>> {
    let mut segments: Vec<LanguageSegment> = Vec::new();
    let mut current: Option<(Language, String)> = None;

    for c in text.chars() {
        let class = if hindi::is_devanagari(c) {
            Some(Language::Hindi)
        } else if c.is_ascii_alphabetic() {
            Some(Language::English)
        } else {
            None
        };

        match (class, &mut current) {
            (Some(language), Some((open, buffer))) if *open == language => buffer.push(c),
            (Some(language), slot) => {
                if let Some((open, buffer)) = slot.take() {
                    push_segment(&mut segments, open, buffer);
                }
                *slot = Some((language, c.to_string()));
            }
            (None, Some((_, buffer))) if c.is_whitespace() => buffer.push(c),
            (None, slot) => {
                if let Some((open, buffer)) = slot.take() {
                    push_segment(&mut segments, open, buffer);
                }
            }
        }
    }
    if let Some((open, buffer)) = current.take() {
        push_segment(&mut segments, open, buffer);
    }

    if segments.is_empty() {
        None
    } else {
        Some(segments)
    }
}

fn push_segment(segments: &mut Vec<LanguageSegment>, language: Language, buffer: String) {
    let trimmed = buffer.trim();
    if !trimmed.is_empty() {
        segments.push(LanguageSegment {
            language,
            text: trimmed.to_string(),
        });
    }
}
