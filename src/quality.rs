//! Usability check for natively extracted text
//!
//! Native extraction from an image-only PDF or one with a broken font
//! encoding tends to produce near-empty output, a flood of control bytes,
//! or text with almost no recognizable words. Each of those is caught by a
//! cheap statistical check; anything that trips one is "garbage" and sends
//! the document to OCR.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_general_category::{get_general_category, GeneralCategory};

static WORD_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z]{3,}").unwrap());

/// Thresholds for the garbage checks
#[derive(Debug, Clone, PartialEq)]
pub struct QualityHeuristic {
    /// Minimum length of the trimmed text, in characters
    pub min_chars: usize,
    /// Minimum share of printable-or-whitespace characters
    pub min_printable_ratio: f64,
    /// Minimum number of runs of three or more ASCII letters
    pub min_words: usize,
}

impl Default for QualityHeuristic {
    fn default() -> Self {
        Self {
            min_chars: 50,
            min_printable_ratio: 0.8,
            min_words: 10,
        }
    }
}

impl QualityHeuristic {
    /// Returns true when `text` should not be trusted as extraction output.
    ///
    /// Checks run in order and stop at the first hit: length, printable
    /// ratio, word count.
    pub fn is_garbage(&self, text: &str) -> bool {
        if text.trim().chars().count() < self.min_chars {
            return true;
        }

        if printable_ratio(text) < self.min_printable_ratio {
            return true;
        }

        WORD_RUN.find_iter(text).take(self.min_words).count() < self.min_words
    }
}

/// [`QualityHeuristic::is_garbage`] with default thresholds
pub fn is_garbage_text(text: &str) -> bool {
    QualityHeuristic::default().is_garbage(text)
}

fn printable_ratio(text: &str) -> f64 {
    let mut total = 0usize;
    let mut printable = 0usize;
    for c in text.chars() {
        total += 1;
        if is_printable_or_space(c) {
            printable += 1;
        }
    }
    if total == 0 {
        return 0.0;
    }
    printable as f64 / total as f64
}

/// Whitespace counts as printable. Otherwise control, format, surrogate,
/// private-use, unassigned and separator characters do not.
fn is_printable_or_space(c: char) -> bool {
    // U+001C..U+001F are information separators, treated as whitespace
    if c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c) {
        return true;
    }
    !matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::SpaceSeparator
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
    )
}
