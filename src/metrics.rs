// src/metrics.rs
// Text statistics used for the before/after comparison.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Matches a maximal run of sentence-terminating punctuation, so "Fine..."
/// counts as one sentence end, not three.
static SENTENCE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// Number of non-blank segments after splitting on a double line break.
pub fn count_paragraphs(text: &str) -> usize {
    text.split("\n\n").filter(|p| !p.trim().is_empty()).count()
}

/// Heuristic sentence count: one per maximal run of `.`, `!` or `?`.
/// This is an approximation, not grammatical sentence detection.
pub fn count_sentences(text: &str) -> usize {
    SENTENCE_END.find_iter(text).count()
}

/// Whitespace-delimited token count.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub paragraphs: usize,
    pub sentences: usize,
    pub words: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        Self {
            paragraphs: count_paragraphs(text),
            sentences: count_sentences(text),
            words: count_words(text),
        }
    }
}
