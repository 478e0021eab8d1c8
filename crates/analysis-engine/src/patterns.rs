//! Shared keyword tables and text helpers used across the pipeline.

use lazy_static::lazy_static;
use regex::Regex;

/// Closed stop-word set used to reject low-content insight candidates.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did", "will",
    "would", "could", "should", "may", "might", "must", "can", "this", "that", "these", "those",
];

/// Urgency cues that force an insight to high priority.
pub const URGENT_KEYWORDS: &[&str] =
    &["urgent", "critical", "important", "asap", "immediately", "deadline"];

/// Action-verb cues that boost insight confidence.
pub const ACTION_VERBS: &[&str] = &["will", "should", "need", "must", "can", "could"];

/// Follow-up cues that mark a sentence as important for the dashboard.
pub const IMPORTANCE_CUES: &[&str] = &["action", "next", "follow", "deadline", "urgent"];

/// Cross-kind category table, scanned in order; the first category with a
/// keyword hit wins.
pub const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "technical",
        &["technical", "system", "software", "hardware", "bug", "error", "code"],
    ),
    (
        "business",
        &["business", "revenue", "profit", "customer", "market", "sales"],
    ),
    (
        "process",
        &["process", "workflow", "procedure", "method", "approach"],
    ),
    (
        "resource",
        &["resource", "budget", "cost", "money", "funding", "staff", "team"],
    ),
    (
        "timeline",
        &["timeline", "schedule", "deadline", "date", "time", "urgent", "priority"],
    ),
];

lazy_static! {
    /// Sentence terminator runs.
    static ref SENTENCE_BOUNDARY: Regex = Regex::new(r"[.!?]+").unwrap();
}

/// Split text on sentence terminator runs, trimming each fragment and
/// discarding empties. Callers apply their own minimum-length policy.
pub fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_BOUNDARY
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether any keyword occurs as a substring of the lower-cased text.
pub fn contains_any(text_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text_lower.contains(kw))
}

/// Fraction of words that are stop words.
pub fn stop_word_ratio(words: &[&str]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let stop_count = words
        .iter()
        .filter(|w| STOP_WORDS.contains(&w.to_lowercase().as_str()))
        .count();
    stop_count as f64 / words.len() as f64
}

/// The up-to-`window` characters immediately preceding `start`, used for
/// scanning intensity modifiers. Respects char boundaries.
pub fn preceding_window(text: &str, start: usize, window: usize) -> &str {
    let before = &text[..start];
    match before
        .char_indices()
        .rev()
        .take(window)
        .last()
        .map(|(i, _)| i)
    {
        Some(begin) => &before[begin..],
        None => before,
    }
}
