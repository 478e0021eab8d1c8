//! Sentiment lexicons and their compiled word-boundary matchers.

use lazy_static::lazy_static;
use regex::Regex;

/// Positive polarity words, matched case-insensitively on word boundaries.
pub const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "happy",
    "love",
    "wonderful",
    "amazing",
    "positive",
    "pleased",
    "satisfied",
    "fantastic",
    "nice",
    "awesome",
    "glad",
    "enjoy",
    "perfect",
    "outstanding",
    "brilliant",
    "superb",
    "delighted",
    "thrilled",
    "excited",
    "optimistic",
    "confident",
];

/// Negative polarity words.
pub const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "sad",
    "hate",
    "horrible",
    "negative",
    "angry",
    "upset",
    "disappointed",
    "poor",
    "worse",
    "worst",
    "unhappy",
    "annoyed",
    "frustrated",
    "concerned",
    "worried",
];

/// Intensity modifiers. A lexicon word preceded by one of these (within 20
/// characters) is highlighted as High intensity.
pub const INTENSITY_WORDS: &[&str] = &[
    "very",
    "extremely",
    "incredibly",
    "absolutely",
    "completely",
    "totally",
    "really",
    "quite",
    "rather",
    "somewhat",
    "slightly",
];

/// Modifiers that amplify the statistical valence of the following word.
pub const BOOSTER_WORDS: &[&str] = &[
    "very",
    "extremely",
    "incredibly",
    "absolutely",
    "completely",
    "totally",
    "really",
    "quite",
];

/// Modifiers that dampen the statistical valence of the following word.
pub const DAMPENER_WORDS: &[&str] = &["somewhat", "slightly", "rather"];

/// Negation tokens; a lexicon word within two tokens of one of these has
/// its statistical valence flipped and reduced.
pub const NEGATION_WORDS: &[&str] = &["not", "no", "never", "none", "neither", "nor", "cannot"];

fn word_set_matcher(words: &[&str]) -> Regex {
    Regex::new(&format!(r"(?i)\b(?:{})\b", words.join("|"))).unwrap()
}

lazy_static! {
    /// Matcher over [`POSITIVE_WORDS`].
    pub static ref POSITIVE_MATCHER: Regex = word_set_matcher(POSITIVE_WORDS);
    /// Matcher over [`NEGATIVE_WORDS`].
    pub static ref NEGATIVE_MATCHER: Regex = word_set_matcher(NEGATIVE_WORDS);
}
