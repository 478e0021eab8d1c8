//! Lexicon-based sentiment scoring with sentence-level records.
//!
//! Two independent sub-scores feed each sentence: a structural score (net
//! lexicon hits over sentence length) and an intensity-aware statistical
//! score (valence sum with booster/dampener/negation handling, normalized
//! the way VADER normalizes its compound score). When both sub-models are
//! enabled they blend 70% statistical / 30% structural.

pub mod lexicon;

use tracing::{info, warn};

use shared_types::{
    Highlight, Intensity, SentenceSentiment, SentimentDistribution, SentimentLabel,
    SentimentResult, SentimentSummary,
};

use crate::config::AnalysisOptions;
use crate::error::AnalysisError;
use crate::patterns::{contains_any, preceding_window, split_sentences, IMPORTANCE_CUES};
use crate::validate::validate_transcript;

use lexicon::{
    BOOSTER_WORDS, DAMPENER_WORDS, INTENSITY_WORDS, NEGATION_WORDS, NEGATIVE_MATCHER,
    NEGATIVE_WORDS, POSITIVE_MATCHER, POSITIVE_WORDS,
};

/// Sentences with fewer words than this are skipped.
const MIN_SENTENCE_WORDS: usize = 3;

/// Blend weights when both sub-models are enabled.
const STATISTICAL_WEIGHT: f64 = 0.7;
const STRUCTURAL_WEIGHT: f64 = 0.3;

/// Confidence at or above which a sentence is flagged important.
const IMPORTANCE_CONFIDENCE: f64 = 0.3;

/// Characters scanned backwards from a highlight for intensity modifiers.
const INTENSITY_WINDOW: usize = 20;

const BOOSTER_FACTOR: f64 = 1.5;
const DAMPENER_FACTOR: f64 = 0.7;
/// Negated valence is flipped and reduced (VADER's negation scalar).
const NEGATION_FACTOR: f64 = -0.74;
/// Exclamation emphasis per mark, capped at three marks.
const EXCLAMATION_BOOST: f64 = 0.1;
/// Normalization constant for the statistical score: x / sqrt(x^2 + ALPHA).
const NORMALIZATION_ALPHA: f64 = 15.0;

pub struct SentimentAnalyzer {
    options: AnalysisOptions,
}

impl SentimentAnalyzer {
    pub fn new(options: AnalysisOptions) -> Self {
        Self { options }
    }

    /// Analyze transcript sentiment. Never panics: invalid input or
    /// malformed options yield a zero-valued Neutral result with the error
    /// recorded in the summary.
    pub fn analyze(&self, text: &str) -> SentimentResult {
        if let Err(msg) = self.options.validate() {
            let err = AnalysisError::Analysis(msg);
            warn!("Sentiment analysis rejected options: {}", err);
            return SentimentResult::empty(err.detail());
        }

        let validated = match validate_transcript(text, &self.options) {
            Ok(v) => v,
            Err(err) => {
                warn!("Invalid transcript: {}", err);
                return SentimentResult::empty(err.detail());
            }
        };

        let sentences: Vec<SentenceSentiment> = split_sentences(&validated.text)
            .into_iter()
            .filter(|s| s.split_whitespace().count() >= MIN_SENTENCE_WORDS)
            .map(|s| self.analyze_sentence(&s))
            .collect();

        let (overall, score, confidence) = overall_sentiment(&sentences);
        let summary = summarize(&sentences);

        info!(
            "Sentiment analysis completed: {} (score: {:.3}, {} sentences)",
            overall.as_str(),
            score,
            sentences.len()
        );

        SentimentResult {
            overall,
            score,
            confidence,
            sentences,
            summary,
        }
    }

    fn analyze_sentence(&self, sentence: &str) -> SentenceSentiment {
        let statistical = if self.options.use_statistical {
            Some(statistical_polarity(sentence))
        } else {
            None
        };
        let structural = if self.options.use_lexicon {
            Some(structural_polarity(sentence))
        } else {
            None
        };

        let polarity = match (statistical, structural) {
            (Some(stat), Some(lex)) => stat * STATISTICAL_WEIGHT + lex * STRUCTURAL_WEIGHT,
            (Some(stat), None) => stat,
            (None, Some(lex)) => lex,
            (None, None) => 0.0,
        };

        let sentiment = SentimentLabel::from_score(polarity);
        let confidence = polarity.abs();
        let highlights = generate_highlights(sentence);
        let highlighted_text = compose_highlighted_text(sentence, &highlights);

        let is_important = confidence >= IMPORTANCE_CONFIDENCE
            || !highlights.is_empty()
            || contains_any(&sentence.to_lowercase(), IMPORTANCE_CUES);

        SentenceSentiment {
            text: sentence.to_string(),
            sentiment,
            polarity,
            confidence,
            highlights,
            highlighted_text,
            is_important,
        }
    }
}

/// Net lexicon hits over sentence length, clamped to [-1, 1].
fn structural_polarity(sentence: &str) -> f64 {
    let word_count = sentence.split_whitespace().count();
    if word_count == 0 {
        return 0.0;
    }
    let positive = POSITIVE_MATCHER.find_iter(sentence).count() as f64;
    let negative = NEGATIVE_MATCHER.find_iter(sentence).count() as f64;
    ((positive - negative) / word_count as f64).clamp(-1.0, 1.0)
}

/// Intensity-aware valence sum normalized to (-1, 1).
fn statistical_polarity(sentence: &str) -> f64 {
    let tokens: Vec<String> = sentence
        .split_whitespace()
        .map(|w| {
            w.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                .to_lowercase()
        })
        .filter(|w| !w.is_empty())
        .collect();

    let mut sum = 0.0;
    for (i, token) in tokens.iter().enumerate() {
        let mut valence = if POSITIVE_WORDS.contains(&token.as_str()) {
            1.0
        } else if NEGATIVE_WORDS.contains(&token.as_str()) {
            -1.0
        } else {
            continue;
        };

        if i > 0 {
            let prev = tokens[i - 1].as_str();
            if BOOSTER_WORDS.contains(&prev) {
                valence *= BOOSTER_FACTOR;
            } else if DAMPENER_WORDS.contains(&prev) {
                valence *= DAMPENER_FACTOR;
            }
        }

        let negated = tokens[i.saturating_sub(2)..i]
            .iter()
            .any(|t| NEGATION_WORDS.contains(&t.as_str()) || t.ends_with("n't"));
        if negated {
            valence *= NEGATION_FACTOR;
        }

        sum += valence;
    }

    if sum == 0.0 {
        return 0.0;
    }

    let exclamations = sentence.matches('!').count().min(3);
    sum *= 1.0 + EXCLAMATION_BOOST * exclamations as f64;

    sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()
}

/// Locate every lexicon word occurrence in the sentence, ordered by start
/// offset. Offsets are byte positions within the sentence itself.
fn generate_highlights(sentence: &str) -> Vec<Highlight> {
    let mut highlights = Vec::new();

    let sets = [
        (&*POSITIVE_MATCHER, SentimentLabel::Positive),
        (&*NEGATIVE_MATCHER, SentimentLabel::Negative),
    ];
    for (matcher, polarity) in sets {
        for m in matcher.find_iter(sentence) {
            let window = preceding_window(sentence, m.start(), INTENSITY_WINDOW).to_lowercase();
            let intensity = if contains_any(&window, INTENSITY_WORDS) {
                Intensity::High
            } else {
                Intensity::Medium
            };
            highlights.push(Highlight {
                word: m.as_str().to_string(),
                polarity,
                start: m.start(),
                end: m.end(),
                intensity,
            });
        }
    }

    highlights.sort_by_key(|h| h.start);
    highlights
}

/// Wrap highlighted words in `**bold**`. On overlap, the later-starting
/// highlight is dropped (first match wins).
fn compose_highlighted_text(sentence: &str, highlights: &[Highlight]) -> String {
    if highlights.is_empty() {
        return sentence.to_string();
    }

    let mut parts = String::new();
    let mut last_end = 0;
    for highlight in highlights {
        if highlight.start < last_end {
            continue;
        }
        parts.push_str(&sentence[last_end..highlight.start]);
        parts.push_str("**");
        parts.push_str(&highlight.word);
        parts.push_str("**");
        last_end = highlight.end;
    }
    parts.push_str(&sentence[last_end..]);
    parts
}

/// Confidence-weighted mean over sentence polarities. Zero total weight
/// yields a Neutral zero result.
fn overall_sentiment(sentences: &[SentenceSentiment]) -> (SentimentLabel, f64, f64) {
    if sentences.is_empty() {
        return (SentimentLabel::Neutral, 0.0, 0.0);
    }

    let total_weight: f64 = sentences.iter().map(|s| s.confidence).sum();
    if total_weight == 0.0 {
        return (SentimentLabel::Neutral, 0.0, 0.0);
    }

    let weighted_score: f64 = sentences.iter().map(|s| s.polarity * s.confidence).sum();
    let score = weighted_score / total_weight;
    let confidence = (total_weight / sentences.len() as f64).min(1.0);

    (SentimentLabel::from_score(score), score, confidence)
}

fn summarize(sentences: &[SentenceSentiment]) -> SentimentSummary {
    if sentences.is_empty() {
        return SentimentSummary::default();
    }

    let mut distribution = SentimentDistribution::default();
    for sentence in sentences {
        match sentence.sentiment {
            SentimentLabel::Positive => distribution.positive += 1,
            SentimentLabel::Negative => distribution.negative += 1,
            SentimentLabel::Neutral => distribution.neutral += 1,
        }
    }

    let polarities: Vec<f64> = sentences.iter().map(|s| s.polarity).collect();
    let count = sentences.len() as f64;

    SentimentSummary {
        total_sentences: sentences.len(),
        sentiment_distribution: distribution,
        average_polarity: polarities.iter().sum::<f64>() / count,
        average_confidence: sentences.iter().map(|s| s.confidence).sum::<f64>() / count,
        max_polarity: polarities.iter().copied().fold(f64::MIN, f64::max),
        min_polarity: polarities.iter().copied().fold(f64::MAX, f64::min),
        important_sentences: sentences.iter().filter(|s| s.is_important).count(),
        error: None,
    }
}
