//! Transcript normalization: noise removal, punctuation repair, sentence
//! splitting, and speaker identification.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, warn};

use shared_types::{ProcessedTranscript, TranscriptMetadata};

use crate::config::AnalysisOptions;
use crate::validate::validate_transcript;

/// Sentences shorter than this many characters are dropped as fragments.
const MIN_SENTENCE_CHARS: usize = 10;
/// Speaker names shorter than this are discarded.
const MIN_SPEAKER_CHARS: usize = 2;

lazy_static! {
    /// Transcription noise markers, removed outright. Annotations never span
    /// lines, so the classes exclude newlines.
    static ref NOISE_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"\[[^\]\n]*\]").unwrap(),
        Regex::new(r"\([^)\n]*\)").unwrap(),
        Regex::new(r"<[^>\n]*>").unwrap(),
        Regex::new(r"\.{3,}").unwrap(),
        Regex::new(r"-{3,}").unwrap(),
        Regex::new(r"_{3,}").unwrap(),
    ];

    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    /// Runs of sentence terminators collapse to the first one.
    static ref REPEATED_TERMINATORS: Regex = Regex::new(r"([.!?])\s*[.!?]+").unwrap();
    /// Isolated filler tokens, removed.
    static ref FILLER_TOKENS: Regex = Regex::new(r"(?i)\b(?:uh|um|er)\b").unwrap();
    /// Doubled acknowledgements collapse to one.
    static ref DOUBLED_ACKS: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"(?i)\bwell\s+well\b").unwrap(), "well"),
        (Regex::new(r"(?i)\byeah\s+yeah\b").unwrap(), "yeah"),
        (Regex::new(r"(?i)\bokay\s+okay\b").unwrap(), "okay"),
    ];
    static ref SPACE_BEFORE_PUNCT: Regex = Regex::new(r"\s+([.!?,:;])").unwrap();
    static ref PUNCT_BEFORE_CAPITAL: Regex = Regex::new(r"([.!?,:;])([A-Z])").unwrap();
    static ref SENTENCE_SPLIT: Regex = Regex::new(r"[.!?]+").unwrap();

    /// Speaker label patterns, tried in order per line; first match wins.
    static ref SPEAKER_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"^([A-Z][a-zA-Z\s]+):\s*").unwrap(),
        Regex::new(r"^([A-Z][A-Z\s]+):\s*").unwrap(),
        Regex::new(r"^([A-Z][a-z]+):\s*").unwrap(),
        Regex::new(r"^([A-Z]+):\s*").unwrap(),
    ];
}

pub struct TranscriptProcessor {
    options: AnalysisOptions,
}

impl TranscriptProcessor {
    pub fn new(options: AnalysisOptions) -> Self {
        Self { options }
    }

    /// Clean and normalize a raw transcript. Invalid input yields an empty
    /// result carrying the original text and an error in the metadata.
    pub fn process(&self, text: &str) -> ProcessedTranscript {
        let validated = match validate_transcript(text, &self.options) {
            Ok(v) => v,
            Err(err) => {
                warn!("Invalid transcript: {}", err);
                return ProcessedTranscript::empty(text, err.detail());
            }
        };

        let cleaned_text = clean_text(&validated.text);
        let sentences = extract_sentences(&cleaned_text);
        // Speaker labels sit at line starts; the cleaned text has its
        // newlines collapsed, so scan the validated original instead.
        let speakers = extract_speakers(&validated.text);
        let metadata = build_metadata(&validated.text, &cleaned_text, &sentences, &speakers);

        info!(
            "Processed transcript: {} sentences, {} speakers",
            sentences.len(),
            speakers.len()
        );

        ProcessedTranscript {
            original_text: validated.text,
            cleaned_text,
            sentences,
            speakers,
            warnings: validated.warnings,
            metadata,
        }
    }
}

impl Default for TranscriptProcessor {
    fn default() -> Self {
        Self::new(AnalysisOptions::default())
    }
}

/// The full cleaning pipeline, applied in a fixed order: noise markers,
/// whitespace, repeated terminators, fillers, punctuation spacing.
fn clean_text(text: &str) -> String {
    let mut cleaned = text.to_string();
    for pattern in NOISE_PATTERNS.iter() {
        cleaned = pattern.replace_all(&cleaned, "").into_owned();
    }

    cleaned = WHITESPACE_RUN.replace_all(&cleaned, " ").into_owned();
    cleaned = REPEATED_TERMINATORS
        .replace_all(&cleaned, "${1}")
        .into_owned();

    cleaned = FILLER_TOKENS.replace_all(&cleaned, "").into_owned();
    for (pattern, replacement) in DOUBLED_ACKS.iter() {
        cleaned = pattern.replace_all(&cleaned, *replacement).into_owned();
    }
    // Filler removal leaves double spaces behind.
    cleaned = WHITESPACE_RUN.replace_all(&cleaned, " ").into_owned();

    cleaned = SPACE_BEFORE_PUNCT.replace_all(&cleaned, "${1}").into_owned();
    cleaned = PUNCT_BEFORE_CAPITAL
        .replace_all(&cleaned, "${1} ${2}")
        .into_owned();

    cleaned.trim().to_string()
}

/// Split on terminator runs and drop short fragments.
fn extract_sentences(text: &str) -> Vec<String> {
    SENTENCE_SPLIT
        .split(text)
        .map(str::trim)
        .filter(|s| s.chars().count() >= MIN_SENTENCE_CHARS)
        .map(str::to_string)
        .collect()
}

/// Unique speaker labels found at line starts, alphabetically sorted.
fn extract_speakers(text: &str) -> Vec<String> {
    let mut speakers: Vec<String> = Vec::new();
    for line in text.lines() {
        let line = line.trim_start();
        for pattern in SPEAKER_PATTERNS.iter() {
            if let Some(caps) = pattern.captures(line) {
                let speaker = caps[1].trim().to_string();
                if speaker.chars().count() >= MIN_SPEAKER_CHARS {
                    speakers.push(speaker);
                }
                break;
            }
        }
    }
    speakers.sort();
    speakers.dedup();
    speakers
}

fn build_metadata(
    original: &str,
    cleaned: &str,
    sentences: &[String],
    speakers: &[String],
) -> TranscriptMetadata {
    let average_sentence_length = if sentences.is_empty() {
        0.0
    } else {
        let total_words: usize = sentences.iter().map(|s| s.split_whitespace().count()).sum();
        total_words as f64 / sentences.len() as f64
    };

    TranscriptMetadata {
        original_length: original.len(),
        cleaned_length: cleaned.len(),
        sentence_count: sentences.len(),
        speaker_count: speakers.len(),
        average_sentence_length,
        word_count: cleaned.split_whitespace().count(),
        error: None,
    }
}
