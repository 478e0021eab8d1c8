//! Processed transcript and combined analysis report types.

use crate::insight::InsightReport;
use crate::sentiment::SentimentResult;

/// Statistics about a processed transcript.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TranscriptMetadata {
    pub original_length: usize,
    pub cleaned_length: usize,
    pub sentence_count: usize,
    pub speaker_count: usize,
    /// Mean words per sentence; 0 when there are no sentences.
    pub average_sentence_length: f64,
    pub word_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Output of transcript normalization.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProcessedTranscript {
    pub original_text: String,
    pub cleaned_text: String,
    /// Ordered sentence list; order matters for context lookups.
    pub sentences: Vec<String>,
    /// Deduplicated speaker names, alphabetically sorted.
    pub speakers: Vec<String>,
    /// Non-fatal observations (very short input, no sentence breaks, ...).
    pub warnings: Vec<String>,
    pub metadata: TranscriptMetadata,
}

impl ProcessedTranscript {
    /// Empty result preserving the original text and carrying an error.
    pub fn empty(original_text: impl Into<String>, error: impl Into<String>) -> Self {
        let original_text = original_text.into();
        Self {
            metadata: TranscriptMetadata {
                original_length: original_text.len(),
                error: Some(error.into()),
                ..TranscriptMetadata::default()
            },
            original_text,
            ..Self::default()
        }
    }
}

/// Combined report from one analysis invocation.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TranscriptAnalysis {
    pub transcript: ProcessedTranscript,
    pub sentiment: SentimentResult,
    pub insights: InsightReport,
    /// Unix timestamp of the analysis run.
    pub analyzed_at: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_preserves_original_text() {
        let result = ProcessedTranscript::empty("raw input", "Transcript is empty");
        assert_eq!(result.original_text, "raw input");
        assert_eq!(result.metadata.original_length, 9);
        assert!(result.cleaned_text.is_empty());
        assert!(result.sentences.is_empty());
        assert!(result.speakers.is_empty());
        assert_eq!(
            result.metadata.error.as_deref(),
            Some("Transcript is empty")
        );
    }

    #[test]
    fn test_metadata_serialization_roundtrip() {
        let processed = ProcessedTranscript {
            original_text: "a. b.".to_string(),
            cleaned_text: "a. b.".to_string(),
            sentences: vec!["a longer sentence".to_string()],
            speakers: vec!["John".to_string()],
            warnings: vec!["Transcript is very short (less than 10 characters)".to_string()],
            metadata: TranscriptMetadata {
                original_length: 5,
                cleaned_length: 5,
                sentence_count: 1,
                speaker_count: 1,
                average_sentence_length: 3.0,
                word_count: 2,
                error: None,
            },
        };
        let json = serde_json::to_value(&processed).unwrap();
        let roundtrip: ProcessedTranscript = serde_json::from_value(json).unwrap();
        assert_eq!(roundtrip, processed);
    }
}
