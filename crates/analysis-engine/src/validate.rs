//! Transcript input validation.
//!
//! Validation failures are recoverable by contract: callers turn the error
//! into their empty result shape instead of propagating it.

use crate::config::AnalysisOptions;
use crate::error::AnalysisError;

/// A validated, trimmed (and possibly truncated) transcript plus any
/// non-fatal warnings collected along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedTranscript {
    pub text: String,
    pub warnings: Vec<String>,
}

/// Validate raw transcript input.
///
/// Rejects empty and non-alphabetic text. Inputs past the configured
/// character cap are truncated rather than rejected, with a warning, so
/// that pathological lengths cannot stall the regex stages.
pub fn validate_transcript(
    text: &str,
    options: &AnalysisOptions,
) -> Result<ValidatedTranscript, AnalysisError> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "Transcript is empty".to_string(),
        ));
    }

    if !trimmed.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(AnalysisError::InvalidInput(
            "Transcript contains no alphabetic characters".to_string(),
        ));
    }

    let mut warnings = Vec::new();
    let char_count = trimmed.chars().count();

    if char_count < 10 {
        warnings.push("Transcript is very short (less than 10 characters)".to_string());
    }

    let text = if char_count > options.max_transcript_chars {
        warnings.push(format!(
            "Transcript is very long (over {} characters); truncated",
            options.max_transcript_chars
        ));
        trimmed
            .chars()
            .take(options.max_transcript_chars)
            .collect::<String>()
            .trim_end()
            .to_string()
    } else {
        trimmed.to_string()
    };

    if !text.contains(['.', '!', '?']) {
        warnings.push("Transcript appears to have no sentence breaks".to_string());
    }

    Ok(ValidatedTranscript { text, warnings })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(text: &str) -> Result<ValidatedTranscript, AnalysisError> {
        validate_transcript(text, &AnalysisOptions::default())
    }

    #[test]
    fn test_rejects_empty_input() {
        let err = validate("").unwrap_err();
        assert_eq!(err.detail(), "Transcript is empty");
    }

    #[test]
    fn test_rejects_whitespace_only_input() {
        assert!(validate("   \n\t  ").is_err());
    }

    #[test]
    fn test_rejects_non_alphabetic_input() {
        let err = validate("1234 ... !!! 42").unwrap_err();
        assert_eq!(
            err.detail(),
            "Transcript contains no alphabetic characters"
        );
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let validated = validate("  Hello there, this is a call.  ").unwrap();
        assert_eq!(validated.text, "Hello there, this is a call.");
        assert!(validated.warnings.is_empty());
    }

    #[test]
    fn test_warns_on_very_short_input() {
        let validated = validate("Hi. ok").unwrap();
        assert!(validated
            .warnings
            .iter()
            .any(|w| w.contains("very short")));
    }

    #[test]
    fn test_warns_on_missing_sentence_breaks() {
        let validated = validate("no terminators in this transcript at all").unwrap();
        assert!(validated
            .warnings
            .iter()
            .any(|w| w.contains("no sentence breaks")));
    }

    #[test]
    fn test_truncates_over_cap_with_warning() {
        let options = AnalysisOptions::new().with_max_transcript_chars(20);
        let long = "word ".repeat(20);
        let validated = validate_transcript(&long, &options).unwrap();
        assert!(validated.text.chars().count() <= 20);
        assert!(validated.warnings.iter().any(|w| w.contains("truncated")));
    }
}
