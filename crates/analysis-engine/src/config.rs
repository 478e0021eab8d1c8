//! Analysis configuration.
//!
//! Options are pass-through knobs recognized by the pipeline; nothing here
//! is re-derived from the input text.

/// Default input-length cap, matching the "very long transcript" warning
/// threshold. Longer inputs are truncated to bound regex work.
pub const DEFAULT_MAX_TRANSCRIPT_CHARS: usize = 50_000;

/// Default cap on ranked insights kept per kind.
pub const DEFAULT_MAX_INSIGHTS_PER_TYPE: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOptions {
    /// Enable the intensity-aware statistical polarity sub-score.
    pub use_statistical: bool,
    /// Enable the lexicon/structural polarity sub-score.
    pub use_lexicon: bool,
    /// Insights scoring below this confidence are dropped.
    pub min_confidence: f64,
    /// Ranked insight lists are truncated to this length per kind.
    pub max_insights_per_type: usize,
    /// Transcripts longer than this are truncated with a warning.
    pub max_transcript_chars: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            use_statistical: true,
            use_lexicon: true,
            min_confidence: 0.0,
            max_insights_per_type: DEFAULT_MAX_INSIGHTS_PER_TYPE,
            max_transcript_chars: DEFAULT_MAX_TRANSCRIPT_CHARS,
        }
    }
}

impl AnalysisOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lexicon-only sentiment scoring (statistical sub-model disabled).
    pub fn lexicon_only() -> Self {
        Self {
            use_statistical: false,
            ..Self::default()
        }
    }

    pub fn with_statistical(mut self, enabled: bool) -> Self {
        self.use_statistical = enabled;
        self
    }

    pub fn with_lexicon(mut self, enabled: bool) -> Self {
        self.use_lexicon = enabled;
        self
    }

    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    pub fn with_max_insights_per_type(mut self, max: usize) -> Self {
        self.max_insights_per_type = max;
        self
    }

    pub fn with_max_transcript_chars(mut self, max: usize) -> Self {
        self.max_transcript_chars = max;
        self
    }

    /// Reject malformed option combinations before any matching runs.
    pub fn validate(&self) -> Result<(), String> {
        if !self.min_confidence.is_finite() || !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(format!(
                "min_confidence must be within [0, 1], got {}",
                self.min_confidence
            ));
        }
        if self.max_transcript_chars == 0 {
            return Err("max_transcript_chars must be greater than 0".to_string());
        }
        Ok(())
    }
}
