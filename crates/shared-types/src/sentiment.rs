//! Sentiment analysis result types.

/// Sentiment classification for a sentence or a whole transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Score at or above this is Positive.
    pub const POSITIVE_THRESHOLD: f64 = 0.05;
    /// Score at or below this is Negative.
    pub const NEGATIVE_THRESHOLD: f64 = -0.05;

    /// Classify a polarity score. The thresholds are inclusive: exactly
    /// 0.05 is Positive and exactly -0.05 is Negative.
    pub fn from_score(score: f64) -> Self {
        if score >= Self::POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if score <= Self::NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        }
    }
}

/// Strength of a highlighted sentiment word, based on nearby intensity
/// modifiers ("very", "extremely", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Intensity {
    High,
    Medium,
}

/// A located occurrence of a lexicon word within a sentence.
///
/// Offsets are byte positions within the sentence's own text.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Highlight {
    pub word: String,
    pub polarity: SentimentLabel,
    pub start: usize,
    pub end: usize,
    pub intensity: Intensity,
}

/// Per-sentence sentiment record.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SentenceSentiment {
    pub text: String,
    pub sentiment: SentimentLabel,
    pub polarity: f64,
    pub confidence: f64,
    pub highlights: Vec<Highlight>,
    /// Sentence text with lexicon words wrapped in `**bold**` markers.
    pub highlighted_text: String,
    pub is_important: bool,
}

/// Counts per sentiment label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SentimentDistribution {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

/// Summary statistics over all analyzed sentences.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SentimentSummary {
    pub total_sentences: usize,
    pub sentiment_distribution: SentimentDistribution,
    pub average_polarity: f64,
    pub average_confidence: f64,
    pub max_polarity: f64,
    pub min_polarity: f64,
    pub important_sentences: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Full sentiment analysis result for one transcript.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SentimentResult {
    pub overall: SentimentLabel,
    pub score: f64,
    pub confidence: f64,
    pub sentences: Vec<SentenceSentiment>,
    pub summary: SentimentSummary,
}

/// Chart-ready label distribution for the dashboard.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<usize>,
    pub colors: Vec<String>,
}

impl SentimentResult {
    /// Zero-valued Neutral result carrying an error description. Returned
    /// whenever analysis cannot run; the shape is always complete.
    pub fn empty(error: impl Into<String>) -> Self {
        Self {
            overall: SentimentLabel::Neutral,
            score: 0.0,
            confidence: 0.0,
            sentences: Vec::new(),
            summary: SentimentSummary {
                error: Some(error.into()),
                ..SentimentSummary::default()
            },
        }
    }

    /// Distribution data for a pie/bar chart: green, red, gray.
    pub fn distribution_chart_data(&self) -> ChartData {
        let d = self.summary.sentiment_distribution;
        ChartData {
            labels: vec![
                "Positive".to_string(),
                "Negative".to_string(),
                "Neutral".to_string(),
            ],
            values: vec![d.positive, d.negative, d.neutral],
            colors: vec![
                "#28a745".to_string(),
                "#dc3545".to_string(),
                "#6c757d".to_string(),
            ],
        }
    }
}
