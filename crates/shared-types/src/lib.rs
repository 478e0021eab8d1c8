pub mod insight;
pub mod sentiment;
pub mod transcript;

pub use insight::{Insight, InsightKind, InsightMetadata, InsightReport, Priority};
pub use sentiment::{
    ChartData, Highlight, Intensity, SentenceSentiment, SentimentDistribution, SentimentLabel,
    SentimentResult, SentimentSummary,
};
pub use transcript::{ProcessedTranscript, TranscriptAnalysis, TranscriptMetadata};
