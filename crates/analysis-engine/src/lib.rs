//! Call-transcript analytics engine.
//!
//! Takes raw conversation transcripts and produces structured reports:
//! normalized text with sentence and speaker breakdowns, lexicon and
//! statistical sentiment scores with inline highlights, and pattern-matched
//! insights (problems, solutions, action items, opportunities, risks,
//! decisions) with confidence, category, and priority.
//!
//! ```no_run
//! use analysis_engine::AnalysisEngine;
//!
//! let engine = AnalysisEngine::new();
//! let report = engine.analyze("John: We have a problem with the billing system.");
//! assert!(!report.insights.problems.is_empty());
//! ```

pub mod config;
pub mod error;
pub mod insights;
pub mod patterns;
pub mod processor;
pub mod sentiment;
pub mod validate;

pub use config::AnalysisOptions;
pub use error::AnalysisError;
pub use insights::InsightExtractor;
pub use processor::TranscriptProcessor;
pub use sentiment::SentimentAnalyzer;

pub use shared_types::{
    Insight, InsightKind, InsightReport, Priority, ProcessedTranscript, SentimentLabel,
    SentimentResult, TranscriptAnalysis,
};

use tracing::info;

/// Facade running the full pipeline: normalization, sentiment scoring, and
/// insight extraction over one transcript.
pub struct AnalysisEngine {
    processor: TranscriptProcessor,
    sentiment: SentimentAnalyzer,
    insights: InsightExtractor,
}

impl AnalysisEngine {
    pub fn new() -> Self {
        Self::with_options(AnalysisOptions::default())
    }

    pub fn with_options(options: AnalysisOptions) -> Self {
        Self {
            processor: TranscriptProcessor::new(options.clone()),
            sentiment: SentimentAnalyzer::new(options.clone()),
            insights: InsightExtractor::new(options),
        }
    }

    /// Run all three stages. Each stage degrades independently on invalid
    /// input, so the combined report is always fully populated.
    pub fn analyze(&self, text: &str) -> TranscriptAnalysis {
        info!("Analyzing transcript ({} bytes)", text.len());

        let transcript = self.processor.process(text);
        let sentiment = self.sentiment.analyze(text);
        let insights = self.insights.extract_insights(text);

        TranscriptAnalysis {
            transcript,
            sentiment,
            insights,
            analyzed_at: chrono::Utc::now().timestamp() as u64,
        }
    }

    /// Full analysis serialized to a JSON value, for callers that hand the
    /// report straight to a dashboard or export layer.
    pub fn analyze_json(&self, text: &str) -> Result<serde_json::Value, AnalysisError> {
        let analysis = self.analyze(text);
        serde_json::to_value(&analysis)
            .map_err(|e| AnalysisError::Analysis(format!("Report serialization failed: {}", e)))
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}
