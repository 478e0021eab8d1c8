//! Engine error taxonomy.
//!
//! No error here ever reaches a caller as a panic: each component entry
//! point converts failures into its well-formed empty result shape, with
//! the error description attached to the result's metadata.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Empty, non-textual, or otherwise unusable transcript input.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Failure inside insight pattern matching (e.g. malformed options).
    #[error("extraction error: {0}")]
    Extraction(String),

    /// Failure inside sentiment scoring (e.g. malformed options).
    #[error("analysis error: {0}")]
    Analysis(String),
}

impl AnalysisError {
    /// The bare description, without the variant prefix. This is what gets
    /// embedded in result metadata.
    pub fn detail(&self) -> &str {
        match self {
            AnalysisError::InvalidInput(msg)
            | AnalysisError::Extraction(msg)
            | AnalysisError::Analysis(msg) => msg,
        }
    }
}
