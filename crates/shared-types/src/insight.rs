//! Insight extraction result types.

use std::collections::BTreeMap;

/// The six semantic categories an extracted insight can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Problem,
    Solution,
    ActionItem,
    Opportunity,
    Risk,
    Decision,
}

impl InsightKind {
    /// All kinds, in extraction order.
    pub const ALL: [InsightKind; 6] = [
        InsightKind::Problem,
        InsightKind::Solution,
        InsightKind::ActionItem,
        InsightKind::Opportunity,
        InsightKind::Risk,
        InsightKind::Decision,
    ];

    /// Singular key used in `insights_by_type` and `detailed_insights`.
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::Problem => "problem",
            InsightKind::Solution => "solution",
            InsightKind::ActionItem => "action_item",
            InsightKind::Opportunity => "opportunity",
            InsightKind::Risk => "risk",
            InsightKind::Decision => "decision",
        }
    }

    /// Pluralized key used for the top-level report lists.
    pub fn plural(&self) -> &'static str {
        match self {
            InsightKind::Problem => "problems",
            InsightKind::Solution => "solutions",
            InsightKind::ActionItem => "action_items",
            InsightKind::Opportunity => "opportunities",
            InsightKind::Risk => "risks",
            InsightKind::Decision => "decisions",
        }
    }
}

/// Priority level assigned to an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// A classified, scored span of transcript text.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Insight {
    pub text: String,
    pub kind: InsightKind,
    pub confidence: f64,
    pub category: String,
    pub keywords: Vec<String>,
    /// The containing sentence plus its immediate neighbors, or the insight
    /// text itself when it cannot be located in the source.
    pub context: String,
    pub priority: Priority,
}

/// Document-level extraction metadata.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InsightMetadata {
    pub total_insights: usize,
    pub insights_by_type: BTreeMap<String, usize>,
    /// Mean confidence of all kept insights, rounded to 3 decimals.
    pub extraction_confidence: f64,
    pub high_priority_items: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Full insight extraction report for one transcript.
///
/// The pluralized lists carry plain text ordered by descending confidence;
/// `detailed_insights` carries the full records under singular kind keys.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InsightReport {
    pub problems: Vec<String>,
    pub solutions: Vec<String>,
    pub action_items: Vec<String>,
    pub opportunities: Vec<String>,
    pub risks: Vec<String>,
    pub decisions: Vec<String>,
    pub metadata: InsightMetadata,
    pub detailed_insights: BTreeMap<String, Vec<Insight>>,
}

impl InsightReport {
    /// Fully-populated empty report carrying an error description. Callers
    /// must treat this as "no insights", not as a fatal failure.
    pub fn empty(error: impl Into<String>) -> Self {
        Self {
            metadata: InsightMetadata {
                error: Some(error.into()),
                ..InsightMetadata::default()
            },
            ..Self::default()
        }
    }

    /// The plain-text list for a kind.
    pub fn texts(&self, kind: InsightKind) -> &[String] {
        match kind {
            InsightKind::Problem => &self.problems,
            InsightKind::Solution => &self.solutions,
            InsightKind::ActionItem => &self.action_items,
            InsightKind::Opportunity => &self.opportunities,
            InsightKind::Risk => &self.risks,
            InsightKind::Decision => &self.decisions,
        }
    }
}
