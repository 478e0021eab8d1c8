//! Pattern-based insight extraction: classification into six kinds with
//! confidence scoring, categorization, prioritization, context lookup,
//! deduplication, and ranking.

pub mod profile;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, warn};

use shared_types::{Insight, InsightKind, InsightReport, Priority};

use crate::config::AnalysisOptions;
use crate::error::AnalysisError;
use crate::patterns::{
    contains_any, split_sentences, stop_word_ratio, ACTION_VERBS, CATEGORY_KEYWORDS,
    URGENT_KEYWORDS,
};
use crate::validate::validate_transcript;

use profile::{profile, TypeProfile};

/// Candidates shorter than this many characters are rejected.
const MIN_CANDIDATE_CHARS: usize = 10;
/// Candidates with fewer words are rejected.
const MIN_CANDIDATE_WORDS: usize = 3;
/// Candidates with a higher stop-word fraction are rejected.
const MAX_STOP_WORD_RATIO: f64 = 0.7;

/// Confidence contribution caps.
const KEYWORD_STEP: f64 = 0.2;
const KEYWORD_CAP: f64 = 0.6;
const ACTION_VERB_STEP: f64 = 0.1;
const ACTION_VERB_CAP: f64 = 0.2;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();

    /// Leading filler/hedge phrases stripped from candidates, applied once
    /// each, in order.
    static ref PREFIX_PATTERNS: Vec<Regex> = vec![
        Regex::new(
            r"(?i)^(?:so|well|okay|ok|alright|right|yes|no|sure|absolutely|definitely)\b\s*"
        )
        .unwrap(),
        Regex::new(r"(?i)^(?:i think|i believe|i feel|i guess|i suppose)\b\s*").unwrap(),
        Regex::new(r"(?i)^(?:we need to|we should|we can|we will|we'll)\b\s*").unwrap(),
    ];
}

pub struct InsightExtractor {
    options: AnalysisOptions,
}

impl InsightExtractor {
    pub fn new(options: AnalysisOptions) -> Self {
        Self { options }
    }

    /// Extract insights of every kind. Never panics: invalid input or
    /// malformed options yield an all-empty report with error metadata,
    /// which callers must treat as "no insights".
    pub fn extract_insights(&self, text: &str) -> InsightReport {
        if let Err(msg) = self.options.validate() {
            let err = AnalysisError::Extraction(msg);
            warn!("Insight extraction rejected options: {}", err);
            return InsightReport::empty(err.detail());
        }

        let validated = match validate_transcript(text, &self.options) {
            Ok(v) => v,
            Err(err) => {
                warn!("Invalid transcript: {}", err);
                return InsightReport::empty(err.detail());
            }
        };

        let mut report = InsightReport::default();
        let mut all_confidences = Vec::new();

        for kind in InsightKind::ALL {
            let insights = self.extract_kind(&validated.text, kind);

            report
                .metadata
                .insights_by_type
                .insert(kind.as_str().to_string(), insights.len());
            report.metadata.total_insights += insights.len();
            for insight in &insights {
                all_confidences.push(insight.confidence);
                if insight.priority == Priority::High {
                    report
                        .metadata
                        .high_priority_items
                        .push(insight.text.clone());
                }
            }

            let texts: Vec<String> = insights.iter().map(|i| i.text.clone()).collect();
            match kind {
                InsightKind::Problem => report.problems = texts,
                InsightKind::Solution => report.solutions = texts,
                InsightKind::ActionItem => report.action_items = texts,
                InsightKind::Opportunity => report.opportunities = texts,
                InsightKind::Risk => report.risks = texts,
                InsightKind::Decision => report.decisions = texts,
            }
            report
                .detailed_insights
                .insert(kind.as_str().to_string(), insights);
        }

        report.metadata.extraction_confidence = mean_rounded(&all_confidences);

        info!(
            "Extracted {} insights from transcript",
            report.metadata.total_insights
        );
        report
    }

    /// All pooled, cleaned, validated, deduplicated candidates of one kind,
    /// ranked by descending confidence.
    fn extract_kind(&self, text: &str, kind: InsightKind) -> Vec<Insight> {
        let prof = profile(kind);
        let mut insights = Vec::new();

        for pattern in &prof.patterns {
            for m in pattern.find_iter(text) {
                let cleaned = clean_candidate(m.as_str());
                if !is_valid_candidate(&cleaned) {
                    continue;
                }
                let insight = build_insight(cleaned, kind, prof, text);
                if insight.confidence >= self.options.min_confidence {
                    insights.push(insight);
                }
            }
        }

        let mut unique = deduplicate(insights);
        unique.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        unique.truncate(self.options.max_insights_per_type);
        unique
    }
}

/// Collapse whitespace and strip one leading filler/hedge phrase per
/// prefix pattern, in list order.
fn clean_candidate(text: &str) -> String {
    let mut cleaned = WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned();
    for prefix in PREFIX_PATTERNS.iter() {
        cleaned = prefix.replace(&cleaned, "").into_owned();
    }
    cleaned.trim().to_string()
}

/// Reject short, thin, or stop-word-dominated candidates.
fn is_valid_candidate(text: &str) -> bool {
    if text.chars().count() < MIN_CANDIDATE_CHARS {
        return false;
    }
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() < MIN_CANDIDATE_WORDS {
        return false;
    }
    stop_word_ratio(&words) <= MAX_STOP_WORD_RATIO
}

fn build_insight(
    text: String,
    kind: InsightKind,
    prof: &TypeProfile,
    full_text: &str,
) -> Insight {
    let text_lower = text.to_lowercase();

    let keywords: Vec<String> = prof
        .keywords
        .iter()
        .filter(|kw| text_lower.contains(*kw))
        .map(|kw| kw.to_string())
        .collect();

    let confidence = score_confidence(&text, &text_lower, keywords.len());
    let category = categorize(&text_lower, prof);
    let priority = determine_priority(&text_lower, kind, confidence);
    let context = extract_context(&text, full_text);

    Insight {
        text,
        kind,
        confidence,
        category,
        keywords,
        context,
        priority,
    }
}

/// Keyword hits (capped), length boost, and action-verb cues (capped),
/// with the total capped at 1.0.
fn score_confidence(text: &str, text_lower: &str, keyword_hits: usize) -> f64 {
    let mut confidence = (keyword_hits as f64 * KEYWORD_STEP).min(KEYWORD_CAP);

    let word_count = text.split_whitespace().count();
    if word_count > 10 {
        confidence += 0.2;
    } else if word_count > 5 {
        confidence += 0.1;
    }

    let action_hits = ACTION_VERBS
        .iter()
        .filter(|verb| text_lower.contains(*verb))
        .count();
    confidence += (action_hits as f64 * ACTION_VERB_STEP).min(ACTION_VERB_CAP);

    confidence.min(1.0)
}

/// First category in the cross-kind table with a keyword hit; falls back
/// to the kind's first declared category, then "general".
fn categorize(text_lower: &str, prof: &TypeProfile) -> String {
    for (category, keywords) in CATEGORY_KEYWORDS {
        if contains_any(text_lower, keywords) {
            return category.to_string();
        }
    }
    prof.categories
        .first()
        .copied()
        .unwrap_or("general")
        .to_string()
}

fn determine_priority(text_lower: &str, kind: InsightKind, confidence: f64) -> Priority {
    if contains_any(text_lower, URGENT_KEYWORDS) {
        return Priority::High;
    }
    if matches!(kind, InsightKind::ActionItem | InsightKind::Problem) && confidence > 0.5 {
        return Priority::Medium;
    }
    if matches!(kind, InsightKind::Opportunity | InsightKind::Decision) {
        return Priority::Low;
    }
    Priority::Medium
}

/// The sentence containing the candidate plus its immediate neighbors.
/// Candidates that cannot be located fall back to their own text.
fn extract_context(candidate: &str, full_text: &str) -> String {
    // The candidate carries its sentence terminator; strip it so it can be
    // found inside a terminator-split sentence.
    let needle = candidate
        .trim_end_matches(['.', '!', '?'])
        .trim()
        .to_lowercase();
    if needle.is_empty() || !full_text.to_lowercase().contains(&needle) {
        return candidate.to_string();
    }

    let sentences = split_sentences(full_text);
    for (i, sentence) in sentences.iter().enumerate() {
        if sentence.to_lowercase().contains(&needle) {
            let start = i.saturating_sub(1);
            let end = (i + 2).min(sentences.len());
            return sentences[start..end].join(" ");
        }
    }

    candidate.to_string()
}

/// Case-insensitive exact dedup, keeping the first occurrence.
fn deduplicate(insights: Vec<Insight>) -> Vec<Insight> {
    let mut seen = std::collections::HashSet::new();
    insights
        .into_iter()
        .filter(|insight| seen.insert(insight.text.to_lowercase()))
        .collect()
}

/// Mean rounded to 3 decimals; 0 for an empty slice.
fn mean_rounded(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    (mean * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extractor() -> InsightExtractor {
        InsightExtractor::new(AnalysisOptions::default())
    }

    #[test]
    fn test_extracts_problem_insights() {
        let report = extractor()
            .extract_insights("We have a major problem with the system. The issue is causing delays.");
        assert!(!report.problems.is_empty());
        assert!(report
            .problems
            .iter()
            .any(|p| p.to_lowercase().contains("problem") || p.to_lowercase().contains("issue")));
    }

    #[test]
    fn test_extracts_decision_insights() {
        let report = extractor()
            .extract_insights("We decided to proceed with the project. The decision was made to go ahead.");
        assert!(!report.decisions.is_empty());
    }

    #[test]
    fn test_empty_input_yields_error_report() {
        let report = extractor().extract_insights("");
        for kind in InsightKind::ALL {
            assert!(report.texts(kind).is_empty());
        }
        assert_eq!(report.metadata.total_insights, 0);
        assert_eq!(report.metadata.error.as_deref(), Some("Transcript is empty"));
    }

    #[test]
    fn test_malformed_options_yield_error_report() {
        let options = AnalysisOptions::new().with_min_confidence(-0.5);
        let report = InsightExtractor::new(options)
            .extract_insights("We have a problem with the billing system.");
        assert!(report
            .metadata
            .error
            .as_deref()
            .unwrap()
            .contains("min_confidence"));
    }

    #[test]
    fn test_clean_candidate_strips_hedge_prefixes() {
        assert_eq!(
            clean_candidate("so i think we need to fix the billing system."),
            "fix the billing system."
        );
        assert_eq!(clean_candidate("  multiple   spaces here. "), "multiple spaces here.");
    }

    #[test]
    fn test_clean_candidate_keeps_words_starting_with_filler_tokens() {
        // "solution" starts with "so" but is not a filler phrase.
        assert_eq!(
            clean_candidate("solution is to upgrade the server."),
            "solution is to upgrade the server."
        );
    }

    #[test]
    fn test_candidate_validation() {
        assert!(!is_valid_candidate("too short"));
        assert!(!is_valid_candidate("onlytwo words"));
        // stop-word density above 0.7
        assert!(!is_valid_candidate("the and of with by is are"));
        assert!(is_valid_candidate("billing system outage continues"));
    }

    #[test]
    fn test_confidence_is_capped_at_one() {
        let text = "we will fix the problem issue challenge concern and we must address \
                    the broken failed trouble that we can resolve";
        let conf = score_confidence(text, &text.to_lowercase(), 9);
        assert!(conf <= 1.0);
        assert!(conf >= 0.9);
    }

    #[test]
    fn test_confidence_length_boost() {
        let short = score_confidence("fix it now", "fix it now", 0);
        let medium = score_confidence(
            "fix the server room today please",
            "fix the server room today please",
            0,
        );
        assert!(medium > short);
    }

    #[test]
    fn test_urgent_keywords_force_high_priority() {
        assert_eq!(
            determine_priority("this is urgent and blocking", InsightKind::Opportunity, 0.1),
            Priority::High
        );
    }

    #[test]
    fn test_priority_rules() {
        assert_eq!(
            determine_priority("fix the broken build", InsightKind::Problem, 0.6),
            Priority::Medium
        );
        assert_eq!(
            determine_priority("expand into new markets", InsightKind::Opportunity, 0.6),
            Priority::Low
        );
        assert_eq!(
            determine_priority("review the draft", InsightKind::Risk, 0.1),
            Priority::Medium
        );
    }

    #[test]
    fn test_categorize_first_match_wins() {
        let prof = profile(InsightKind::Problem);
        // "system" is technical, "budget" is resource; technical is scanned first.
        assert_eq!(categorize("the system budget is gone", prof), "technical");
        assert_eq!(categorize("the budget is gone", prof), "resource");
        assert_eq!(categorize("nothing matches here", prof), "technical");
    }

    #[test]
    fn test_context_includes_neighbor_sentences() {
        let full = "The rollout went fine. We have a problem with the database. We will fix it tomorrow.";
        let context = extract_context("problem with the database.", full);
        assert!(context.contains("rollout went fine"));
        assert!(context.contains("problem with the database"));
        assert!(context.contains("fix it tomorrow"));
    }

    #[test]
    fn test_context_falls_back_to_candidate() {
        let context = extract_context("rewritten candidate text here.", "Completely unrelated transcript.");
        assert_eq!(context, "rewritten candidate text here.");
    }

    #[test]
    fn test_deduplication_is_case_insensitive() {
        let report = extractor().extract_insights(
            "We have a problem with the billing system. we have a PROBLEM with the billing system.",
        );
        let lowered: Vec<String> = report.problems.iter().map(|p| p.to_lowercase()).collect();
        let mut unique = lowered.clone();
        unique.dedup();
        assert_eq!(lowered.len(), unique.len());
    }

    #[test]
    fn test_ranking_is_descending_confidence() {
        let report = extractor().extract_insights(
            "There is an issue with logins. \
             The problem is that the billing system keeps dropping customer payments and we must fix it quickly.",
        );
        let detailed = &report.detailed_insights["problem"];
        for pair in detailed.windows(2) {
            assert!(pair[0].confidence >= pair[1].confidence);
        }
    }

    #[test]
    fn test_min_confidence_filters_candidates() {
        let strict = InsightExtractor::new(AnalysisOptions::new().with_min_confidence(0.95));
        let report = strict
            .extract_insights("We have a problem with the system. The issue is causing delays.");
        assert!(report.metadata.total_insights == 0 || {
            report.detailed_insights.values().flatten().all(|i| i.confidence >= 0.95)
        });
    }

    #[test]
    fn test_max_insights_per_type_truncates() {
        let capped = InsightExtractor::new(AnalysisOptions::new().with_max_insights_per_type(1));
        let report = capped.extract_insights(
            "We have a problem with the system. Another issue is hurting the process. \
             The challenge with the rollout is growing.",
        );
        assert!(report.problems.len() <= 1);
    }

    #[test]
    fn test_metadata_counts_and_confidence() {
        let report = extractor().extract_insights(
            "We have a problem with the system. We decided to proceed with the fix. \
             The next step is to schedule the deployment for Friday.",
        );
        let counted: usize = report.metadata.insights_by_type.values().sum();
        assert_eq!(counted, report.metadata.total_insights);
        assert_eq!(report.metadata.insights_by_type.len(), 6);
        let conf = report.metadata.extraction_confidence;
        assert!((0.0..=1.0).contains(&conf));
        // rounded to 3 decimals
        assert_eq!((conf * 1000.0).round() / 1000.0, conf);
    }

    #[test]
    fn test_high_priority_items_are_flattened_texts() {
        let report = extractor().extract_insights(
            "This problem with the payment system is urgent and critical. \
             We should also explore the market opportunity in Europe next quarter.",
        );
        assert!(!report.metadata.high_priority_items.is_empty());
        for item in &report.metadata.high_priority_items {
            let found = InsightKind::ALL
                .iter()
                .any(|kind| report.texts(*kind).contains(item));
            assert!(found, "high-priority item {:?} missing from lists", item);
        }
    }
}
