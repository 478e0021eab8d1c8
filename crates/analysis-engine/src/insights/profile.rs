//! Per-kind extraction profiles: regex pattern lists, keyword vocabularies,
//! and category vocabularies, mapped explicitly from [`InsightKind`].

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::InsightKind;

/// Tail matched after a trigger phrase: bounded run of word characters and
/// light punctuation up to a sentence terminator. The bound keeps regex
/// work finite on pathological input.
const TRIGGER_TAIL: &str = r"[\s\w',-]{0,160}[.!?]";

/// Extraction configuration for one insight kind.
pub struct TypeProfile {
    /// Ordered trigger patterns; all matches from all patterns are pooled.
    pub patterns: Vec<Regex>,
    /// Kind-specific vocabulary used for confidence scoring and tagging.
    pub keywords: &'static [&'static str],
    /// Category vocabulary; the first entry is the fallback category.
    pub categories: &'static [&'static str],
}

impl TypeProfile {
    fn new(
        triggers: &[&str],
        keywords: &'static [&'static str],
        categories: &'static [&'static str],
    ) -> Self {
        let patterns = triggers
            .iter()
            .map(|t| Regex::new(&format!(r"(?i)(?:{}){}", t, TRIGGER_TAIL)).unwrap())
            .collect();
        Self {
            patterns,
            keywords,
            categories,
        }
    }
}

lazy_static! {
    static ref PROBLEM: TypeProfile = TypeProfile::new(
        &[
            r"problem|issue|challenge|concern|difficult|trouble|obstacle|barrier|pain point",
            r"struggling|facing|dealing with|having trouble with",
            r"not working|broken|failed|unsuccessful",
            r"need to fix|need to resolve|need to address",
            r"concerned about|worried about|anxious about",
        ],
        &[
            "problem", "issue", "challenge", "concern", "difficult", "trouble", "struggling",
            "broken", "failed",
        ],
        &["technical", "business", "process", "resource", "timeline"],
    );

    static ref SOLUTION: TypeProfile = TypeProfile::new(
        &[
            r"solution|resolve|fix|address|recommend|suggest|propose|implement",
            r"we can|we should|we need to|let's|how about",
            r"best practice|approach|method|strategy",
            r"workaround|alternative|option",
            r"upgrade|improve|enhance|optimize",
        ],
        &[
            "solution", "resolve", "fix", "address", "recommend", "suggest", "implement",
            "approach", "strategy",
        ],
        &["technical", "process", "training", "resource", "timeline"],
    );

    static ref ACTION_ITEM: TypeProfile = TypeProfile::new(
        &[
            r"action item|next step|todo|task|follow up|follow-up",
            r"we need to|we should|we will|we'll|let's",
            r"schedule|plan|arrange|coordinate",
            r"deadline|due date|timeline",
            r"assign|delegate|responsible|owner",
        ],
        &[
            "action", "next", "step", "todo", "task", "follow", "schedule", "deadline", "assign",
            "responsible",
        ],
        &["immediate", "short_term", "long_term", "ongoing"],
    );

    static ref OPPORTUNITY: TypeProfile = TypeProfile::new(
        &[
            r"opportunity|potential|possibility|chance|prospect",
            r"could|might|may|if we",
            r"upsell|cross-sell|expand|grow|scale",
            r"partnership|collaboration|joint|together",
            r"market|customer|client|account",
        ],
        &[
            "opportunity", "potential", "possibility", "chance", "upsell", "expand",
            "partnership", "market",
        ],
        &["sales", "partnership", "expansion", "market", "product"],
    );

    static ref RISK: TypeProfile = TypeProfile::new(
        &[
            r"risk|threat|danger|concern|worry",
            r"if not|unless|otherwise|or else",
            r"budget|cost|expense|financial",
            r"timeline|schedule|deadline|delay",
            r"competition|competitor|market",
        ],
        &[
            "risk", "threat", "danger", "concern", "worry", "budget", "cost", "timeline",
            "competition",
        ],
        &["financial", "timeline", "competitive", "technical", "operational"],
    );

    static ref DECISION: TypeProfile = TypeProfile::new(
        &[
            r"decide|decision|choose|select|pick",
            r"agree|disagree|approve|reject",
            r"final|conclude|determine|resolve",
            r"yes|no|maybe|perhaps|possibly",
            r"go with|proceed with|move forward",
        ],
        &[
            "decide", "decision", "choose", "select", "agree", "approve", "final", "conclude",
            "yes", "no",
        ],
        &["approval", "selection", "direction", "commitment", "rejection"],
    );
}

/// The extraction profile for a kind.
pub fn profile(kind: InsightKind) -> &'static TypeProfile {
    match kind {
        InsightKind::Problem => &PROBLEM,
        InsightKind::Solution => &SOLUTION,
        InsightKind::ActionItem => &ACTION_ITEM,
        InsightKind::Opportunity => &OPPORTUNITY,
        InsightKind::Risk => &RISK,
        InsightKind::Decision => &DECISION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_a_full_profile() {
        for kind in InsightKind::ALL {
            let prof = profile(kind);
            assert_eq!(prof.patterns.len(), 5, "{:?}", kind);
            assert!(!prof.keywords.is_empty());
            assert!(!prof.categories.is_empty());
        }
    }

    #[test]
    fn test_problem_trigger_matches_through_terminator() {
        let prof = profile(InsightKind::Problem);
        let text = "We have a major problem with the system.";
        let m = prof.patterns[0].find(text).unwrap();
        assert_eq!(m.as_str(), "problem with the system.");
    }

    #[test]
    fn test_decision_trigger_matches_inflected_form() {
        let prof = profile(InsightKind::Decision);
        let text = "We decided to proceed with the project.";
        assert!(prof.patterns[0].is_match(text));
    }

    #[test]
    fn test_trigger_tail_is_bounded() {
        let prof = profile(InsightKind::Problem);
        let long_tail = "x".repeat(500);
        let text = format!("problem {}.", long_tail);
        // The tail cap stops the match short of the distant terminator.
        assert!(prof.patterns[0].find(&text).is_none());
    }
}
