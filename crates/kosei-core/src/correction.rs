// Correction candidate public API type.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Well-known correction categories
// ---------------------------------------------------------------------------
//
// The category is an open string, not a closed enum: declarative rule files
// may introduce categories unknown at compile time. These constants cover
// the categories produced by the built-in checkers.

pub const CATEGORY_GRAMMAR: &str = "grammar";
pub const CATEGORY_REDUNDANCY: &str = "redundancy";
pub const CATEGORY_FORMATTING: &str = "formatting";
pub const CATEGORY_POLITENESS: &str = "politeness";

/// A proposed, not-yet-applied text edit with provenance metadata.
///
/// `start_pos` and `end_pos` are half-open character (codepoint) offsets
/// into the text the candidate was produced against. Invariant: slicing
/// the original text by `[start_pos, end_pos)` yields `original_text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correction {
    /// The exact substring of the input covered by the span.
    pub original_text: String,

    /// Replacement text. May be empty, shorter or longer than the span.
    pub corrected_text: String,

    /// Start of the span, in characters.
    pub start_pos: usize,

    /// End of the span (exclusive), in characters.
    pub end_pos: usize,

    /// Human-readable identifier of the rule that produced this candidate.
    pub rule_name: String,

    /// Correction category. Open string, see the `CATEGORY_*` constants.
    pub category: String,

    /// Human-readable rationale.
    pub description: String,

    /// Per-rule author estimate in [0, 1]. Not calibrated across sources.
    pub confidence: f64,
}

impl Correction {
    /// The half-open span as a pair.
    pub fn span(&self) -> (usize, usize) {
        (self.start_pos, self.end_pos)
    }
}

/// Remove candidates sharing an exact `(start_pos, end_pos)` span,
/// keeping the first occurrence in input order.
///
/// Candidates whose spans merely overlap without being identical are
/// both retained; resolving genuinely overlapping edits is the caller's
/// concern.
pub fn dedup_by_span(corrections: Vec<Correction>) -> Vec<Correction> {
    let mut seen: hashbrown::HashSet<(usize, usize)> = hashbrown::HashSet::new();
    corrections
        .into_iter()
        .filter(|c| seen.insert(c.span()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(start: usize, end: usize, rule: &str) -> Correction {
        Correction {
            original_text: "はは".to_string(),
            corrected_text: "は".to_string(),
            start_pos: start,
            end_pos: end,
            rule_name: rule.to_string(),
            category: CATEGORY_GRAMMAR.to_string(),
            description: "test".to_string(),
            confidence: 0.9,
        }
    }

    #[test]
    fn span_pair() {
        let c = candidate(2, 4, "r");
        assert_eq!(c.span(), (2, 4));
    }

    #[test]
    fn dedup_keeps_first_for_identical_span() {
        let out = dedup_by_span(vec![
            candidate(0, 2, "first"),
            candidate(0, 2, "second"),
        ]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].rule_name, "first");
    }

    #[test]
    fn dedup_retains_overlapping_spans() {
        let out = dedup_by_span(vec![candidate(0, 2, "a"), candidate(1, 3, "b")]);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn dedup_higher_confidence_does_not_win() {
        let mut low = candidate(0, 2, "low");
        low.confidence = 0.1;
        let mut high = candidate(0, 2, "high");
        high.confidence = 1.0;
        let out = dedup_by_span(vec![low, high]);
        assert_eq!(out[0].rule_name, "low");
    }

    #[test]
    fn serializes_to_json() {
        let c = candidate(0, 2, "r");
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["start_pos"], 0);
        assert_eq!(json["end_pos"], 2);
        assert_eq!(json["category"], "grammar");
    }
}
