// Aggregation engine.
//
// Runs the declarative rules, the grammar checker and the notation
// checker over the same unmodified input text, concatenates their
// candidates in that fixed order, and dedups by exact span. No component
// mutates the text; only the caller applies corrections, via `apply`.

use std::path::Path;

use tracing::debug;

use kosei_core::correction::{CATEGORY_GRAMMAR, Correction, dedup_by_span};
use kosei_core::morphology::MorphAnalyzer;
use kosei_core::text::char_len;

use crate::grammar::GrammarChecker;
use crate::notation::NotationChecker;
use crate::rewrite;
use crate::rules::{Rule, RuleError, RuleInfo, apply_rule, load_rules_dir};

/// Character count above which a text is escalated for secondary review
/// regardless of content.
const ESCALATION_LENGTH: usize = 200;

/// Top-level proofreading engine.
///
/// Owns the read-only rule catalogues (declarative rules plus the two
/// built-in checkers), all constructed once and never mutated afterwards.
/// Checking holds no per-call mutable state, so one engine can serve
/// concurrent calls over different texts.
pub struct RuleEngine {
    rules: Vec<Rule>,
    grammar: GrammarChecker,
    notation: NotationChecker,
}

impl RuleEngine {
    /// Build an engine over an already-loaded declarative rule set.
    /// `rules` must be sorted ascending by priority (the loader does
    /// this); pass an empty vector for built-in checkers only.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self {
            rules,
            grammar: GrammarChecker::new(),
            notation: NotationChecker::new(),
        }
    }

    /// Build an engine with a morphological analyzer backend.
    pub fn with_analyzer(rules: Vec<Rule>, analyzer: Box<dyn MorphAnalyzer>) -> Self {
        Self {
            rules,
            grammar: GrammarChecker::with_analyzer(analyzer),
            notation: NotationChecker::new(),
        }
    }

    /// Build an engine from a declarative rules directory.
    pub fn from_rules_dir(dir: &Path) -> Result<Self, RuleError> {
        Ok(Self::new(load_rules_dir(dir)?))
    }

    /// The loaded declarative rules, ascending by priority.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Summaries of the loaded declarative rules.
    pub fn rule_infos(&self) -> Vec<RuleInfo> {
        self.rules.iter().map(Rule::info).collect()
    }

    /// The grammar checker (for morpheme feature extraction).
    pub fn grammar(&self) -> &GrammarChecker {
        &self.grammar
    }

    /// Check `text` and return the deduplicated correction candidates.
    ///
    /// Matcher order is fixed: declarative rules (ascending priority),
    /// then grammar, then notation. Exact-span duplicates keep the first
    /// candidate in that order; merely overlapping spans all survive.
    pub fn check(&self, text: &str) -> Vec<Correction> {
        let mut corrections = Vec::new();

        for rule in &self.rules {
            corrections.extend(apply_rule(text, rule));
        }
        corrections.extend(self.grammar.check_grammar(text));
        corrections.extend(self.notation.check_notation(text));

        let corrections = dedup_by_span(corrections);
        debug!(
            text_len = char_len(text),
            candidates = corrections.len(),
            "check complete"
        );
        corrections
    }

    /// Apply `corrections` to `text`, returning the corrected buffer.
    pub fn apply(&self, text: &str, corrections: &[Correction]) -> String {
        rewrite::apply_corrections(text, corrections)
    }

    /// Whether `text` should be escalated to a secondary, more expensive
    /// review process.
    ///
    /// Recomputes `check`; callers that already hold the corrections
    /// should use [`RuleEngine::should_escalate_with`] to avoid the
    /// double scan.
    pub fn should_escalate(&self, text: &str) -> bool {
        let corrections = self.check(text);
        self.should_escalate_with(text, &corrections)
    }

    /// Escalation decision over precomputed corrections: true when any
    /// candidate is grammar-category, or the text is longer than 200
    /// characters.
    pub fn should_escalate_with(&self, text: &str, corrections: &[Correction]) -> bool {
        if corrections.iter().any(|c| c.category == CATEGORY_GRAMMAR) {
            return true;
        }
        char_len(text) > ESCALATION_LENGTH
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
