// kosei-ja: Japanese proofreading module.
//
// Detects stylistic and grammatical defects in Japanese text: particle
// misuse, duplicated particles, honorific-form errors, register
// inconsistency, and notation inconsistencies (full-width digits and
// punctuation, katakana long-vowel variants, okurigana spellings,
// organization-specific terminology).
//
// Structure:
// - `notation`: literal substitution catalogue + majority-vote mixed
//   notation scan
// - `grammar`: particle/honorific/modifier tables + register unification
// - `rules`: externally supplied declarative replacement rules (YAML)
// - `engine`: runs all matchers over one text, dedups by exact span
// - `rewrite`: applies a correction set back onto the original buffer
//
// All matchers are pure over their input and report half-open char spans
// against the original, unmodified text.

pub mod engine;
pub mod grammar;
pub mod notation;
pub mod rewrite;
pub mod rules;

pub use engine::RuleEngine;
pub use grammar::GrammarChecker;
pub use notation::NotationChecker;
pub use rules::{PatternKind, Rule, RuleError, RuleInfo, RulePattern, load_rules_dir};
