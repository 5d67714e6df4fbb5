// kosei-core: shared types for the kosei Japanese proofreading engine.
//
// Holds the value types passed between the matchers, the aggregation
// engine and the rewriter: the `Correction` candidate, the morphological
// feature record with its capability trait, and char-offset text helpers
// shared by every scanner.

pub mod correction;
pub mod morphology;
pub mod text;

pub use correction::{
    CATEGORY_FORMATTING, CATEGORY_GRAMMAR, CATEGORY_POLITENESS, CATEGORY_REDUNDANCY, Correction,
    dedup_by_span,
};
pub use morphology::{Morpheme, MorphAnalyzer, NullAnalyzer};
