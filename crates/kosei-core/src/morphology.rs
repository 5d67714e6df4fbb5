// Morphological analysis capability.
//
// Part-of-speech features are an optional capability, not a dependency:
// the grammar checker works against the `MorphAnalyzer` trait and degrades
// to an empty feature list through `NullAnalyzer` when no real analyzer
// backend is available.

use serde::{Deserialize, Serialize};

/// A single morpheme produced by a morphological analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Morpheme {
    /// Surface form as it appears in the text.
    pub surface: String,

    /// Part of speech (e.g. 名詞, 動詞).
    pub part_of_speech: String,

    /// Part-of-speech subclassification.
    pub part_of_speech_detail: String,

    /// Dictionary (base) form.
    pub base_form: String,

    /// Reading in katakana.
    pub reading: String,
}

/// Trait for morphological analyzer backends.
///
/// Implementations must be pure over their input and safe to share across
/// threads; the checkers hold them behind a shared reference for the
/// lifetime of the engine.
pub trait MorphAnalyzer: Send + Sync {
    /// Analyze `text` and return its morphemes, in surface order.
    fn analyze(&self, text: &str) -> Vec<Morpheme>;
}

/// No-op analyzer used when no backend is available.
///
/// Always returns an empty feature list; callers must treat an empty list
/// as "no features", never as an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAnalyzer;

impl MorphAnalyzer for NullAnalyzer {
    fn analyze(&self, _text: &str) -> Vec<Morpheme> {
        Vec::new()
    }
}
