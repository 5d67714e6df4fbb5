// Grammar checker.
//
// Independent table scans for particle misuse, duplicated particles,
// honorific misuse and modifier agreement, plus a majority-vote scan
// that unifies mixed sentence-final register (plain である vs polite
// です/ます). Each check is a pure function over the text; the aggregate
// scan concatenates them in fixed order and dedups by exact span.

use regex::Regex;

use kosei_core::correction::{CATEGORY_GRAMMAR, Correction, dedup_by_span};
use kosei_core::morphology::{MorphAnalyzer, Morpheme, NullAnalyzer};
use kosei_core::text::{find_literal, to_char_offset};

/// (wrong expression, replacement, rationale)
const PARTICLE_PATTERNS: &[(&str, &str, &str)] = &[
    ("学校は行く", "学校に行く", "「〜は行く」→「〜に行く」"),
    ("本は読む", "本を読む", "「〜は読む」→「〜を読む」"),
    ("友達は会う", "友達に会う", "「〜は会う」→「〜に会う」"),
    ("テレビは見る", "テレビを見る", "「〜は見る」→「〜を見る」"),
];

const DUPLICATE_PARTICLE_PATTERNS: &[(&str, &str, &str)] = &[
    ("はは", "は", "助詞「は」の重複"),
    ("をを", "を", "助詞「を」の重複"),
    ("でで", "で", "助詞「で」の重複"),
    ("にに", "に", "助詞「に」の重複"),
    ("のの", "の", "助詞「の」の重複"),
];

const HONORIFIC_PATTERNS: &[(&str, &str, &str)] = &[
    ("すいません", "すみません", "正しい謝罪表現"),
    ("させて頂く", "させていただく", "敬語表現の修正"),
    ("させて頂き", "させていただき", "敬語表現の修正"),
    ("させて頂いて", "させていただいて", "敬語表現の修正"),
];

/// Modifier agreement table. Entries whose pattern equals the replacement
/// are documentation-only no-ops and never produce a candidate.
const MODIFIER_PATTERNS: &[(&str, &str, &str)] = &[
    ("大きい犬", "大きな犬", "「大きい」→「大きな」（連体修飾）"),
    ("小さい家", "小さな家", "「小さい」→「小さな」（連体修飾）"),
    ("新しい町", "新しい町", "正しい修飾関係"),
];

/// Plain/assertive sentence-final pattern (である調).
const PLAIN_ENDING_PATTERN: &str = "である[。．]";

/// Polite sentence-final pattern (ですます調).
const POLITE_ENDING_PATTERN: &str = "です[。．]|ます[。．]";

/// Grammar checker. Regex patterns are compiled once at construction;
/// the optional morphological analyzer defaults to the no-op backend.
pub struct GrammarChecker {
    analyzer: Box<dyn MorphAnalyzer>,
    plain_ending: Regex,
    polite_ending: Regex,
}

impl GrammarChecker {
    pub fn new() -> Self {
        Self::with_analyzer(Box::new(NullAnalyzer))
    }

    pub fn with_analyzer(analyzer: Box<dyn MorphAnalyzer>) -> Self {
        Self {
            analyzer,
            plain_ending: Regex::new(PLAIN_ENDING_PATTERN)
                .expect("built-in register pattern is valid"),
            polite_ending: Regex::new(POLITE_ENDING_PATTERN)
                .expect("built-in register pattern is valid"),
        }
    }

    /// Extract morphological features from `text`.
    ///
    /// Returns an empty list when no analyzer backend is available.
    pub fn analyze_morphemes(&self, text: &str) -> Vec<Morpheme> {
        self.analyzer.analyze(text)
    }

    /// Scan for particle misuse.
    pub fn check_particle_usage(&self, text: &str) -> Vec<Correction> {
        scan_table(text, PARTICLE_PATTERNS, "助詞誤用修正", 0.8)
    }

    /// Scan for duplicated particles.
    pub fn check_duplicate_particles(&self, text: &str) -> Vec<Correction> {
        scan_table(text, DUPLICATE_PARTICLE_PATTERNS, "重複助詞修正", 0.9)
    }

    /// Scan for honorific misuse.
    pub fn check_honorific_usage(&self, text: &str) -> Vec<Correction> {
        scan_table(text, HONORIFIC_PATTERNS, "敬語修正", 0.8)
    }

    /// Scan for modifier agreement. Self-mapping table entries are
    /// skipped entirely.
    pub fn check_modifier_relations(&self, text: &str) -> Vec<Correction> {
        let mut corrections = Vec::new();
        for &(pattern, replacement, description) in MODIFIER_PATTERNS {
            if pattern == replacement {
                continue;
            }
            for (start, end) in find_literal(text, pattern) {
                corrections.push(Correction {
                    original_text: pattern.to_string(),
                    corrected_text: replacement.to_string(),
                    start_pos: start,
                    end_pos: end,
                    rule_name: "修飾語修正".to_string(),
                    category: CATEGORY_GRAMMAR.to_string(),
                    description: description.to_string(),
                    confidence: 0.7,
                });
            }
        }
        corrections
    }

    /// Majority-vote unification of sentence-final register.
    ///
    /// Counts plain (である) and polite (です/ます) sentence endings. Only
    /// mixed documents produce candidates. When the polite count is
    /// strictly greater, every plain ending is unified to です。;
    /// otherwise (ties included) every polite ending is unified toward
    /// the plain close: である。 when the ending contains です, る。 when
    /// it is the ます form.
    pub fn check_style_consistency(&self, text: &str) -> Vec<Correction> {
        let plain: Vec<_> = self.plain_ending.find_iter(text).collect();
        let polite: Vec<_> = self.polite_ending.find_iter(text).collect();

        if plain.is_empty() || polite.is_empty() {
            return Vec::new();
        }

        let mut corrections = Vec::new();
        if polite.len() > plain.len() {
            for m in plain {
                corrections.push(style_correction(text, m, "です。", "ですます調に統一"));
            }
        } else {
            for m in polite {
                let replacement = if m.as_str().contains("です") {
                    "である。"
                } else {
                    "る。"
                };
                corrections.push(style_correction(text, m, replacement, "である調に統一"));
            }
        }
        corrections
    }

    /// Run every grammar scan in fixed order and dedup by exact span,
    /// first occurrence wins.
    pub fn check_grammar(&self, text: &str) -> Vec<Correction> {
        let mut corrections = Vec::new();
        corrections.extend(self.check_particle_usage(text));
        corrections.extend(self.check_style_consistency(text));
        corrections.extend(self.check_duplicate_particles(text));
        corrections.extend(self.check_honorific_usage(text));
        corrections.extend(self.check_modifier_relations(text));
        dedup_by_span(corrections)
    }
}

impl Default for GrammarChecker {
    fn default() -> Self {
        Self::new()
    }
}

fn scan_table(
    text: &str,
    table: &[(&str, &str, &str)],
    rule_name: &str,
    confidence: f64,
) -> Vec<Correction> {
    let mut corrections = Vec::new();
    for &(pattern, replacement, description) in table {
        for (start, end) in find_literal(text, pattern) {
            corrections.push(Correction {
                original_text: pattern.to_string(),
                corrected_text: replacement.to_string(),
                start_pos: start,
                end_pos: end,
                rule_name: rule_name.to_string(),
                category: CATEGORY_GRAMMAR.to_string(),
                description: description.to_string(),
                confidence,
            });
        }
    }
    corrections
}

fn style_correction(
    text: &str,
    m: regex::Match<'_>,
    replacement: &str,
    description: &str,
) -> Correction {
    Correction {
        original_text: m.as_str().to_string(),
        corrected_text: replacement.to_string(),
        start_pos: to_char_offset(text, m.start()),
        end_pos: to_char_offset(text, m.end()),
        rule_name: "文体統一".to_string(),
        category: CATEGORY_GRAMMAR.to_string(),
        description: description.to_string(),
        confidence: 0.7,
    }
}
