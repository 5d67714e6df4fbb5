// Notation consistency checker.
//
// Scans text against a fixed catalogue of literal substitution rules
// (digits, punctuation, katakana long-vowel variants, okurigana,
// organization-specific terms) plus a majority-vote scan that unifies
// mixed long/short katakana forms within one document.

use kosei_core::correction::{CATEGORY_FORMATTING, Correction, dedup_by_span};
use kosei_core::text::find_literal;

/// Sub-catalogue a notation rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotationKind {
    Numbers,
    Punctuation,
    Katakana,
    Okurigana,
    Custom,
}

/// A single literal substitution rule.
#[derive(Debug, Clone)]
pub struct NotationRule {
    pub pattern: String,
    pub replacement: String,
    pub description: String,
    pub kind: NotationKind,
    pub confidence: f64,
}

/// Full-width digits, paired with their half-width replacements.
const FULLWIDTH_DIGITS: &str = "０１２３４５６７８９";
const HALFWIDTH_DIGITS: &str = "0123456789";

/// Full-width punctuation unified to half-width.
const PUNCTUATION_RULES: &[(&str, &str, &str)] = &[
    ("（", "(", "全角括弧を半角に"),
    ("）", ")", "全角括弧を半角に"),
    ("［", "[", "全角角括弧を半角に"),
    ("］", "]", "全角角括弧を半角に"),
    ("！", "!", "全角感嘆符を半角に"),
    ("？", "?", "全角疑問符を半角に"),
    ("：", ":", "全角コロンを半角に"),
    ("；", ";", "全角セミコロンを半角に"),
];

/// Katakana long-vowel variants unified to the short form.
const KATAKANA_RULES: &[(&str, &str, &str)] = &[
    ("コンピューター", "コンピュータ", "長音符統一"),
    ("システムー", "システム", "語尾長音符削除"),
    ("データー", "データ", "語尾長音符削除"),
    ("ユーザー", "ユーザ", "語尾長音符削除"),
    ("サーバー", "サーバ", "語尾長音符削除"),
    ("プリンター", "プリンタ", "語尾長音符削除"),
    ("フォルダー", "フォルダ", "語尾長音符削除"),
    ("ブラウザー", "ブラウザ", "語尾長音符削除"),
];

/// Okurigana spellings unified to the standard form.
const OKURIGANA_RULES: &[(&str, &str, &str)] = &[
    ("行なう", "行う", "送り仮名統一"),
    ("行なって", "行って", "送り仮名統一"),
    ("行なった", "行った", "送り仮名統一"),
    ("受取る", "受け取る", "送り仮名統一"),
    ("受取って", "受け取って", "送り仮名統一"),
    ("受取った", "受け取った", "送り仮名統一"),
    ("取扱い", "取り扱い", "送り仮名統一"),
    ("申込み", "申し込み", "送り仮名統一"),
];

/// Organization-specific terminology.
const CUSTOM_RULES: &[(&str, &str, &str)] = &[
    ("ウェブサイト", "Webサイト", "サービス名表記統一"),
    ("ホームページ", "Webサイト", "サービス名表記統一"),
    ("ウェブページ", "Webページ", "サービス名表記統一"),
    ("Eメール", "メール", "表記統一"),
    ("イーメール", "メール", "表記統一"),
];

/// Competing (long form, short form) pairs for the mixed-notation scan.
const NOTATION_PAIRS: &[(&str, &str)] = &[
    ("ユーザー", "ユーザ"),
    ("サーバー", "サーバ"),
    ("データー", "データ"),
    ("コンピューター", "コンピュータ"),
];

/// Notation consistency checker. The rule catalogue is built once at
/// construction and treated as read-only afterwards.
pub struct NotationChecker {
    rules: Vec<NotationRule>,
}

impl NotationChecker {
    pub fn new() -> Self {
        Self {
            rules: build_rules(),
        }
    }

    /// The full rule catalogue.
    pub fn rules(&self) -> &[NotationRule] {
        &self.rules
    }

    /// Scan for full-width digits.
    pub fn check_numbers(&self, text: &str) -> Vec<Correction> {
        self.scan_kind(text, NotationKind::Numbers, "数字表記統一")
    }

    /// Scan for full-width punctuation.
    pub fn check_punctuation(&self, text: &str) -> Vec<Correction> {
        self.scan_kind(text, NotationKind::Punctuation, "記号表記統一")
    }

    /// Scan for katakana long-vowel variants.
    pub fn check_katakana(&self, text: &str) -> Vec<Correction> {
        self.scan_kind(text, NotationKind::Katakana, "カタカナ表記統一")
    }

    /// Scan for non-standard okurigana spellings.
    pub fn check_okurigana(&self, text: &str) -> Vec<Correction> {
        self.scan_kind(text, NotationKind::Okurigana, "送り仮名統一")
    }

    /// Scan for organization-specific terminology.
    pub fn check_custom_notation(&self, text: &str) -> Vec<Correction> {
        self.scan_kind(text, NotationKind::Custom, "組織固有表記統一")
    }

    /// Majority-vote unification of mixed long/short katakana forms.
    ///
    /// For each registered pair, counts non-overlapping occurrences of
    /// both forms over the whole text (so the short-form count includes
    /// hits inside long forms). Only when both counts are nonzero and the
    /// long form is strictly in the minority are candidates emitted, one
    /// per long-form occurrence. Ties and short-form-minority documents
    /// produce nothing: the unification is intentionally one-directional.
    pub fn check_mixed_notation(&self, text: &str) -> Vec<Correction> {
        let mut corrections = Vec::new();

        for &(long_form, short_form) in NOTATION_PAIRS {
            let long_spans = find_literal(text, long_form);
            let short_spans = find_literal(text, short_form);

            if long_spans.is_empty() || short_spans.is_empty() {
                continue;
            }
            if long_spans.len() < short_spans.len() {
                for (start, end) in long_spans {
                    corrections.push(Correction {
                        original_text: long_form.to_string(),
                        corrected_text: short_form.to_string(),
                        start_pos: start,
                        end_pos: end,
                        rule_name: "表記統一".to_string(),
                        category: CATEGORY_FORMATTING.to_string(),
                        description: format!("文書内統一（{short_form}に統一）"),
                        confidence: 0.6,
                    });
                }
            }
        }

        corrections
    }

    /// Run every notation scan in fixed order and dedup by exact span,
    /// first occurrence wins.
    pub fn check_notation(&self, text: &str) -> Vec<Correction> {
        let mut corrections = Vec::new();
        corrections.extend(self.check_numbers(text));
        corrections.extend(self.check_punctuation(text));
        corrections.extend(self.check_katakana(text));
        corrections.extend(self.check_okurigana(text));
        corrections.extend(self.check_custom_notation(text));
        corrections.extend(self.check_mixed_notation(text));
        dedup_by_span(corrections)
    }

    fn scan_kind(&self, text: &str, kind: NotationKind, rule_name: &str) -> Vec<Correction> {
        let mut corrections = Vec::new();
        for rule in self.rules.iter().filter(|r| r.kind == kind) {
            for (start, end) in find_literal(text, &rule.pattern) {
                corrections.push(Correction {
                    original_text: rule.pattern.clone(),
                    corrected_text: rule.replacement.clone(),
                    start_pos: start,
                    end_pos: end,
                    rule_name: rule_name.to_string(),
                    category: CATEGORY_FORMATTING.to_string(),
                    description: rule.description.clone(),
                    confidence: rule.confidence,
                });
            }
        }
        corrections
    }
}

impl Default for NotationChecker {
    fn default() -> Self {
        Self::new()
    }
}

fn build_rules() -> Vec<NotationRule> {
    let mut rules = Vec::new();

    for (z, h) in FULLWIDTH_DIGITS.chars().zip(HALFWIDTH_DIGITS.chars()) {
        rules.push(NotationRule {
            pattern: z.to_string(),
            replacement: h.to_string(),
            description: format!("全角数字「{z}」を半角「{h}」に"),
            kind: NotationKind::Numbers,
            confidence: 0.95,
        });
    }

    let tables: &[(&[(&str, &str, &str)], NotationKind, f64)] = &[
        (PUNCTUATION_RULES, NotationKind::Punctuation, 0.9),
        (KATAKANA_RULES, NotationKind::Katakana, 0.8),
        (OKURIGANA_RULES, NotationKind::Okurigana, 0.85),
        (CUSTOM_RULES, NotationKind::Custom, 0.7),
    ];
    for &(table, kind, confidence) in tables {
        for &(pattern, replacement, description) in table {
            rules.push(NotationRule {
                pattern: pattern.to_string(),
                replacement: replacement.to_string(),
                description: description.to_string(),
                kind,
                confidence,
            });
        }
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use kosei_core::text::slice_chars;

    #[test]
    fn catalogue_is_populated() {
        let checker = NotationChecker::new();
        assert!(checker.rules().len() > 20);
    }

    #[test]
    fn fullwidth_digits_each_flagged() {
        let checker = NotationChecker::new();
        let corrections = checker.check_numbers("１２３");
        assert_eq!(corrections.len(), 3);
        assert_eq!(corrections.iter().map(|c| c.corrected_text.as_str()).collect::<String>(), "123");
        for c in &corrections {
            assert_eq!(c.end_pos - c.start_pos, 1);
            assert_eq!(c.confidence, 0.95);
        }
    }

    #[test]
    fn fullwidth_punctuation_flagged() {
        let checker = NotationChecker::new();
        let corrections = checker.check_punctuation("（括弧）");
        assert_eq!(corrections.len(), 2);
        assert_eq!(corrections[0].corrected_text, "(");
        assert_eq!(corrections[1].corrected_text, ")");
    }

    #[test]
    fn katakana_long_vowel_variant_flagged() {
        let checker = NotationChecker::new();
        let corrections = checker.check_katakana("コンピューター");
        assert!(!corrections.is_empty());
        assert_eq!(corrections[0].corrected_text, "コンピュータ");
    }

    #[test]
    fn okurigana_variant_flagged() {
        let checker = NotationChecker::new();
        for (text, expected) in [
            ("行なう", "行う"),
            ("受取る", "受け取る"),
            ("取扱い", "取り扱い"),
            ("申込み", "申し込み"),
        ] {
            let corrections = checker.check_okurigana(text);
            assert!(!corrections.is_empty(), "no correction for {text}");
            assert_eq!(corrections[0].corrected_text, expected);
        }
    }

    #[test]
    fn custom_terminology_flagged() {
        let checker = NotationChecker::new();
        let corrections = checker.check_custom_notation("ウェブサイト");
        assert_eq!(corrections[0].corrected_text, "Webサイト");
        let corrections = checker.check_custom_notation("ホームページ");
        assert_eq!(corrections[0].corrected_text, "Webサイト");
    }

    #[test]
    fn mixed_notation_unifies_minority_long_form() {
        let checker = NotationChecker::new();
        // one long form, two standalone short forms
        let text = "ユーザーの設定。ユーザはユーザを確認。";
        let corrections = checker.check_mixed_notation(text);
        let user: Vec<_> = corrections
            .iter()
            .filter(|c| c.original_text == "ユーザー")
            .collect();
        assert_eq!(user.len(), 1);
        assert_eq!(user[0].corrected_text, "ユーザ");
        assert_eq!(user[0].confidence, 0.6);
    }

    #[test]
    fn mixed_notation_short_count_includes_hits_inside_long_forms() {
        let checker = NotationChecker::new();
        // "サーバー" occurs once; the short-form scan also counts the hit
        // inside it, so one standalone "サーバ" makes short strictly
        // dominant (1 < 2) and the long form is unified.
        let text = "サーバーとサーバ";
        let corrections = checker.check_mixed_notation(text);
        assert_eq!(corrections.len(), 1);
        assert_eq!(corrections[0].original_text, "サーバー");
    }

    #[test]
    fn mixed_notation_majority_long_form_emits_nothing() {
        let checker = NotationChecker::new();
        // long form twice, short only counted inside them: 2 >= 2, no output
        let text = "データーとデーター";
        assert!(checker.check_mixed_notation(text).is_empty());
    }

    #[test]
    fn mixed_notation_single_form_emits_nothing() {
        let checker = NotationChecker::new();
        assert!(checker.check_mixed_notation("コンピュータを使う").is_empty());
    }

    #[test]
    fn aggregate_scan_dedups_by_exact_span() {
        let checker = NotationChecker::new();
        let text = "ユーザーはユーザとユーザの設定を行なう。";
        let corrections = checker.check_notation(text);
        let mut spans: Vec<_> = corrections.iter().map(|c| c.span()).collect();
        let before = spans.len();
        spans.sort();
        spans.dedup();
        assert_eq!(spans.len(), before);
        // katakana catalogue entry wins over the later mixed-notation hit
        let user = corrections
            .iter()
            .find(|c| c.original_text == "ユーザー")
            .unwrap();
        assert_eq!(user.rule_name, "カタカナ表記統一");
    }

    #[test]
    fn span_text_invariant_holds() {
        let checker = NotationChecker::new();
        let text = "１つの（例）でウェブサイトを行なう。";
        for c in checker.check_notation(text) {
            assert_eq!(slice_chars(text, c.start_pos, c.end_pos), c.original_text);
        }
    }

    #[test]
    fn empty_input_yields_no_candidates() {
        let checker = NotationChecker::new();
        assert!(checker.check_notation("").is_empty());
    }
}
