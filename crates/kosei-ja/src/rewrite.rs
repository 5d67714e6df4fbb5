// Correction application.
//
// Rewrites a text buffer by splicing corrections in right to left.
// Processing in descending start order keeps earlier spans valid because
// nothing to their left has changed yet. That guarantee only holds when
// the spans are pairwise non-overlapping in original-text coordinates;
// exact-span dedup upstream removes identical spans only, so a set with
// partially overlapping spans is spliced best-effort, without validation,
// and may interleave replacements. Callers that need stricter behavior
// must resolve overlaps before calling.

use kosei_core::correction::Correction;

/// Apply `corrections` to `text`, returning the rewritten buffer.
///
/// Every character outside the union of correction spans is preserved
/// exactly. The sort is stable, so candidates sharing a start position
/// are spliced in input order.
pub fn apply_corrections(text: &str, corrections: &[Correction]) -> String {
    let mut sorted: Vec<&Correction> = corrections.iter().collect();
    sorted.sort_by(|a, b| b.start_pos.cmp(&a.start_pos));

    let mut chars: Vec<char> = text.chars().collect();
    for correction in sorted {
        let start = correction.start_pos.min(chars.len());
        let end = correction.end_pos.min(chars.len());

        let mut next = Vec::with_capacity(chars.len());
        next.extend_from_slice(&chars[..start]);
        next.extend(correction.corrected_text.chars());
        next.extend_from_slice(&chars[end..]);
        chars = next;
    }

    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn correction(start: usize, end: usize, original: &str, corrected: &str) -> Correction {
        Correction {
            original_text: original.to_string(),
            corrected_text: corrected.to_string(),
            start_pos: start,
            end_pos: end,
            rule_name: "test".to_string(),
            category: "grammar".to_string(),
            description: "test".to_string(),
            confidence: 1.0,
        }
    }

    #[test]
    fn no_corrections_returns_text_unchanged() {
        assert_eq!(apply_corrections("私は学生です。", &[]), "私は学生です。");
    }

    #[test]
    fn single_replacement() {
        let out = apply_corrections("私はは学生です", &[correction(1, 3, "はは", "は")]);
        assert_eq!(out, "私は学生です");
    }

    #[test]
    fn replacement_may_change_length() {
        let out = apply_corrections(
            "すいませんが行なう",
            &[
                correction(0, 5, "すいません", "すみません"),
                correction(6, 9, "行なう", "行う"),
            ],
        );
        assert_eq!(out, "すみませんが行う");
    }

    #[test]
    fn multiple_disjoint_corrections_applied_right_to_left() {
        // Input order does not matter for disjoint spans.
        let out = apply_corrections(
            "１と２と３",
            &[
                correction(0, 1, "１", "1"),
                correction(4, 5, "３", "3"),
                correction(2, 3, "２", "2"),
            ],
        );
        assert_eq!(out, "1と2と3");
    }

    #[test]
    fn empty_replacement_deletes_the_span() {
        let out = apply_corrections("まず最初に", &[correction(0, 2, "まず", "")]);
        assert_eq!(out, "最初に");
    }

    #[test]
    fn characters_outside_spans_preserved_exactly() {
        let text = "序文　１番　末尾";
        let out = apply_corrections(text, &[correction(3, 4, "１", "1")]);
        assert_eq!(out, "序文　1番　末尾");
    }

    #[test]
    fn equal_start_positions_splice_in_input_order() {
        // Both spans start at 0; the stable descending sort keeps input
        // order, so the first candidate is applied first.
        let out = apply_corrections(
            "ab",
            &[correction(0, 1, "a", "X"), correction(0, 2, "ab", "Y")],
        );
        // first: "ab" -> "Xb"; then (0,2) over the already-modified text
        assert_eq!(out, "Y");
    }

    #[test]
    fn overlapping_spans_are_spliced_without_validation() {
        // (1,3) is applied first (rightmost), then (0,2) re-splices over
        // the altered buffer. No error is raised; the result is the
        // documented best-effort splice.
        let out = apply_corrections(
            "abcd",
            &[correction(0, 2, "ab", "X"), correction(1, 3, "bc", "Y")],
        );
        // "abcd" -> "aYd" -> "Xd"
        assert_eq!(out, "Xd");
    }
}
