// Char-offset text helpers.
//
// All spans in this workspace are character (codepoint) offsets so they
// stay well-defined over multi-byte Japanese text. These helpers do the
// byte-to-char conversions at the boundary with `&str` APIs and provide
// the literal scans shared by the checkers.

/// Number of characters in `text`.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Convert a byte offset (e.g. from a regex match) into a char offset.
///
/// `byte_offset` must lie on a char boundary of `text`.
pub fn to_char_offset(text: &str, byte_offset: usize) -> usize {
    text[..byte_offset].chars().count()
}

/// Slice `text` by a half-open char range.
pub fn slice_chars(text: &str, start: usize, end: usize) -> String {
    text.chars().skip(start).take(end.saturating_sub(start)).collect()
}

/// Find every non-overlapping occurrence of `pattern` in `text`,
/// scanning left to right. Returns half-open char spans.
pub fn find_literal(text: &str, pattern: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    if pattern.is_empty() {
        return spans;
    }
    let pattern_chars = char_len(pattern);
    let mut byte_pos = 0;
    let mut char_pos = 0;
    while let Some(rel) = text[byte_pos..].find(pattern) {
        let start_byte = byte_pos + rel;
        let start_char = char_pos + text[byte_pos..start_byte].chars().count();
        spans.push((start_char, start_char + pattern_chars));
        byte_pos = start_byte + pattern.len();
        char_pos = start_char + pattern_chars;
    }
    spans
}

/// Find every occurrence of `pattern` in `text`, restarting the scan one
/// character past each previous match start. Unlike [`find_literal`] this
/// permits overlapping occurrences (pattern `"aa"` over `"aaa"` fires at
/// char offsets 0 and 1).
pub fn find_literal_overlapping(text: &str, pattern: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    if pattern.is_empty() {
        return spans;
    }
    let pattern_chars = char_len(pattern);
    let mut byte_pos = 0;
    let mut char_pos = 0;
    while let Some(rel) = text[byte_pos..].find(pattern) {
        let start_byte = byte_pos + rel;
        let start_char = char_pos + text[byte_pos..start_byte].chars().count();
        spans.push((start_char, start_char + pattern_chars));
        // Restart one character past the match start.
        let first_char_len = match text[start_byte..].chars().next() {
            Some(c) => c.len_utf8(),
            None => break,
        };
        byte_pos = start_byte + first_char_len;
        char_pos = start_char + 1;
    }
    spans
}
