//! Classification of Quranic pause (waqf) marks.
//!
//! Word-by-word mushaf datasets interleave stop signs with the recitable
//! words. A stop sign is never spoken aloud, so the tracker has to
//! recognize these tokens and skip them everywhere.

/// Check whether a reference token is a pause mark rather than a word.
///
/// After dropping whitespace and vowel or elongation diacritics, a token
/// qualifies when the remainder is non-empty and consists solely of the
/// small high stop signs (U+06D6..=U+06DC).
pub fn is_waqf_mark(token: &str) -> bool {
    let mut seen_mark = false;
    for c in token.chars() {
        if c.is_whitespace() || is_tashkeel(c) {
            continue;
        }
        if !is_stop_sign(c) {
            return false;
        }
        seen_mark = true;
    }
    seen_mark
}

/// Vowel and elongation diacritics: tashkeel, tatweel, superscript alef.
fn is_tashkeel(c: char) -> bool {
    matches!(c,
        '\u{064B}'..='\u{0655}' |
        '\u{0670}' |
        '\u{0640}'
    )
}

/// Small high annotation signs used for waqf in the mushaf.
fn is_stop_sign(c: char) -> bool {
    matches!(c, '\u{06D6}'..='\u{06DC}')
}
