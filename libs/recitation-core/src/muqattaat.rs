//! Letter-name matching for the muqatta'at surah openings.
//!
//! Openings such as "الم" are written as one reference word but recited
//! as individual letter names ("الف", "لام", "ميم"). Matching those
//! tokens word-by-word would fail every one of them, so the tracker first
//! checks whether the spoken tokens spell the reference word out.

use crate::text::TextNormalizer;

/// Check whether the spoken tokens spell out the reference word.
///
/// Takes the first character of each normalized token, in order, and
/// compares the concatenation to the normalized reference word. The first
/// character of an Arabic letter name is the letter itself.
pub fn matches_letter_names(
    reference: &str,
    tokens: &[String],
    text: &dyn TextNormalizer,
) -> bool {
    let spelled: String = tokens
        .iter()
        .filter_map(|token| text.normalize(token).chars().next())
        .collect();
    spelled == text.normalize(reference)
}
