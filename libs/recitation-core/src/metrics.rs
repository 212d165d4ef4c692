//! Aggregation of word states into the result handed to the UI.

use crate::types::{Mistake, TrackingResult, WordState, WordStatus};
use crate::waqf::is_waqf_mark;

/// Fold finished word states into a [`TrackingResult`].
///
/// Makes no alignment decisions of its own. Pause marks appear in the key
/// sets so the UI can highlight them, but are excluded from every count.
pub fn aggregate(
    states: Vec<WordState>,
    total_words: usize,
    best_streak: usize,
) -> TrackingResult {
    let mut correct = 0usize;
    let mut wrong = 0usize;
    let mut correct_keys = Vec::new();
    let mut mistakes = Vec::new();
    let mut current_key = None;

    for state in &states {
        match &state.status {
            WordStatus::Correct => {
                correct_keys.push(state.key.clone());
                if !is_waqf_mark(&state.word) {
                    correct += 1;
                }
            }
            WordStatus::Wrong { recited } => {
                wrong += 1;
                mistakes.push(Mistake {
                    key: state.key.clone(),
                    word: state.word.clone(),
                    recited: recited.clone(),
                });
            }
            WordStatus::Current => current_key = Some(state.key.clone()),
            WordStatus::Pending => {}
        }
    }

    let words_completed = correct + wrong;
    // No attempts yet counts as fully accurate.
    let accuracy = if words_completed > 0 {
        percent(correct, words_completed)
    } else {
        100
    };

    TrackingResult {
        word_states: states,
        correct_keys,
        mistakes,
        current_key,
        progress: percent(words_completed, total_words),
        accuracy,
        words_completed,
        total_words,
        best_streak,
        is_complete: words_completed >= total_words,
    }
}

/// Rounded integer percentage.
fn percent(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round().min(100.0) as u8
}
