//! Live recitation tracking against a reference ayah.
//!
//! The tracker is a pure function. The caller re-invokes it with the full
//! transcript on every speech-recognition update and replaces its previous
//! snapshot with the returned result; nothing is kept between calls, so a
//! revised interim transcript can freely change earlier words' statuses.

use tracing::{debug, trace};

use crate::metrics::aggregate;
use crate::muqattaat;
use crate::text::TextNormalizer;
use crate::types::{TrackerSettings, TrackingResult, WordState, WordStatus};
use crate::waqf::is_waqf_mark;

/// Align the transcript spoken so far against one ayah's words.
///
/// `words` and `keys` are parallel slices from the reference dataset.
/// Degenerate input (no words, a length mismatch, or pause marks only)
/// returns [`TrackingResult::empty`] rather than failing.
pub fn track_recitation(
    words: &[String],
    keys: &[String],
    transcript: &str,
    text: &dyn TextNormalizer,
    settings: &TrackerSettings,
) -> TrackingResult {
    if words.is_empty() || words.len() != keys.len() {
        trace!(
            words = words.len(),
            keys = keys.len(),
            "unusable reference, returning empty result"
        );
        return TrackingResult::empty();
    }

    let waqf: Vec<bool> = words.iter().map(|w| is_waqf_mark(w)).collect();
    let total_words = waqf.iter().filter(|&&mark| !mark).count();
    if total_words == 0 {
        return TrackingResult::empty();
    }

    // Pause marks are never spoken; they start out correct and stay so.
    let mut states: Vec<WordState> = words
        .iter()
        .zip(keys)
        .zip(&waqf)
        .map(|((word, key), &mark)| WordState {
            word: word.clone(),
            key: key.clone(),
            status: if mark {
                WordStatus::Correct
            } else {
                WordStatus::Pending
            },
        })
        .collect();

    if transcript.trim().is_empty() {
        return initial_result(states, &waqf, total_words);
    }

    let spoken = text.tokenize(transcript);

    // A muqatta'at opening is a single reference word recited as several
    // letter names, so it has to be tried before the word-by-word walk.
    if total_words == 1 && spoken.len() > 1 {
        if let Some(idx) = waqf.iter().position(|&mark| !mark) {
            if muqattaat::matches_letter_names(&words[idx], &spoken, text) {
                debug!(word = %words[idx], "muqatta'at letter-name match");
                for state in &mut states {
                    state.status = WordStatus::Correct;
                }
                return aggregate(states, total_words, 1);
            }
        }
    }

    let norm_words: Vec<String> = words.iter().map(|w| text.normalize(w)).collect();
    let norm_spoken: Vec<String> = spoken.iter().map(|t| text.normalize(t)).collect();

    let mut ref_idx = 0;
    let mut spoken_idx = 0;
    let mut streak = 0usize;
    let mut best_streak = 0usize;

    while ref_idx < words.len() && spoken_idx < spoken.len() {
        if waqf[ref_idx] {
            ref_idx += 1;
            continue;
        }

        if norm_spoken[spoken_idx] == norm_words[ref_idx] {
            states[ref_idx].status = WordStatus::Correct;
            streak += 1;
            best_streak = best_streak.max(streak);
            ref_idx += 1;
            spoken_idx += 1;
            continue;
        }

        match lookahead_match(
            &norm_spoken[spoken_idx],
            &norm_words,
            &waqf,
            ref_idx,
            settings.lookahead,
        ) {
            Some(found) => {
                trace!(from = ref_idx, to = found, "recovered via lookahead");
                // The reciter jumped ahead; everything recitable in
                // between was skipped, not mispronounced.
                for skipped in ref_idx..found {
                    if !waqf[skipped] {
                        states[skipped].status = WordStatus::Wrong { recited: None };
                    }
                }
                states[found].status = WordStatus::Correct;
                streak = 1;
                best_streak = best_streak.max(streak);
                ref_idx = found + 1;
                spoken_idx += 1;
            }
            None => {
                states[ref_idx].status = WordStatus::Wrong {
                    recited: Some(spoken[spoken_idx].clone()),
                };
                streak = 0;
                ref_idx += 1;
                spoken_idx += 1;
            }
        }
    }

    while ref_idx < words.len() && waqf[ref_idx] {
        ref_idx += 1;
    }
    if ref_idx < words.len() {
        states[ref_idx].status = WordStatus::Current;
    }

    aggregate(states, total_words, best_streak)
}

/// Scan up to `budget` recitable positions past `from` for the spoken
/// word. Interleaved pause marks are stepped over without spending budget.
fn lookahead_match(
    spoken: &str,
    norm_words: &[String],
    waqf: &[bool],
    from: usize,
    mut budget: usize,
) -> Option<usize> {
    let mut idx = from + 1;
    while budget > 0 && idx < norm_words.len() {
        if waqf[idx] {
            idx += 1;
            continue;
        }
        if norm_words[idx] == spoken {
            return Some(idx);
        }
        budget -= 1;
        idx += 1;
    }
    None
}

/// Snapshot for an ayah nothing has been recited against yet.
fn initial_result(
    mut states: Vec<WordState>,
    waqf: &[bool],
    total_words: usize,
) -> TrackingResult {
    let mut current_key = None;
    if let Some(idx) = waqf.iter().position(|&mark| !mark) {
        states[idx].status = WordStatus::Current;
        current_key = Some(states[idx].key.clone());
    }
    let correct_keys = states
        .iter()
        .filter(|s| s.status == WordStatus::Correct)
        .map(|s| s.key.clone())
        .collect();

    TrackingResult {
        word_states: states,
        correct_keys,
        mistakes: Vec::new(),
        current_key,
        progress: 0,
        accuracy: 0,
        words_completed: 0,
        total_words,
        best_streak: 0,
        is_complete: false,
    }
}
