//! Core types for recitation tracking.

use serde::{Deserialize, Serialize};

/// Verification status of a single reference word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WordStatus {
    /// Not yet reached by the reciter.
    Pending,
    /// The next word expected from the reciter.
    Current,
    /// Recited correctly. Pause marks always carry this status.
    Correct,
    /// Missed or mis-recited.
    Wrong {
        /// What the reciter said instead; `None` when the word was
        /// skipped over rather than substituted.
        #[serde(skip_serializing_if = "Option::is_none")]
        recited: Option<String>,
    },
}

impl Default for WordStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// Per-position verification state, rebuilt from scratch on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordState {
    /// Reference word as it appears in the mushaf.
    pub word: String,
    /// Stable word key from the reference dataset (e.g. "1:1:2").
    pub key: String,
    #[serde(flatten)]
    pub status: WordStatus,
}

/// A mistake entry surfaced to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mistake {
    pub key: String,
    /// The reference word that was missed or mis-recited.
    pub word: String,
    /// The recited word for a substitution; `None` for a skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recited: Option<String>,
}

/// Full alignment snapshot for one ayah and one transcript.
///
/// Every call rebuilds this from its inputs. Callers replace their
/// previous snapshot with the new one instead of patching it, since an
/// interim transcript revision can change any earlier word's status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingResult {
    /// One entry per reference word, in reading order.
    pub word_states: Vec<WordState>,
    /// Keys of words shown as correct, pause marks included.
    pub correct_keys: Vec<String>,
    /// Wrong words with what was recited in their place, if anything.
    pub mistakes: Vec<Mistake>,
    /// Key of the word the reciter should say next.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_key: Option<String>,
    /// Attempted share of recitable words as a rounded percentage.
    pub progress: u8,
    /// Correct share of attempted words as a rounded percentage.
    pub accuracy: u8,
    /// Recitable words attempted so far, correct or wrong.
    pub words_completed: usize,
    /// Recitable words in the ayah; pause marks are not counted.
    pub total_words: usize,
    /// Longest run of consecutively correct words.
    pub best_streak: usize,
    /// Whether every recitable word has been attempted.
    pub is_complete: bool,
}

impl TrackingResult {
    /// Fresh zero-valued result, returned when the reference is unusable.
    pub fn empty() -> Self {
        Self {
            word_states: Vec::new(),
            correct_keys: Vec::new(),
            mistakes: Vec::new(),
            current_key: None,
            progress: 0,
            accuracy: 0,
            words_completed: 0,
            total_words: 0,
            best_streak: 0,
            is_complete: false,
        }
    }
}

/// Tracker tuning parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerSettings {
    /// How many recitable words ahead to search when the spoken word does
    /// not match the expected one.
    pub lookahead: usize,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self { lookahead: 2 }
    }
}
