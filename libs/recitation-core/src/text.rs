//! Text processing contract supplied by the host application.
//!
//! Spoken and written Quranic Arabic differ in diacritics, letter shapes,
//! and recognizer quirks. The host application owns the normalization
//! rules that reconcile them; the tracker only ever compares words through
//! this trait, so it can be tested against the contract rather than any
//! one implementation.

/// Normalization and tokenization used for all word comparisons.
pub trait TextNormalizer: Send + Sync {
    /// Canonical comparison form of a word or phrase.
    fn normalize(&self, text: &str) -> String;

    /// Split a raw transcript into spoken words, oldest first.
    fn tokenize(&self, transcript: &str) -> Vec<String>;
}
