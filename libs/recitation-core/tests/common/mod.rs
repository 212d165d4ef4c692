//! Shared test normalizer approximating the host application's rules.

use recitation_core::TextNormalizer;

/// Uthmani-script normalizer used across the integration tests.
///
/// Applies the same reconciliation the host performs between mushaf text
/// and recognizer output: strip tashkeel and Quranic annotation signs,
/// unify alef variants, alef maqsura to ya, ta marbuta to ha, and drop
/// anything that is not a letter.
pub struct UthmaniNormalizer;

impl TextNormalizer for UthmaniNormalizer {
    fn normalize(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                // Tashkeel, tatweel, superscript alef, small high signs.
                '\u{064B}'..='\u{065F}'
                | '\u{0670}'
                | '\u{0640}'
                | '\u{06D6}'..='\u{06DC}'
                | '\u{06DF}'..='\u{06E8}'
                | '\u{06EA}'..='\u{06ED}' => {}
                // Alef variants to bare alef.
                '\u{0622}' | '\u{0623}' | '\u{0625}' | '\u{0671}' => out.push('\u{0627}'),
                // Alef maqsura to ya, ta marbuta to ha.
                '\u{0649}' => out.push('\u{064A}'),
                '\u{0629}' => out.push('\u{0647}'),
                c if c.is_alphabetic() || c.is_whitespace() => out.push(c),
                _ => {}
            }
        }
        out.trim().to_string()
    }

    fn tokenize(&self, transcript: &str) -> Vec<String> {
        transcript
            .split_whitespace()
            .filter(|t| !self.normalize(t).is_empty())
            .map(str::to_string)
            .collect()
    }
}
