// Centralized abbreviation handling shared by the tokenizer and the
// sentence segmenter. A token on this list keeps its trailing period
// and never ends a sentence.

use std::collections::HashSet;

/// Title abbreviations preserved verbatim, trailing period included.
pub const PRESERVED_ABBREVIATIONS: &[&str] = &["Mr.", "Mrs.", "Ms."];

/// HashSet-backed lookup for the preserved abbreviation set.
pub struct AbbreviationChecker {
    preserved: HashSet<&'static str>,
}

impl AbbreviationChecker {
    pub fn new() -> Self {
        Self {
            preserved: PRESERVED_ABBREVIATIONS.iter().copied().collect(),
        }
    }

    /// Check if a token is a preserved abbreviation (exact match).
    pub fn is_preserved(&self, token: &str) -> bool {
        self.preserved.contains(token)
    }

    /// Check if text ends with a preserved abbreviation.
    /// Used as boundary lookbehind: a terminator that belongs to an
    /// abbreviation must not split the sentence.
    pub fn ends_with_abbreviation(&self, text: &str) -> bool {
        text.split_whitespace()
            .last()
            .map(|word| self.is_preserved(word))
            .unwrap_or(false)
    }
}

impl Default for AbbreviationChecker {
    fn default() -> Self {
        Self::new()
    }
}
