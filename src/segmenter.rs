// Rule-based sentence boundary detection over the extractor's rolling
// buffer. A boundary is a terminator run followed by whitespace, with
// dictionary lookbehind so preserved abbreviations never split.

use anyhow::Result;
use regex_automata::meta::Regex;
use tracing::debug;

use crate::normalizer::AbbreviationChecker;

/// Byte-offset range of one detected sentence within a buffer
/// snapshot, covering the trailing terminator and whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Detects sentence spans in buffered text.
///
/// The boundary pattern is a terminator run (`.`, `?`, `!`) with an
/// optional closing quote or bracket, followed by at least one
/// whitespace character. Requiring the whitespace keeps detection
/// chunk-safe: a terminator at the very end of the buffer stays
/// pending until more input arrives or the stream is drained.
pub struct SentenceSegmenter {
    boundary: Regex,
    abbreviations: AbbreviationChecker,
}

impl SentenceSegmenter {
    pub fn new() -> Result<Self> {
        let boundary = Regex::new(r#"[.!?]+["')\]]*\s+"#)?;
        Ok(Self {
            boundary,
            abbreviations: AbbreviationChecker::new(),
        })
    }

    /// Return non-overlapping sentence spans with strictly advancing
    /// starts. The last span's end is a safe truncation point: no
    /// sentence starting before it can still be completed by unread
    /// text.
    pub fn segment(&self, text: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        let mut start = 0;

        for m in self.boundary.find_iter(text) {
            let candidate = &text[start..m.end()];

            // Punctuation/whitespace noise carries no sentence; leave
            // it attached to whatever text follows.
            if !candidate.chars().any(char::is_alphanumeric) {
                continue;
            }

            // Terminator belongs to an abbreviation, not a boundary
            if self.abbreviations.ends_with_abbreviation(candidate.trim_end()) {
                continue;
            }

            spans.push(Span {
                start,
                end: m.end(),
            });
            start = m.end();
        }

        debug!("segmented {} sentence spans from {} bytes", spans.len(), text.len());
        spans
    }
}
