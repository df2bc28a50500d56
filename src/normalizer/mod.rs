// Word extraction for detected sentences: rule-based tokenization,
// punctuation stripping with an abbreviation allow-list, and the
// two-level sort order used by both output formats.

pub mod abbreviations;

pub use abbreviations::AbbreviationChecker;

use std::cmp::Ordering;

/// Punctuation characters stripped from token edges and split off as
/// standalone punctuation tokens.
const TOKEN_PUNCTUATION: &[char] = &['.', ',', '!', '?', ':', ';', '(', ')', '"', '\''];

fn is_token_punct(c: char) -> bool {
    TOKEN_PUNCTUATION.contains(&c)
}

/// Turns a raw sentence substring into a sorted list of cleaned,
/// non-empty word tokens.
pub struct WordNormalizer {
    abbreviations: AbbreviationChecker,
}

impl WordNormalizer {
    pub fn new() -> Self {
        Self {
            abbreviations: AbbreviationChecker::new(),
        }
    }

    /// Split a sentence into atomic tokens: words (contractions like
    /// "It's" kept whole), preserved abbreviations, and leading/trailing
    /// punctuation runs as separate tokens.
    pub fn tokenize<'a>(&self, sentence: &'a str) -> Vec<&'a str> {
        let mut tokens = Vec::new();
        for chunk in sentence.split_whitespace() {
            if self.abbreviations.is_preserved(chunk) {
                tokens.push(chunk);
                continue;
            }
            let Some(start) = chunk.find(|c: char| !is_token_punct(c)) else {
                // Chunk is a bare punctuation run
                tokens.push(chunk);
                continue;
            };
            // find() succeeded, so rfind() must as well
            let end = chunk
                .rfind(|c: char| !is_token_punct(c))
                .map(|i| i + chunk[i..].chars().next().map(char::len_utf8).unwrap_or(0))
                .unwrap_or(chunk.len());
            if start > 0 {
                tokens.push(&chunk[..start]);
            }
            tokens.push(&chunk[start..end]);
            if end < chunk.len() {
                tokens.push(&chunk[end..]);
            }
        }
        tokens
    }

    /// Tokenize, clean, and sort one sentence. The result may be empty
    /// when every token was punctuation-only; callers must not build a
    /// sentence from an empty list.
    pub fn extract_words(&self, sentence: &str) -> Vec<String> {
        let mut words: Vec<String> = self
            .tokenize(sentence)
            .into_iter()
            .filter_map(|token| {
                if self.abbreviations.is_preserved(token) {
                    return Some(token.to_string());
                }
                if token == "-" {
                    return None;
                }
                let stripped = token.trim_matches(is_token_punct);
                if stripped.is_empty() {
                    None
                } else {
                    Some(stripped.to_string())
                }
            })
            .collect();
        words.sort_by(|a, b| word_cmp(a, b));
        words
    }
}

impl Default for WordNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Two-level word ordering: case-insensitive comparison first; on a
/// tie, a lowercase first character sorts before an uppercase one; if
/// first-character case matches too, plain codepoint order decides.
pub fn word_cmp(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    if folded != Ordering::Equal {
        return folded;
    }

    let a_upper = a.chars().next().map(char::is_uppercase).unwrap_or(false);
    let b_upper = b.chars().next().map(char::is_uppercase).unwrap_or(false);

    match (a_upper, b_upper) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => a.cmp(b),
    }
}
