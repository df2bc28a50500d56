/// Immutable ordered list of normalized words for one detected sentence.
///
/// The word order is the normalizer's sort order, not the order of
/// appearance in the source text. A `Sentence` never holds an empty
/// word list and never holds empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    words: Vec<String>,
}

impl Sentence {
    /// Build a sentence from an already-normalized word list.
    /// Returns `None` when the list is empty so punctuation-only
    /// input never produces a sentence.
    pub fn new(words: Vec<String>) -> Option<Self> {
        if words.is_empty() {
            None
        } else {
            Some(Self { words })
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}
