pub mod extractor;
pub mod normalizer;
pub mod output;
pub mod segmenter;
pub mod sentence;
pub mod stats;

// Re-export main types for convenient access
pub use extractor::{ExtractStats, ExtractorConfig, StreamingExtractor};
pub use normalizer::{word_cmp, WordNormalizer};
pub use output::{CsvWriter, SentenceSink, XmlWriter};
pub use segmenter::{SentenceSegmenter, Span};
pub use sentence::Sentence;
pub use stats::RunStats;
