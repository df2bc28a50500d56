// Output sinks consuming sentence batches. The run loop writes every
// batch to all sinks before the next read cycle, so both artifacts
// list sentences in the same detection order.

pub mod csv;
pub mod xml;

pub use csv::CsvWriter;
pub use xml::XmlWriter;

use anyhow::Result;

use crate::sentence::Sentence;

/// A writer that consumes sentence batches in detection order.
pub trait SentenceSink {
    fn write_batch(&mut self, batch: &[Sentence]) -> Result<()>;
}
