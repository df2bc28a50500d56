// Streaming XML writer for the sentence tree. The document must be
// opened before any batch is accepted; closing writes the root end
// tag and flushes.

use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

use super::SentenceSink;
use crate::sentence::Sentence;

/// Writes `<text><sentence><word>…` with standard entity escaping.
pub struct XmlWriter {
    writer: BufWriter<File>,
    document_started: bool,
}

impl XmlWriter {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("failed to create XML output file {}", path.display()))?;
        Ok(Self {
            writer: BufWriter::new(file),
            document_started: false,
        })
    }

    /// Emit the XML declaration and the root start tag. Idempotent;
    /// must be called before the first batch.
    pub fn open_document(&mut self) -> Result<()> {
        if !self.document_started {
            self.writer
                .write_all(b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<text>\n")?;
            self.document_started = true;
        }
        Ok(())
    }

    /// Write the root end tag and flush the stream.
    pub fn close_document(&mut self) -> Result<()> {
        if self.document_started {
            self.writer.write_all(b"</text>\n")?;
            self.writer.flush().context("failed to flush XML output")?;
            debug!("XML document closed");
        }
        Ok(())
    }
}

impl SentenceSink for XmlWriter {
    fn write_batch(&mut self, batch: &[Sentence]) -> Result<()> {
        if !self.document_started {
            bail!("XML document must be opened before writing sentences");
        }

        let mut line = String::new();
        for sentence in batch {
            line.clear();
            line.push_str("<sentence>");
            for word in sentence.words() {
                line.push_str("<word>");
                escape_into(&mut line, word);
                line.push_str("</word>");
            }
            line.push_str("</sentence>\n");
            self.writer.write_all(line.as_bytes())?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Escape text content per the XML 1.0 predefined entities.
fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
