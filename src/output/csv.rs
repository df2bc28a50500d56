// Two-pass CSV writer. Sentence rows go to a temp file while the
// running maximum word count is tracked; the final file is rendered
// on finish with a header sized to the observed maximum. Avoids
// knowing the widest sentence before the first row is written.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::SentenceSink;
use crate::sentence::Sentence;

pub const DELIMITER: &str = ", ";

#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Renders one row per sentence: `Sentence <k>, <word1>, <word2>, …`
/// under a header of `Word 1 … Word N` columns.
pub struct CsvWriter {
    output_path: PathBuf,
    temp: NamedTempFile,
    max_words: usize,
    sentence_count: usize,
}

impl CsvWriter {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let temp = NamedTempFile::new().context("failed to create CSV temp file")?;
        debug!("writing sentence rows to temp file {}", temp.path().display());
        Ok(Self {
            output_path: path.as_ref().to_path_buf(),
            temp,
            max_words: 0,
            sentence_count: 0,
        })
    }

    /// Render the final CSV file from the accumulated rows. The temp
    /// file is removed when the writer is consumed.
    pub fn finish(mut self) -> Result<()> {
        self.temp.flush()?;
        debug!(
            "rendering final CSV: {} sentences, {} max words",
            self.sentence_count, self.max_words
        );

        let temp_reader = BufReader::new(
            self.temp
                .reopen()
                .context("failed to reopen CSV temp file")?,
        );
        let output = File::create(&self.output_path).with_context(|| {
            format!(
                "failed to create CSV output file {}",
                self.output_path.display()
            )
        })?;
        let mut writer = BufWriter::new(output);

        if self.max_words > 0 {
            for i in 1..=self.max_words {
                write!(writer, "{}Word {}", DELIMITER, i)?;
            }
            writer.write_all(LINE_ENDING.as_bytes())?;
        }

        for (index, row) in temp_reader.lines().enumerate() {
            let row = row.context("failed to read CSV temp row")?;
            let row = decode_temp_row(&row);
            write!(writer, "Sentence {}{}{}{}", index + 1, DELIMITER, row, LINE_ENDING)?;
        }

        writer.flush().context("failed to flush CSV output")?;
        info!(
            "wrote CSV output {} ({} sentences)",
            self.output_path.display(),
            self.sentence_count
        );
        Ok(())
    }
}

impl SentenceSink for CsvWriter {
    fn write_batch(&mut self, batch: &[Sentence]) -> Result<()> {
        for sentence in batch {
            if sentence.word_count() > self.max_words {
                self.max_words = sentence.word_count();
            }

            let row = sentence
                .words()
                .iter()
                .map(|word| escape_field(word))
                .collect::<Vec<_>>()
                .join(DELIMITER);
            // Temp rows are one line per sentence with \n terminators;
            // newlines embedded in quoted fields are encoded so the
            // line-oriented re-read in finish() cannot split a field
            writeln!(self.temp, "{}", encode_temp_row(&row))?;
            self.sentence_count += 1;
        }
        self.temp.flush()?;
        Ok(())
    }
}

/// Double-quote a field containing a comma, quote, or newline, with
/// internal quotes doubled.
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Encode a rendered row for single-line temp storage: backslashes
/// and embedded newlines become escape sequences.
fn encode_temp_row(row: &str) -> String {
    row.replace('\\', "\\\\").replace('\n', "\\n")
}

/// Inverse of `encode_temp_row`.
fn decode_temp_row(row: &str) -> String {
    let mut out = String::with_capacity(row.len());
    let mut chars = row.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
