// Streaming extraction loop: owns the input handle and the rolling
// buffer, reads fixed-size chunks, reconciles segmenter spans with
// buffer state, and drains leftover text at end of stream.

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

use crate::normalizer::WordNormalizer;
use crate::segmenter::SentenceSegmenter;
use crate::sentence::Sentence;

/// Configuration for chunked extraction behavior
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Bytes read from the input per extraction cycle
    pub chunk_size: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self { chunk_size: 10240 }
    }
}

/// Counters for one extraction run
#[derive(Debug, Clone, Default)]
pub struct ExtractStats {
    pub chunks_read: u64,
    pub bytes_read: u64,
    pub sentences_emitted: u64,
}

/// Pull-based sentence extractor over a chunked input stream.
///
/// Each `next_batch` call performs one read-segment-emit cycle and
/// returns the fully recognized sentences. Memory stays bounded by
/// the chunk size plus at most one pending partial sentence. After
/// end of input, remaining buffer text is drained as a final sentence
/// so trailing text without terminal punctuation is never dropped;
/// once the buffer is empty every further call returns an empty
/// batch. The file handle and buffer are released on drop.
pub struct StreamingExtractor {
    file: File,
    chunk: Vec<u8>,
    /// Incomplete UTF-8 sequence cut by the previous chunk boundary (at most 3 bytes)
    carry: Vec<u8>,
    buffer: String,
    eof_reached: bool,
    segmenter: SentenceSegmenter,
    normalizer: WordNormalizer,
    stats: ExtractStats,
}

impl StreamingExtractor {
    /// Open the input file and compile the boundary pattern. Fails
    /// before any read when the file is missing or the pattern cannot
    /// be built.
    pub async fn open<P: AsRef<Path>>(path: P, config: ExtractorConfig) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .await
            .with_context(|| format!("failed to open input file {}", path.display()))?;

        info!("Opened input file {} (chunk size {})", path.display(), config.chunk_size);

        Ok(Self {
            file,
            chunk: vec![0u8; config.chunk_size],
            carry: Vec::new(),
            buffer: String::new(),
            eof_reached: false,
            segmenter: SentenceSegmenter::new()?,
            normalizer: WordNormalizer::new(),
            stats: ExtractStats::default(),
        })
    }

    pub fn stats(&self) -> &ExtractStats {
        &self.stats
    }

    /// True once end of input was reached and the buffer fully flushed.
    pub fn is_drained(&self) -> bool {
        self.eof_reached && self.buffer.is_empty()
    }

    /// Run one read-segment-emit cycle and return the batch of
    /// sentences completed by it. An empty batch while `is_drained`
    /// is the termination signal; calling again keeps returning empty
    /// batches.
    pub async fn next_batch(&mut self) -> Result<Vec<Sentence>> {
        if self.is_drained() {
            return Ok(Vec::new());
        }

        if !self.eof_reached {
            let n = self
                .file
                .read(&mut self.chunk)
                .await
                .context("failed to read from input file")?;
            if n == 0 {
                self.eof_reached = true;
                if !self.carry.is_empty() {
                    anyhow::bail!("input ended inside a multi-byte UTF-8 sequence");
                }
            } else {
                self.stats.chunks_read += 1;
                self.stats.bytes_read += n as u64;
                self.append_chunk(n)?;
            }
        }

        let mut batch = Vec::new();
        let spans = self.segmenter.segment(&self.buffer);
        let mut consumed = 0;

        for span in &spans {
            let text = self.buffer[span.start..span.end].trim();
            if !text.is_empty() {
                if let Some(sentence) = Sentence::new(self.normalizer.extract_words(text)) {
                    batch.push(sentence);
                }
            }
            consumed = span.end;
        }

        if consumed > 0 {
            self.buffer.drain(..consumed);
        } else if self.eof_reached && !self.buffer.is_empty() {
            // Final flush: whatever is left forms one last sentence
            let remaining = self.buffer.trim();
            if !remaining.is_empty() {
                if let Some(sentence) = Sentence::new(self.normalizer.extract_words(remaining)) {
                    batch.push(sentence);
                }
            }
            self.buffer.clear();
        }

        self.stats.sentences_emitted += batch.len() as u64;
        debug!(
            "extraction cycle: {} sentences, {} bytes pending",
            batch.len(),
            self.buffer.len()
        );
        Ok(batch)
    }

    /// Append `chunk[..n]` to the buffer, holding back an incomplete
    /// trailing UTF-8 sequence until the next read completes it.
    fn append_chunk(&mut self, n: usize) -> Result<()> {
        let bytes: Vec<u8> = if self.carry.is_empty() {
            self.chunk[..n].to_vec()
        } else {
            let mut joined = std::mem::take(&mut self.carry);
            joined.extend_from_slice(&self.chunk[..n]);
            joined
        };

        match std::str::from_utf8(&bytes) {
            Ok(text) => self.buffer.push_str(text),
            Err(e) => {
                if e.error_len().is_some() {
                    anyhow::bail!(
                        "input is not valid UTF-8 near byte offset {}",
                        self.stats.bytes_read - (bytes.len() - e.valid_up_to()) as u64
                    );
                }
                let valid = std::str::from_utf8(&bytes[..e.valid_up_to()])?;
                self.buffer.push_str(valid);
                self.carry = bytes[e.valid_up_to()..].to_vec();
            }
        }
        Ok(())
    }
}
