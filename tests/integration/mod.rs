// Integration test utilities shared across test files
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use wordgrid::extractor::{ExtractorConfig, StreamingExtractor};
use wordgrid::output::{CsvWriter, SentenceSink, XmlWriter};
use wordgrid::sentence::Sentence;

/// Temp-dir fixture holding one input file plus the two output paths.
pub struct TestFixture {
    pub temp_dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn write_input(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content).expect("Failed to write test input");
        path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }
}

/// Drive the extractor to completion and collect every sentence.
pub async fn extract_sentences(content: &str, chunk_size: usize) -> Vec<Sentence> {
    let fixture = TestFixture::new();
    let input = fixture.write_input("input.txt", content);

    let config = ExtractorConfig { chunk_size };
    let mut extractor = StreamingExtractor::open(&input, config)
        .await
        .expect("Extractor should open");

    let mut sentences = Vec::new();
    loop {
        let batch = extractor.next_batch().await.expect("Extraction should succeed");
        if batch.is_empty() {
            if extractor.is_drained() {
                break;
            }
            continue;
        }
        sentences.extend(batch);
    }
    sentences
}

/// Run the full pipeline into both sinks and return the rendered
/// (xml, csv) file contents.
pub async fn run_pipeline(content: &str, chunk_size: usize) -> (String, String) {
    let fixture = TestFixture::new();
    let input = fixture.write_input("input.txt", content);
    let xml_path = fixture.path("out.xml");
    let csv_path = fixture.path("out.csv");

    let config = ExtractorConfig { chunk_size };
    let mut extractor = StreamingExtractor::open(&input, config)
        .await
        .expect("Extractor should open");
    let mut xml_writer = XmlWriter::create(&xml_path).expect("XML writer should open");
    let mut csv_writer = CsvWriter::create(&csv_path).expect("CSV writer should open");

    xml_writer.open_document().expect("Document open should succeed");

    loop {
        let batch = extractor.next_batch().await.expect("Extraction should succeed");
        if batch.is_empty() {
            if extractor.is_drained() {
                break;
            }
            continue;
        }
        xml_writer.write_batch(&batch).expect("XML write should succeed");
        csv_writer.write_batch(&batch).expect("CSV write should succeed");
    }

    xml_writer.close_document().expect("Document close should succeed");
    csv_writer.finish().expect("CSV finish should succeed");

    let xml = fs::read_to_string(&xml_path).expect("XML output should exist");
    let csv = fs::read_to_string(&csv_path).expect("CSV output should exist");
    (xml, csv)
}
