use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use wordgrid::extractor::{ExtractorConfig, StreamingExtractor};
use wordgrid::output::{CsvWriter, SentenceSink, XmlWriter};
use wordgrid::stats::RunStats;

#[derive(Parser, Debug)]
#[command(name = "wordgrid")]
#[command(about = "Splits text into sentences and writes sorted words as XML and CSV")]
#[command(version)]
struct Args {
    /// Input text file
    #[arg(default_value = "sample/small.in")]
    input_file: PathBuf,

    /// Directory for the XML and CSV output files
    #[arg(default_value = "out")]
    output_dir: PathBuf,

    /// Bytes read from the input per extraction cycle
    #[arg(long, default_value_t = 10240)]
    chunk_size: usize,

    /// Write a JSON run summary to this path
    #[arg(long)]
    stats_out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let args = Args::parse();

    info!("Starting wordgrid");
    info!(?args, "Parsed CLI arguments");

    // Fail before any output file is created
    if !args.input_file.exists() {
        anyhow::bail!("Input file not found: {}", args.input_file.display());
    }

    std::fs::create_dir_all(&args.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            args.output_dir.display()
        )
    })?;

    let stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let xml_path = args.output_dir.join(format!("{stem}.xml"));
    let csv_path = args.output_dir.join(format!("{stem}.csv"));

    info!("Input file: {}", args.input_file.display());
    info!("XML output: {}", xml_path.display());
    info!("CSV output: {}", csv_path.display());

    let start = std::time::Instant::now();
    let config = ExtractorConfig {
        chunk_size: args.chunk_size,
    };
    let mut extractor = StreamingExtractor::open(&args.input_file, config).await?;
    let mut xml_writer = XmlWriter::create(&xml_path)?;
    let mut csv_writer = CsvWriter::create(&csv_path)?;

    xml_writer.open_document()?;

    let mut total_sentences = 0u64;
    let mut total_words = 0u64;

    // Each batch is flushed to both sinks before the next read cycle
    loop {
        let batch = extractor.next_batch().await?;
        if batch.is_empty() {
            if extractor.is_drained() {
                break;
            }
            // A chunk can complete zero sentences; keep reading
            continue;
        }

        total_sentences += batch.len() as u64;
        total_words += batch.iter().map(|s| s.word_count() as u64).sum::<u64>();

        xml_writer.write_batch(&batch)?;
        csv_writer.write_batch(&batch)?;
    }

    xml_writer.close_document()?;
    csv_writer.finish()?;

    let duration_ms = start.elapsed().as_millis() as u64;
    let extract_stats = extractor.stats().clone();

    info!(
        "Finished: {} sentences, {} words from {} chunks ({} bytes) in {}ms",
        total_sentences, total_words, extract_stats.chunks_read, extract_stats.bytes_read, duration_ms
    );
    println!("Processed {total_sentences} sentences ({total_words} words)");
    println!("XML written to {}", xml_path.display());
    println!("CSV written to {}", csv_path.display());

    if let Some(stats_path) = args.stats_out {
        let run_stats = RunStats {
            input_path: args.input_file.display().to_string(),
            sentences: total_sentences,
            words: total_words,
            chunks_read: extract_stats.chunks_read,
            bytes_read: extract_stats.bytes_read,
            duration_ms,
            bytes_per_sec: RunStats::throughput(extract_stats.bytes_read, duration_ms),
        };
        let json = serde_json::to_string_pretty(&run_stats)?;
        std::fs::write(&stats_path, json)
            .with_context(|| format!("failed to write stats file {}", stats_path.display()))?;
        info!("Run stats written to {}", stats_path.display());
    }

    Ok(())
}
