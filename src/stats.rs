// Run summary serialization for the optional --stats-out flag.

use serde::{Deserialize, Serialize};

/// Metrics for one extraction run, written as JSON when requested.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RunStats {
    /// Input file path as given on the command line
    pub input_path: String,
    /// Total sentences written to both outputs
    pub sentences: u64,
    /// Total words across all sentences
    pub words: u64,
    /// Chunks read from the input
    pub chunks_read: u64,
    /// Bytes read from the input
    pub bytes_read: u64,
    /// Wall-clock runtime in milliseconds
    pub duration_ms: u64,
    /// Input throughput in bytes per second
    pub bytes_per_sec: f64,
}

impl RunStats {
    pub fn throughput(bytes_read: u64, duration_ms: u64) -> f64 {
        if duration_ms > 0 {
            bytes_read as f64 / (duration_ms as f64 / 1000.0)
        } else {
            0.0
        }
    }
}
