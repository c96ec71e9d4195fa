//! Disk benchmark configuration types

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BATCH_SIZE, DEFAULT_MAX_FILE_SIZE, DEFAULT_MIN_FILE_SIZE, DEFAULT_PROBE_FILE_NAME,
    DEFAULT_SCRATCH_DIR_NAME,
};

/// Disk benchmark configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Files written (and reads performed) per throughput run
    pub batch_size: u32,

    /// Smallest random file size in bytes (inclusive)
    pub min_file_size: u64,

    /// Largest random file size in bytes (exclusive)
    pub max_file_size: u64,

    /// Name prefix of the per-run scratch directory created under the measured path
    pub scratch_dir_name: String,

    /// Name prefix of the per-run probe file created under the measured path
    pub probe_file_name: String,

    /// Read the first scratch file between writes so the disk head moves away
    pub seek_between_writes: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            min_file_size: DEFAULT_MIN_FILE_SIZE,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            scratch_dir_name: DEFAULT_SCRATCH_DIR_NAME.to_string(),
            probe_file_name: DEFAULT_PROBE_FILE_NAME.to_string(),
            seek_between_writes: true,
        }
    }
}
