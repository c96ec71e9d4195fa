//! Provider constants
//!
//! Defaults for the disk benchmarks. All of them can be overridden through
//! [`BenchmarkConfig`](crate::disk::BenchmarkConfig).

/// Number of files written and read per throughput run
pub const DEFAULT_BATCH_SIZE: u32 = 200;

/// Smallest benchmark file in bytes (inclusive)
pub const DEFAULT_MIN_FILE_SIZE: u64 = 1024;

/// Largest benchmark file in bytes (exclusive)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 4096;

/// Scratch directory created under the measured path
pub const DEFAULT_SCRATCH_DIR_NAME: &str = ".copy_test";

/// Probe file created under the measured path for write latency
pub const DEFAULT_PROBE_FILE_NAME: &str = ".copy_test.bin";

/// Extension of benchmark files inside the scratch directory
pub const BENCH_FILE_EXTENSION: &str = "bin";

/// Microseconds per second
pub const MICROS_PER_SEC: u64 = 1_000_000;

/// Microseconds per millisecond
pub const MICROS_PER_MILLI: f64 = 1_000.0;
