//! Disk benchmarks
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`benchmark`] | 4K throughput and latency measurements |
//! | [`config`] | Benchmark settings |
//! | [`measurements`] | Last measured values |
//! | [`scratch`] | Self-removing scratch files and directories |

pub mod benchmark;
pub mod config;
pub mod measurements;
pub mod scratch;

pub use benchmark::DiskBenchmark;
pub use config::BenchmarkConfig;
pub use measurements::{LastMeasurements, MeasurementSnapshot};
pub use scratch::ScratchPath;
