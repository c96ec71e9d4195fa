//! # Sysprobe Providers
//!
//! Native implementation of the [`Backend`](sysprobe_domain::Backend) port.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`system`] | sysinfo-based system snapshot collector |
//! | [`disk`] | 4K throughput and latency benchmarks |
//! | [`native`] | `NativeBackend`, composing both behind the port |
//! | [`utils`] | Timing helpers |
//!
//! Measurements are blocking filesystem and OS calls. `NativeBackend` moves
//! them onto tokio's blocking pool so concurrent requests stay independent.

pub mod constants;
pub mod disk;
pub mod native;
pub mod system;
pub mod utils;

pub use disk::{BenchmarkConfig, DiskBenchmark, LastMeasurements, MeasurementSnapshot};
pub use native::NativeBackend;
pub use system::{SystemInfoCollector, SystemInfoConfig};
