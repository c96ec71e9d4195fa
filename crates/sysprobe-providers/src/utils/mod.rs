//! Measurement helpers

pub mod timing;

pub use timing::{ThroughputTally, TimedOperation, bytes_per_second};
