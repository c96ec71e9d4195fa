//! Last measured benchmark values

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Most recent result of each disk measurement
///
/// Every completed measurement overwrites the previous value. Concurrent
/// runs race and the last writer wins.
#[derive(Debug)]
pub struct LastMeasurements {
    read_speed: AtomicU64,
    write_speed: AtomicU64,
    read_delay_micros: AtomicU64,
    write_delay_micros: AtomicU64,
}

/// Copy of [`LastMeasurements`] at one instant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MeasurementSnapshot {
    /// 4K read throughput in bytes per second
    pub read_speed: Option<u64>,
    /// 4K write throughput in bytes per second
    pub write_speed: Option<u64>,
    /// First-byte read latency in microseconds
    pub read_delay_micros: Option<u64>,
    /// Single-byte write latency in microseconds
    pub write_delay_micros: Option<u64>,
}

/// Marker for a value that was never measured
const UNSET: u64 = u64::MAX;

impl LastMeasurements {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            read_speed: AtomicU64::new(UNSET),
            write_speed: AtomicU64::new(UNSET),
            read_delay_micros: AtomicU64::new(UNSET),
            write_delay_micros: AtomicU64::new(UNSET),
        }
    }

    pub fn record_read_speed(&self, bytes_per_sec: u64) {
        self.read_speed.store(bytes_per_sec, Ordering::SeqCst);
    }

    pub fn record_write_speed(&self, bytes_per_sec: u64) {
        self.write_speed.store(bytes_per_sec, Ordering::SeqCst);
    }

    pub fn record_read_delay(&self, micros: u64) {
        self.read_delay_micros.store(micros, Ordering::SeqCst);
    }

    pub fn record_write_delay(&self, micros: u64) {
        self.write_delay_micros.store(micros, Ordering::SeqCst);
    }

    /// Read all values
    pub fn snapshot(&self) -> MeasurementSnapshot {
        let load = |value: &AtomicU64| Some(value.load(Ordering::SeqCst)).filter(|v| *v != UNSET);
        MeasurementSnapshot {
            read_speed: load(&self.read_speed),
            write_speed: load(&self.write_speed),
            read_delay_micros: load(&self.read_delay_micros),
            write_delay_micros: load(&self.write_delay_micros),
        }
    }
}

impl Default for LastMeasurements {
    fn default() -> Self {
        Self::new()
    }
}
