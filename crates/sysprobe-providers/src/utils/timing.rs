//! Microsecond timing for benchmark samples

use std::time::Instant;

use crate::constants::MICROS_PER_SEC;

/// Stopwatch started at construction
///
/// ```ignore
/// let timer = TimedOperation::start();
/// file.write_all(&buffer)?;
/// tally.record(buffer.len() as u64, timer.elapsed_micros());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TimedOperation {
    start: Instant,
}

impl TimedOperation {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Whole microseconds since start, saturating
    pub fn elapsed_micros(&self) -> u64 {
        u64::try_from(self.start.elapsed().as_micros()).unwrap_or(u64::MAX)
    }
}

/// Bytes moved and time spent over a throughput run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThroughputTally {
    bytes: u64,
    micros: u64,
    samples: u32,
}

impl ThroughputTally {
    /// Add one timed transfer
    pub fn record(&mut self, bytes: u64, micros: u64) {
        self.bytes = self.bytes.saturating_add(bytes);
        self.micros = self.micros.saturating_add(micros);
        self.samples += 1;
    }

    pub fn bytes(&self) -> u64 {
        self.bytes
    }

    pub fn micros(&self) -> u64 {
        self.micros
    }

    /// Number of recorded transfers
    pub fn samples(&self) -> u32 {
        self.samples
    }

    /// Average throughput in bytes per second
    pub fn bytes_per_second(&self) -> u64 {
        bytes_per_second(self.bytes, self.micros)
    }
}

/// Throughput in bytes per second; a zero duration counts as one microsecond
pub fn bytes_per_second(total_bytes: u64, total_micros: u64) -> u64 {
    let micros = u128::from(total_micros.max(1));
    let speed = u128::from(total_bytes) * u128::from(MICROS_PER_SEC) / micros;
    u64::try_from(speed).unwrap_or(u64::MAX)
}
