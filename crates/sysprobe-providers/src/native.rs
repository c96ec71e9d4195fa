//! Native backend
//!
//! Implements the [`Backend`] port on top of the system collector and the
//! disk benchmarks.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use sysprobe_domain::{Backend, BackendError, Command, SystemInfo};
use tracing::{info, warn};

use crate::constants::MICROS_PER_MILLI;
use crate::disk::{BenchmarkConfig, DiskBenchmark, LastMeasurements, MeasurementSnapshot};
use crate::system::{SystemInfoCollector, SystemInfoConfig};

/// Backend performing measurements in the current process
///
/// Each call runs on tokio's blocking pool, so concurrent calls proceed
/// independently and never stall the async executor.
#[derive(Debug, Clone, Default)]
pub struct NativeBackend {
    collector: SystemInfoCollector,
    benchmark: DiskBenchmark,
    measurements: Arc<LastMeasurements>,
}

impl NativeBackend {
    /// Create a backend with the given settings
    pub fn new(system: SystemInfoConfig, benchmark: BenchmarkConfig) -> Self {
        Self {
            collector: SystemInfoCollector::new(system),
            benchmark: DiskBenchmark::new(benchmark),
            measurements: Arc::new(LastMeasurements::new()),
        }
    }

    /// Most recent disk measurement results
    pub fn last_measurements(&self) -> MeasurementSnapshot {
        self.measurements.snapshot()
    }

    async fn run_blocking<T, F>(&self, command: Command, job: F) -> Result<T, BackendError>
    where
        T: Send + 'static,
        F: FnOnce() -> io::Result<T> + Send + 'static,
    {
        match tokio::task::spawn_blocking(job).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                warn!(command = %command, error = %e, "Backend command failed");
                Err(BackendError::execution(command.as_str(), e.to_string()))
            }
            Err(e) => Err(BackendError::execution(
                command.as_str(),
                format!("measurement task aborted: {e}"),
            )),
        }
    }
}

fn micros_to_millis(micros: u64) -> f64 {
    micros as f64 / MICROS_PER_MILLI
}

fn owned_path(path: &str) -> PathBuf {
    Path::new(path).to_path_buf()
}

#[async_trait]
impl Backend for NativeBackend {
    async fn get_sys_info(&self) -> Result<SystemInfo, BackendError> {
        let collector = self.collector.clone();
        self.run_blocking(Command::GetSysInfo, move || Ok(collector.collect()))
            .await
    }

    async fn get_4k_read_speed(&self, path: &str) -> Result<u64, BackendError> {
        let benchmark = self.benchmark.clone();
        let target = owned_path(path);
        let speed = self
            .run_blocking(Command::Get4kReadSpeed, move || benchmark.read_speed(&target))
            .await?;
        self.measurements.record_read_speed(speed);
        info!(path, bytes_per_sec = speed, "4K read speed");
        Ok(speed)
    }

    async fn get_4k_write_speed(&self, path: &str) -> Result<u64, BackendError> {
        let benchmark = self.benchmark.clone();
        let target = owned_path(path);
        let speed = self
            .run_blocking(Command::Get4kWriteSpeed, move || {
                benchmark.write_speed(&target)
            })
            .await?;
        self.measurements.record_write_speed(speed);
        info!(path, bytes_per_sec = speed, "4K write speed");
        Ok(speed)
    }

    async fn get_read_delay(&self, path: &str) -> Result<f64, BackendError> {
        let benchmark = self.benchmark.clone();
        let target = owned_path(path);
        let micros = self
            .run_blocking(Command::GetReadDelay, move || {
                benchmark.read_delay_micros(&target)
            })
            .await?;
        self.measurements.record_read_delay(micros);
        info!(path, micros, "Read delay");
        Ok(micros_to_millis(micros))
    }

    async fn get_write_delay(&self, path: &str) -> Result<f64, BackendError> {
        let benchmark = self.benchmark.clone();
        let target = owned_path(path);
        let micros = self
            .run_blocking(Command::GetWriteDelay, move || {
                benchmark.write_delay_micros(&target)
            })
            .await?;
        self.measurements.record_write_delay(micros);
        info!(path, micros, "Write delay");
        Ok(micros_to_millis(micros))
    }
}
