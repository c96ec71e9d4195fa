//! Backend Port
//!
//! Defines the contract for the native process that performs the actual
//! measurements.

use async_trait::async_trait;

use crate::error::BackendError;
use crate::value_objects::SystemInfo;

/// Native diagnostics backend
///
/// Every method is a single, stateless request. Calls may run concurrently
/// and carry no ordering guarantee relative to each other.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Collect a fresh system snapshot
    async fn get_sys_info(&self) -> Result<SystemInfo, BackendError>;

    /// Measure 4K random read throughput at `path`, in bytes per second
    async fn get_4k_read_speed(&self, path: &str) -> Result<u64, BackendError>;

    /// Measure 4K random write throughput at `path`, in bytes per second
    async fn get_4k_write_speed(&self, path: &str) -> Result<u64, BackendError>;

    /// Measure first-byte read latency at `path`, in milliseconds
    async fn get_read_delay(&self, path: &str) -> Result<f64, BackendError>;

    /// Measure single-byte write latency at `path`, in milliseconds
    async fn get_write_delay(&self, path: &str) -> Result<f64, BackendError>;
}
