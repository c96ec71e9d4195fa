//! System snapshot value object

use serde::{Deserialize, Serialize};

/// Point-in-time system snapshot
///
/// Every request produces a fresh, independent snapshot. Nothing is cached
/// or updated after retrieval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Operating system name and version, e.g. `"Ubuntu 24.04"`
    pub os: String,
    /// Number of logical CPU cores
    pub cpu_cores: usize,
    /// CPU usage in percent, summed over all cores
    pub cpu_usage: f32,
    /// Total memory in bytes
    pub total_memory: u64,
    /// Used memory in bytes
    pub used_memory: u64,
}

impl SystemInfo {
    /// Used memory as a percentage of total memory
    pub fn memory_usage_percent(&self) -> f64 {
        if self.total_memory == 0 {
            return 0.0;
        }
        self.used_memory as f64 / self.total_memory as f64 * 100.0
    }

    /// CPU usage normalized to a single 0-100 scale
    pub fn average_cpu_usage(&self) -> f32 {
        if self.cpu_cores == 0 {
            return 0.0;
        }
        self.cpu_usage / self.cpu_cores as f32
    }
}
