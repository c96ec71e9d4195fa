//! System snapshot collector using the sysinfo crate

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};
use sysprobe_domain::SystemInfo;
use sysprobe_domain::constants::UNKNOWN_OS_PART;
use tracing::debug;

/// OS name and version never change while the process runs
static OS_IDENTIFIER: Lazy<String> = Lazy::new(|| {
    let name = System::name().unwrap_or_else(|| UNKNOWN_OS_PART.to_string());
    let version = System::os_version().unwrap_or_else(|| UNKNOWN_OS_PART.to_string());
    format!("{name} {version}")
});

/// Operating system identifier, e.g. `"Ubuntu 24.04"`
pub fn os_identifier() -> &'static str {
    OS_IDENTIFIER.as_str()
}

/// System snapshot settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemInfoConfig {
    /// Take a second CPU reading after sysinfo's minimum update interval
    ///
    /// A single reading right after `System` creation reports zero usage on
    /// most platforms.
    pub sample_cpu: bool,
}

impl Default for SystemInfoConfig {
    fn default() -> Self {
        Self { sample_cpu: true }
    }
}

/// Collects fresh [`SystemInfo`] snapshots
///
/// Each call creates its own `System`; no state is shared between
/// snapshots. Collection blocks the calling thread, so run it on a
/// blocking pool.
#[derive(Debug, Clone, Default)]
pub struct SystemInfoCollector {
    config: SystemInfoConfig,
}

impl SystemInfoCollector {
    /// Create a collector with the given settings
    pub fn new(config: SystemInfoConfig) -> Self {
        Self { config }
    }

    /// Collect one snapshot
    pub fn collect(&self) -> SystemInfo {
        let mut sys = System::new_with_specifics(
            RefreshKind::nothing()
                .with_cpu(CpuRefreshKind::everything())
                .with_memory(MemoryRefreshKind::everything()),
        );

        sys.refresh_cpu_all();
        if self.config.sample_cpu {
            std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
            sys.refresh_cpu_all();
        }
        sys.refresh_memory();

        let cpus = sys.cpus();
        let info = SystemInfo {
            os: os_identifier().to_string(),
            cpu_cores: cpus.len(),
            cpu_usage: cpus.iter().map(sysinfo::Cpu::cpu_usage).sum(),
            total_memory: sys.total_memory(),
            used_memory: sys.used_memory(),
        };

        debug!(
            cpu_cores = info.cpu_cores,
            cpu_usage = info.cpu_usage,
            used_memory = info.used_memory,
            "System snapshot collected"
        );
        info
    }
}
