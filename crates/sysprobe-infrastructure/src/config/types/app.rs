//! Main application configuration

use serde::{Deserialize, Serialize};
pub use sysprobe_providers::{BenchmarkConfig, SystemInfoConfig};

use super::logging::LoggingConfig;
use super::shell::ShellConfig;

/// Root configuration
///
/// Every section falls back to its defaults, so an empty file is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Disk benchmark configuration
    pub benchmark: BenchmarkConfig,
    /// System snapshot configuration
    pub system: SystemInfoConfig,
    /// Application shell configuration
    pub shell: ShellConfig,
}
