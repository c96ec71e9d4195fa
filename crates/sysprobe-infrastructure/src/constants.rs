//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `sysprobe_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "sysprobe.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "sysprobe";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "SYSPROBE";

/// Separator between nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_FILTER_ENV: &str = "SYSPROBE_LOG";

/// Fallback log file stem when the configured path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "sysprobe";

// ============================================================================
// SHELL CONSTANTS
// ============================================================================

/// Element the application mounts into
pub const DEFAULT_MOUNT_TARGET: &str = "#app";

/// Route opened when none is requested
pub const DEFAULT_START_ROUTE: &str = "/";
