//! Domain constants
//!
//! Command names form the wire contract with the native backend and
//! must never change independently of it.

// ============================================================================
// COMMAND NAMES
// ============================================================================

/// Collect a system snapshot
pub const CMD_GET_SYS_INFO: &str = "get_sys_info";

/// Measure 4K random read throughput
pub const CMD_GET_4K_READ_SPEED: &str = "get_4k_read_speed";

/// Measure 4K random write throughput
pub const CMD_GET_4K_WRITE_SPEED: &str = "get_4k_write_speed";

/// Measure first-byte read latency
pub const CMD_GET_READ_DELAY: &str = "get_read_delay";

/// Measure single-byte write latency
pub const CMD_GET_WRITE_DELAY: &str = "get_write_delay";

/// Parameter key carrying the filesystem path
pub const PARAM_PATH: &str = "path";

// ============================================================================
// ROUTES
// ============================================================================

/// Home page path
pub const ROUTE_HOME_PATH: &str = "/";

/// Home page route name
pub const ROUTE_HOME_NAME: &str = "home";

/// Introduction page path
pub const ROUTE_INTRODUCTION_PATH: &str = "/introduction";

/// Introduction page route name
pub const ROUTE_INTRODUCTION_NAME: &str = "introduction";

// ============================================================================
// SNAPSHOT DEFAULTS
// ============================================================================

/// Placeholder when the OS name or version cannot be determined
pub const UNKNOWN_OS_PART: &str = "Unknown";
