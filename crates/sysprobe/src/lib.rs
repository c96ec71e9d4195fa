//! # Sysprobe
//!
//! Reports a snapshot of the machine (OS, CPU, memory) and measures how a
//! disk handles small files: 4K read and write throughput plus single
//! operation latency.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use sysprobe::providers::NativeBackend;
//! use sysprobe::server::{BackendBridge, LocalInvoker};
//!
//! let bridge = BackendBridge::new(Arc::new(LocalInvoker::new(Arc::new(NativeBackend::default()))));
//! let speed = bridge.get_read_speed("/tmp").await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Value objects, command contract, ports and errors
//! - `providers` - Native backend: system collector and disk benchmarks
//! - `infrastructure` - Configuration and logging
//! - `server` - Dispatch, transports, bridge, routing and application shell

pub mod cli;

/// Domain layer - core types and contracts
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use sysprobe_domain::*;
}

/// Providers - native backend implementation
pub mod providers {
    pub use sysprobe_providers::*;
}

/// Infrastructure layer - configuration and logging
pub mod infrastructure {
    pub use sysprobe_infrastructure::*;
}

/// Server layer - dispatch, bridge and application shell
pub mod server {
    pub use sysprobe_server::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::{BackendError, Error, Result, SystemInfo};

// Re-export main entry point at the crate root
pub use server::{BackendBridge, OutputOptions, RunRequest, run};
