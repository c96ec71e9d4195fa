//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the bridge, the shell and
//! the native backend.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML + environment configuration via figment |
//! | [`constants`] | Centralized configuration constants |
//! | [`error_ext`] | Context extension for foreign errors |
//! | [`logging`] | Structured logging with tracing |

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
