//! Configuration types module

pub mod app;
pub mod logging;
pub mod shell;

// Re-export main types
pub use app::*;
pub use logging::LoggingConfig;
pub use shell::{ShellConfig, Theme};
