//! Structured logging with tracing
//!
//! Configures the global subscriber: level filter, optional JSON output and
//! optional daily-rotated log file. Console output goes to stderr so it
//! never mixes with command results printed on stdout.

use std::ffi::OsStr;
use std::path::Path;

use sysprobe_domain::error::{Error, Result};
use tracing::{Level, info, warn};
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

// Re-export LoggingConfig for convenience
pub use crate::config::LoggingConfig;
use crate::constants::{DEFAULT_LOG_FILE_STEM, LOG_FILTER_ENV};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Initialize logging with the provided configuration
///
/// `SYSPROBE_LOG` overrides the configured level with a full filter
/// directive. Fails if the level is invalid or a global subscriber is
/// already set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let mut layers = vec![console_layer(config.json_format)];
    if let Some(path) = &config.file_output {
        layers.push(file_layer(path, config.json_format));
    }

    Registry::default()
        .with(layers)
        .with(filter)
        .try_init()
        .map_err(|e| Error::config(format!("Failed to initialize logging: {e}")))?;

    info!("Logging initialized with level: {}", level);
    Ok(())
}

fn console_layer(json: bool) -> BoxedLayer {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(true);
    if json { layer.json().boxed() } else { layer.boxed() }
}

/// Daily-rotated file next to `path`, named after its stem
fn file_layer(path: &Path, json: bool) -> BoxedLayer {
    let appender = tracing_appender::rolling::daily(
        path.parent().unwrap_or_else(|| Path::new(".")),
        path.file_stem()
            .unwrap_or_else(|| OsStr::new(DEFAULT_LOG_FILE_STEM)),
    );
    let layer = fmt::layer()
        .with_writer(appender)
        .with_ansi(false)
        .with_target(true);
    if json { layer.json().boxed() } else { layer.boxed() }
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::config(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn or error"
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}
