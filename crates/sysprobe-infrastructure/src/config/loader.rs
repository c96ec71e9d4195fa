//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables and
//! default values through figment.

use std::env;
use std::path::{Component, Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use sysprobe_domain::error::{Error, Result};

use crate::config::{AppConfig, LoggingConfig, ShellConfig};
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `SYSPROBE__LOGGING__LEVEL`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}{CONFIG_ENV_SEPARATOR}", self.env_prefix))
                .split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
            dirs::home_dir().map(|d| {
                d.join(format!(".{DEFAULT_CONFIG_DIR}"))
                    .join(DEFAULT_CONFIG_FILENAME)
            }),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
///
/// Performs validation of all configuration sections.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_logging_config(&config.logging)?;
    validate_benchmark_config(config)?;
    validate_shell_config(&config.shell)?;
    Ok(())
}

fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    parse_log_level(&config.level).map(|_| ())
}

fn validate_benchmark_config(config: &AppConfig) -> Result<()> {
    let benchmark = &config.benchmark;
    if benchmark.batch_size == 0 {
        return Err(Error::config("Benchmark batch size cannot be 0"));
    }
    if benchmark.min_file_size == 0 {
        return Err(Error::config("Benchmark minimum file size cannot be 0"));
    }
    if benchmark.min_file_size >= benchmark.max_file_size {
        return Err(Error::config(format!(
            "Benchmark file size range is empty: min {} must be below max {}",
            benchmark.min_file_size, benchmark.max_file_size
        )));
    }
    validate_file_name("benchmark.scratch_dir_name", &benchmark.scratch_dir_name)?;
    validate_file_name("benchmark.probe_file_name", &benchmark.probe_file_name)?;
    Ok(())
}

fn validate_file_name(key: &str, name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(Error::config(format!(
            "{key} must be a single file name, got '{name}'"
        ))),
    }
}

fn validate_shell_config(config: &ShellConfig) -> Result<()> {
    let anchor_id = config.mount_target.strip_prefix('#').unwrap_or_default();
    if anchor_id.is_empty() {
        return Err(Error::config(format!(
            "Mount target must have the form '#id', got '{}'",
            config.mount_target
        )));
    }
    if !config.start_route.starts_with('/') {
        return Err(Error::config(format!(
            "Start route must begin with '/', got '{}'",
            config.start_route
        )));
    }
    Ok(())
}

/// Configuration builder for programmatic configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set logging configuration
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Set disk benchmark configuration
    pub fn with_benchmark(mut self, benchmark: crate::config::BenchmarkConfig) -> Self {
        self.config.benchmark = benchmark;
        self
    }

    /// Set system snapshot configuration
    pub fn with_system(mut self, system: crate::config::SystemInfoConfig) -> Self {
        self.config.system = system;
        self
    }

    /// Set application shell configuration
    pub fn with_shell(mut self, shell: ShellConfig) -> Self {
        self.config.shell = shell;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig> {
        validate_app_config(&self.config)?;
        Ok(self.config)
    }
}
