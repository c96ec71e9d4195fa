//! Process entry point
//!
//! Loads configuration, initializes logging, starts the native backend
//! behind a message-channel worker and serves one request through the
//! bridge or the application shell.

use std::path::Path;
use std::sync::Arc;

use sysprobe_domain::error::Result;
use sysprobe_infrastructure::config::{AppConfig, ConfigLoader};
use sysprobe_infrastructure::logging::init_logging;
use sysprobe_providers::NativeBackend;
use tracing::info;

use crate::bridge::BackendBridge;
use crate::commands::create_command_list;
use crate::constants::WORKER_CHANNEL_CAPACITY;
use crate::format::{format_latency, format_throughput};
use crate::routing::{HistoryMode, PageRouter, default_routes};
use crate::shell::{AppShell, ComponentLibrary};
use crate::transport::BackendWorker;

/// What a single run of the process should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunRequest {
    /// Print a system snapshot as JSON
    SystemInfo,
    /// Measure 4K read throughput at a path
    ReadSpeed(String),
    /// Measure 4K write throughput at a path
    WriteSpeed(String),
    /// Measure read latency at a path
    ReadDelay(String),
    /// Measure write latency at a path
    WriteDelay(String),
    /// Mount the shell and render a route (the configured start route if `None`)
    Open(Option<String>),
    /// List the backend command registry as JSON
    ListCommands,
}

/// Options that only affect presentation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Style page output with ANSI escapes
    pub ansi: bool,
}

/// Run one request end to end and return the text to print
pub async fn run(
    config_path: Option<&Path>,
    request: RunRequest,
    output: OutputOptions,
) -> Result<String> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = config_path {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;
    init_logging(&config.logging)?;

    let backend = Arc::new(NativeBackend::new(
        config.system.clone(),
        config.benchmark.clone(),
    ));
    let (invoker, _worker) = BackendWorker::spawn(backend, WORKER_CHANNEL_CAPACITY);
    let bridge = BackendBridge::new(Arc::new(invoker));

    info!(request = ?request, "Running request");
    execute(&config, bridge, request, output).await
}

/// Serve a request against an already wired bridge
pub async fn execute(
    config: &AppConfig,
    bridge: BackendBridge,
    request: RunRequest,
    output: OutputOptions,
) -> Result<String> {
    match request {
        RunRequest::SystemInfo => {
            let info = bridge.get_system_info().await?;
            Ok(serde_json::to_string_pretty(&info)?)
        }
        RunRequest::ReadSpeed(path) => {
            let speed = bridge.get_read_speed(&path).await?;
            Ok(format!(
                "4K read speed: {} ({speed} B/s)",
                format_throughput(speed)
            ))
        }
        RunRequest::WriteSpeed(path) => {
            let speed = bridge.get_write_speed(&path).await?;
            Ok(format!(
                "4K write speed: {} ({speed} B/s)",
                format_throughput(speed)
            ))
        }
        RunRequest::ReadDelay(path) => {
            let delay = bridge.get_read_delay(&path).await?;
            Ok(format!("Read delay: {}", format_latency(delay)))
        }
        RunRequest::WriteDelay(path) => {
            let delay = bridge.get_write_delay(&path).await?;
            Ok(format!("Write delay: {}", format_latency(delay)))
        }
        RunRequest::Open(route) => {
            let mut app = AppShell::create(bridge)
                .use_plugin(ComponentLibrary::new(config.shell.theme).with_ansi(output.ansi))?
                .use_plugin(PageRouter::new(HistoryMode::Web, default_routes())?)?
                .mount(&config.shell.mount_target)?;
            let location = route.unwrap_or_else(|| config.shell.start_route.clone());
            let page = app.navigate(&location).await?;
            Ok(page.body)
        }
        RunRequest::ListCommands => {
            let commands = create_command_list()?;
            Ok(serde_json::to_string_pretty(&commands)?)
        }
    }
}
