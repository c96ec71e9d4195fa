//! Backend Bridge
//!
//! Typed, one-shot wrappers around [`CommandInvoker`]. Each method issues
//! exactly one invocation and surfaces the raw outcome: no retries, no
//! defaults, no caching.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use sysprobe_domain::{BackendError, Command, CommandInvoker, CommandRequest, PathArgs, SystemInfo};
use tracing::debug;

/// Typed client for the backend command surface
#[derive(Clone)]
pub struct BackendBridge {
    invoker: Arc<dyn CommandInvoker>,
}

impl BackendBridge {
    /// Create a bridge over the given invoker
    pub fn new(invoker: Arc<dyn CommandInvoker>) -> Self {
        Self { invoker }
    }

    /// `get_sys_info`: fresh system snapshot
    pub async fn get_system_info(&self) -> Result<SystemInfo, BackendError> {
        self.call(Command::GetSysInfo, CommandRequest::new(Command::GetSysInfo))
            .await
    }

    /// `get_4k_read_speed`: read throughput at `path`, bytes per second
    pub async fn get_read_speed(&self, path: &str) -> Result<u64, BackendError> {
        self.call_with_path(Command::Get4kReadSpeed, path).await
    }

    /// `get_4k_write_speed`: write throughput at `path`, bytes per second
    pub async fn get_write_speed(&self, path: &str) -> Result<u64, BackendError> {
        self.call_with_path(Command::Get4kWriteSpeed, path).await
    }

    /// `get_read_delay`: read latency at `path`, milliseconds
    pub async fn get_read_delay(&self, path: &str) -> Result<f64, BackendError> {
        self.call_with_path(Command::GetReadDelay, path).await
    }

    /// `get_write_delay`: write latency at `path`, milliseconds
    pub async fn get_write_delay(&self, path: &str) -> Result<f64, BackendError> {
        self.call_with_path(Command::GetWriteDelay, path).await
    }

    async fn call_with_path<T: DeserializeOwned>(
        &self,
        command: Command,
        path: &str,
    ) -> Result<T, BackendError> {
        let request = CommandRequest::with_args(command, &PathArgs::new(path))?;
        self.call(command, request).await
    }

    async fn call<T: DeserializeOwned>(
        &self,
        command: Command,
        request: CommandRequest,
    ) -> Result<T, BackendError> {
        debug!(command = %command, "Invoking backend command");
        let value = self.invoker.invoke(request).await?;
        serde_json::from_value(value)
            .map_err(|e| BackendError::decode(command.as_str(), e.to_string()))
    }
}

impl std::fmt::Debug for BackendBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendBridge").finish_non_exhaustive()
    }
}
