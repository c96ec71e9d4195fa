//! Scriptable backend for dispatch and transport tests

use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use sysprobe_domain::{Backend, BackendError, SystemInfo};
use tokio::sync::Notify;

use super::sample_system_info;

/// Backend returning fixed values and recording the paths it was given
///
/// With a gate installed, `get_4k_read_speed` waits until
/// `get_4k_write_speed` has started, so a transport that serializes calls
/// would deadlock.
#[derive(Default)]
pub struct MockBackend {
    pub read_speed: u64,
    pub write_speed: u64,
    pub read_delay: f64,
    pub write_delay: f64,
    pub failure: Option<BackendError>,
    pub gate: Option<Arc<Notify>>,
    pub paths: Mutex<Vec<String>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            read_speed: 4096,
            write_speed: 2048,
            read_delay: 0.25,
            write_delay: 0.5,
            ..Self::default()
        }
    }

    pub fn failing(error: BackendError) -> Self {
        Self {
            failure: Some(error),
            ..Self::new()
        }
    }

    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::new()
        }
    }

    pub fn recorded_paths(&self) -> Vec<String> {
        self.paths.lock().expect("paths lock").clone()
    }

    fn check(&self, path: Option<&str>) -> Result<(), BackendError> {
        if let Some(path) = path {
            self.paths.lock().expect("paths lock").push(path.to_string());
        }
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn get_sys_info(&self) -> Result<SystemInfo, BackendError> {
        self.check(None)?;
        Ok(sample_system_info())
    }

    async fn get_4k_read_speed(&self, path: &str) -> Result<u64, BackendError> {
        self.check(Some(path))?;
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        Ok(self.read_speed)
    }

    async fn get_4k_write_speed(&self, path: &str) -> Result<u64, BackendError> {
        self.check(Some(path))?;
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
        Ok(self.write_speed)
    }

    async fn get_read_delay(&self, path: &str) -> Result<f64, BackendError> {
        self.check(Some(path))?;
        Ok(self.read_delay)
    }

    async fn get_write_delay(&self, path: &str) -> Result<f64, BackendError> {
        self.check(Some(path))?;
        Ok(self.write_delay)
    }
}
