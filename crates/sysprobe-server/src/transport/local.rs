//! In-process transport

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use sysprobe_domain::{Backend, BackendError, CommandInvoker, CommandRequest};

use crate::commands::route_command;

/// Invokes commands by calling the backend directly
#[derive(Clone)]
pub struct LocalInvoker {
    backend: Arc<dyn Backend>,
}

impl LocalInvoker {
    /// Create an invoker for the given backend
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl CommandInvoker for LocalInvoker {
    async fn invoke(&self, request: CommandRequest) -> Result<Value, BackendError> {
        route_command(request, self.backend.as_ref()).await
    }
}

impl std::fmt::Debug for LocalInvoker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalInvoker").finish_non_exhaustive()
    }
}
