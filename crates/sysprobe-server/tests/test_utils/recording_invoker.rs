//! Invoker that records requests and replays a scripted response

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use sysprobe_domain::{BackendError, CommandInvoker, CommandRequest};

/// Records every request and answers with a fixed response
pub struct RecordingInvoker {
    response: Result<Value, BackendError>,
    requests: Mutex<Vec<CommandRequest>>,
}

impl RecordingInvoker {
    /// Always succeed with `value`
    pub fn returning(value: Value) -> Self {
        Self {
            response: Ok(value),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Always fail with `error`
    pub fn failing(error: BackendError) -> Self {
        Self {
            response: Err(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<CommandRequest> {
        self.requests.lock().expect("requests lock").clone()
    }
}

#[async_trait]
impl CommandInvoker for RecordingInvoker {
    async fn invoke(&self, request: CommandRequest) -> Result<Value, BackendError> {
        self.requests.lock().expect("requests lock").push(request);
        self.response.clone()
    }
}
