//! Command Invoker Port
//!
//! Name-based dispatch of a command to whatever mechanism hosts the
//! backend: a direct call, a message channel or an RPC stub.

use async_trait::async_trait;

use crate::error::BackendError;
use crate::value_objects::CommandRequest;

/// Dispatches a named command with a parameter bag and returns its raw result
#[async_trait]
pub trait CommandInvoker: Send + Sync {
    /// Send one request and await its response
    ///
    /// No retries and no timeout are applied. If the backend never answers,
    /// the returned future never resolves.
    async fn invoke(&self, request: CommandRequest) -> Result<serde_json::Value, BackendError>;
}
