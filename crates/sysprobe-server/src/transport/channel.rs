//! Message-channel transport
//!
//! A [`BackendWorker`] task owns the backend and receives request envelopes
//! over an mpsc channel; each reply travels back on its own oneshot
//! channel. Every request runs in its own task, so a slow command never
//! holds up the ones queued behind it.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use sysprobe_domain::{Backend, BackendError, CommandInvoker, CommandRequest};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::commands::route_command;

/// Request plus the channel its result goes back on
struct CommandEnvelope {
    request: CommandRequest,
    reply: oneshot::Sender<Result<Value, BackendError>>,
}

/// Task that serves command envelopes against a backend
pub struct BackendWorker {
    receiver: mpsc::Receiver<CommandEnvelope>,
    backend: Arc<dyn Backend>,
}

impl BackendWorker {
    /// Spawn a worker on the current tokio runtime
    ///
    /// The worker stops once every [`ChannelInvoker`] clone is dropped.
    pub fn spawn(backend: Arc<dyn Backend>, capacity: usize) -> (ChannelInvoker, JoinHandle<()>) {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        let worker = Self { receiver, backend };
        let handle = tokio::spawn(worker.run());
        (ChannelInvoker { sender }, handle)
    }

    async fn run(mut self) {
        while let Some(envelope) = self.receiver.recv().await {
            let backend = Arc::clone(&self.backend);
            tokio::spawn(async move {
                let result = route_command(envelope.request, backend.as_ref()).await;
                // The caller may have stopped waiting; nothing to do then.
                let _ = envelope.reply.send(result);
            });
        }
        debug!("Backend worker stopped");
    }
}

/// Invokes commands by messaging a [`BackendWorker`]
#[derive(Clone)]
pub struct ChannelInvoker {
    sender: mpsc::Sender<CommandEnvelope>,
}

impl ChannelInvoker {
    /// Whether the worker has stopped accepting requests
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

#[async_trait]
impl CommandInvoker for ChannelInvoker {
    async fn invoke(&self, request: CommandRequest) -> Result<Value, BackendError> {
        let command = request.name.clone();
        let (reply, response) = oneshot::channel();

        self.sender
            .send(CommandEnvelope { request, reply })
            .await
            .map_err(|_| BackendError::dispatch(command.clone(), "backend worker is not running"))?;

        response
            .await
            .map_err(|_| BackendError::dispatch(command, "backend worker dropped the request"))?
    }
}

impl std::fmt::Debug for ChannelInvoker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelInvoker")
            .field("closed", &self.is_closed())
            .finish()
    }
}
