//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Failure of a backend command
///
/// One category covers everything that can go wrong between naming a
/// command and holding its typed result: the command could not be
/// dispatched, the backend failed while executing it, or the response
/// could not be decoded. Callers decide on retries; this type carries no
/// recovery hints.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", render_backend_error(.command.as_deref(), .message))]
pub struct BackendError {
    /// Command that failed, when known
    pub command: Option<String>,
    /// Human readable failure description
    pub message: String,
}

fn render_backend_error(command: Option<&str>, message: &str) -> String {
    match command {
        Some(command) => format!("Backend error in '{command}': {message}"),
        None => format!("Backend error: {message}"),
    }
}

impl BackendError {
    /// Create a backend error without command attribution
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            command: None,
            message: message.into(),
        }
    }

    /// Create a backend error attributed to a command
    pub fn for_command<C: Into<String>, S: Into<String>>(command: C, message: S) -> Self {
        Self {
            command: Some(command.into()),
            message: message.into(),
        }
    }

    /// The command could not be delivered to the backend
    pub fn dispatch<C: Into<String>, S: Into<String>>(command: C, message: S) -> Self {
        Self::for_command(command, format!("dispatch failed: {}", message.into()))
    }

    /// The backend failed while executing the command
    pub fn execution<C: Into<String>, S: Into<String>>(command: C, message: S) -> Self {
        Self::for_command(command, message)
    }

    /// The response could not be decoded into the expected type
    pub fn decode<C: Into<String>, S: Into<String>>(command: C, message: S) -> Self {
        Self::for_command(command, format!("malformed response: {}", message.into()))
    }

    /// Attach a command name if none is set yet
    #[must_use]
    pub fn with_command<C: Into<String>>(mut self, command: C) -> Self {
        if self.command.is_none() {
            self.command = Some(command.into());
        }
        self
    }
}

/// Crate-wide error
///
/// Backend command failures travel as [`BackendError`]; everything else
/// (configuration, routing, shell lifecycle) has its own variant.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// Filesystem failure outside a backend command, e.g. writing config
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// No route or resource under that name
    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Rejected or unreadable settings
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Plugin installation or mounting failed
    #[error("Shell error: {message}")]
    Shell { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl Error {
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Configuration error without a source
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    pub fn shell<S: Into<String>>(message: S) -> Self {
        Self::Shell {
            message: message.into(),
        }
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
