//! Backend command contract
//!
//! Names, parameter bags and the request envelope passed to a
//! [`CommandInvoker`](crate::ports::CommandInvoker).

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{
    CMD_GET_4K_READ_SPEED, CMD_GET_4K_WRITE_SPEED, CMD_GET_READ_DELAY, CMD_GET_SYS_INFO,
    CMD_GET_WRITE_DELAY,
};
use crate::error::BackendError;

/// Named backend command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// `get_sys_info`: no parameters, returns a `SystemInfo`
    GetSysInfo,
    /// `get_4k_read_speed`: `{ path }`, returns bytes per second
    Get4kReadSpeed,
    /// `get_4k_write_speed`: `{ path }`, returns bytes per second
    Get4kWriteSpeed,
    /// `get_read_delay`: `{ path }`, returns milliseconds
    GetReadDelay,
    /// `get_write_delay`: `{ path }`, returns milliseconds
    GetWriteDelay,
}

impl Command {
    /// Every command the backend understands
    pub const ALL: [Command; 5] = [
        Command::GetSysInfo,
        Command::Get4kReadSpeed,
        Command::Get4kWriteSpeed,
        Command::GetReadDelay,
        Command::GetWriteDelay,
    ];

    /// Wire name of the command
    pub fn as_str(self) -> &'static str {
        match self {
            Command::GetSysInfo => CMD_GET_SYS_INFO,
            Command::Get4kReadSpeed => CMD_GET_4K_READ_SPEED,
            Command::Get4kWriteSpeed => CMD_GET_4K_WRITE_SPEED,
            Command::GetReadDelay => CMD_GET_READ_DELAY,
            Command::GetWriteDelay => CMD_GET_WRITE_DELAY,
        }
    }

    /// Whether the command expects a [`PathArgs`] parameter bag
    pub fn takes_path(self) -> bool {
        !matches!(self, Command::GetSysInfo)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Command {
    type Err = BackendError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|command| command.as_str() == name)
            .ok_or_else(|| BackendError::dispatch(name, format!("Unknown command: {name}")))
    }
}

/// Parameters for commands that operate on a filesystem location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Validate)]
#[schemars(description = "Parameters for a disk measurement at a filesystem location")]
pub struct PathArgs {
    /// Location the backend measures
    #[validate(length(min = 1, message = "Path cannot be empty"))]
    #[schemars(description = "Filesystem path accessible to the backend")]
    pub path: String,
}

impl PathArgs {
    /// Create a parameter bag for the given path
    pub fn new<S: Into<String>>(path: S) -> Self {
        Self { path: path.into() }
    }
}

/// Parameters for commands without arguments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[schemars(description = "This command takes no parameters")]
pub struct NoArgs {}

/// Request envelope: a command name plus its parameter bag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandRequest {
    /// Wire name of the command
    pub name: String,
    /// Named parameters
    #[serde(default)]
    pub args: serde_json::Map<String, serde_json::Value>,
}

impl CommandRequest {
    /// Create a request with no parameters
    pub fn new(command: Command) -> Self {
        Self {
            name: command.as_str().to_string(),
            args: serde_json::Map::new(),
        }
    }

    /// Create a request whose parameters are the fields of `args`
    pub fn with_args<A: Serialize>(command: Command, args: &A) -> Result<Self, BackendError> {
        match serde_json::to_value(args) {
            Ok(serde_json::Value::Object(map)) => Ok(Self {
                name: command.as_str().to_string(),
                args: map,
            }),
            Ok(other) => Err(BackendError::dispatch(
                command.as_str(),
                format!("parameters must serialize to an object, got {other}"),
            )),
            Err(e) => Err(BackendError::dispatch(command.as_str(), e.to_string())),
        }
    }

    /// Resolve the command name
    pub fn command(&self) -> Result<Command, BackendError> {
        self.name.parse()
    }
}
