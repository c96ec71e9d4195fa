//! Command Registry Module
//!
//! Describes every backend command with its parameter schema, for listing
//! and for clients that build requests dynamically.

use serde::Serialize;
use sysprobe_domain::error::{Error, Result};
use sysprobe_domain::{Command, NoArgs, PathArgs};

/// Description of one backend command
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandDefinition {
    /// Wire name
    pub name: &'static str,
    /// What the command measures and returns
    pub description: &'static str,
    /// JSON schema of the parameter bag
    pub params_schema: serde_json::Value,
}

impl CommandDefinition {
    /// Build the definition of a command
    pub fn of(command: Command) -> Result<Self> {
        let schema = if command.takes_path() {
            schemars::schema_for!(PathArgs)
        } else {
            schemars::schema_for!(NoArgs)
        };
        let params_schema = serde_json::to_value(schema)?;
        if !params_schema.is_object() {
            return Err(Error::internal(format!(
                "Schema for {command} is not an object"
            )));
        }

        Ok(Self {
            name: command.as_str(),
            description: describe(command),
            params_schema,
        })
    }
}

fn describe(command: Command) -> &'static str {
    match command {
        Command::GetSysInfo => {
            "Snapshot of OS, CPU core count, CPU usage and memory usage"
        }
        Command::Get4kReadSpeed => "Random 4K read throughput at a path, in bytes per second",
        Command::Get4kWriteSpeed => "Random 4K write throughput at a path, in bytes per second",
        Command::GetReadDelay => "First-byte read latency at a path, in milliseconds",
        Command::GetWriteDelay => "Single-byte write latency at a path, in milliseconds",
    }
}

/// Create the complete list of available commands
pub fn create_command_list() -> Result<Vec<CommandDefinition>> {
    Command::ALL.into_iter().map(CommandDefinition::of).collect()
}
