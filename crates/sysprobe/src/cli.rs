//! Command line interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sysprobe_server::RunRequest;

/// Command line interface for Sysprobe
#[derive(Parser, Debug)]
#[command(name = "sysprobe")]
#[command(about = "Sysprobe - system snapshot and small-file disk benchmarks")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Disable ANSI styling of page output
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Print a system snapshot as JSON
    Info,
    /// Measure random 4K read throughput in a directory
    ReadSpeed {
        /// Directory to measure
        path: String,
    },
    /// Measure random 4K write throughput in a directory
    WriteSpeed {
        /// Directory to measure
        path: String,
    },
    /// Measure first-byte read latency of a file or directory tree
    ReadDelay {
        /// File, or directory containing a file
        path: String,
    },
    /// Measure single-byte write latency in a directory
    WriteDelay {
        /// Directory to measure
        path: String,
    },
    /// Render a page of the application shell
    Open {
        /// Route to open, e.g. `/introduction` (defaults to the start route)
        route: Option<String>,
    },
    /// List backend commands and their parameter schemas
    Commands,
}

impl From<CliCommand> for RunRequest {
    fn from(command: CliCommand) -> Self {
        match command {
            CliCommand::Info => RunRequest::SystemInfo,
            CliCommand::ReadSpeed { path } => RunRequest::ReadSpeed(path),
            CliCommand::WriteSpeed { path } => RunRequest::WriteSpeed(path),
            CliCommand::ReadDelay { path } => RunRequest::ReadDelay(path),
            CliCommand::WriteDelay { path } => RunRequest::WriteDelay(path),
            CliCommand::Open { route } => RunRequest::Open(route),
            CliCommand::Commands => RunRequest::ListCommands,
        }
    }
}
