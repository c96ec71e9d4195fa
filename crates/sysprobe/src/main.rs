//! Sysprobe - Entry Point
//!
//! Results go to stdout, logs to stderr.

use std::io::IsTerminal;

use clap::Parser;
use sysprobe::cli::Cli;
use sysprobe_server::{OutputOptions, run};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let output = OutputOptions {
        ansi: !cli.no_color && std::io::stdout().is_terminal(),
    };
    let text = run(cli.config.as_deref(), cli.command.into(), output).await?;
    println!("{text}");
    Ok(())
}
