//! Command implementations

mod config;
mod lock;
mod trip;

use crate::cli::{Cli, Commands};
use crate::config_loader;
use crate::output::OutputWriter;
use anyhow::Result;

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let layered = config_loader::load_cli_config(&cli)?;

    match cli.command {
        Commands::Lock(args) => lock::execute(args, &layered.engine(), &output),
        Commands::Trip(args) => trip::execute(args, &layered.engine(), &output),
        Commands::Config => config::execute(&layered, &output),
    }
}
