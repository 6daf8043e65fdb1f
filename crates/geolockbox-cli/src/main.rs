//! GeoLockBox CLI - offline lock checks and trip reconstruction

mod cli;
mod commands;
mod config_loader;
mod output;

use clap::Parser;
use cli::Cli;
use output::OutputWriter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = commands::execute(cli) {
        OutputWriter::new(json).error(format!("{:#}", err));
        std::process::exit(1);
    }
}
