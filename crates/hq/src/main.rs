//! The `hq` binary: mission control in a terminal.

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod context;
mod output;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    if cli.global.verbose {
        init_tracing();
    }

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Debug-level logging to stderr, keeping stdout clean for command output.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hq=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
