//! `docpatch`: patch JSON documents with path-addressed operations.
//!
//! Usage:
//!   docpatch apply --ops '<records-json>' < doc.json
//!   docpatch file config.json --target out.json --ops-file ops.toml
//!   docpatch job job.toml
//!   docpatch get /_source/defaultIndex < doc.json

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
    commands::run_command(cli)
}
