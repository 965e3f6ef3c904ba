//! # fixcore CLI
//!
//! Command-line entry point.
//!
//! - List the discovered message factory providers
//! - Create messages and repeating groups by BeginString
//! - Validate session settings files

mod cli;
mod commands;
mod error;

use anyhow::Result;
use clap::Parser;
use observability::ObservabilityConfig;
use tracing::info;

use cli::{Cli, Commands};
use commands::{run_providers, run_resolve, run_validate};

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    observability::init_with_config(
        ObservabilityConfig::for_verbosity(cli.verbose, cli.quiet)
            .with_log_format(cli.log_format.into())
            .with_metrics_port(cli.metrics_port),
    )?;

    info!(version = env!("CARGO_PKG_VERSION"), "fixcore CLI starting");

    // Execute command
    let result = match &cli.command {
        Commands::Providers(args) => run_providers(args),
        Commands::Resolve(args) => run_resolve(args),
        Commands::Validate(args) => run_validate(args),
    };

    if let Err(ref e) = result {
        tracing::error!(error = %e, "Command failed");
    }

    result
}
