//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// fixcore - FIX message factory and session settings tooling
#[derive(Parser, Debug)]
#[command(
    name = "fixcore",
    author,
    version,
    about = "FIX message factory discovery and session settings tooling",
    long_about = "Inspects the message factory providers available to this process.\n\n\
                  Lists discovered providers, resolves messages and repeating groups \n\
                  through the dispatching factory, and validates session settings files."
)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, env = "FIXCORE_VERBOSE")]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format
    #[arg(
        long,
        value_enum,
        default_value = "pretty",
        global = true,
        env = "FIXCORE_LOG_FORMAT"
    )]
    pub log_format: LogFormat,

    /// Metrics server port (0 = disabled)
    #[arg(long, default_value = "0", global = true, env = "FIXCORE_METRICS_PORT")]
    pub metrics_port: u16,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List discovered message factory providers
    Providers(ProvidersArgs),

    /// Create a message or repeating group through the dispatching factory
    Resolve(ResolveArgs),

    /// Validate a session settings file
    Validate(ValidateArgs),
}

/// Arguments for the `providers` command
#[derive(Parser, Debug)]
pub struct ProvidersArgs {
    /// Only use the built-in dialects, skipping module scan and plugins
    #[arg(long)]
    pub builtin: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `resolve` command
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// BeginString to resolve (e.g. FIX.4.4, FIXT.1.1)
    #[arg(short, long)]
    pub begin_string: String,

    /// MsgType (tag 35) of the message
    #[arg(short, long)]
    pub msg_type: String,

    /// Counter tag of a repeating group to create instead of a message
    #[arg(short, long)]
    pub group_tag: Option<u32>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `validate` command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to settings file to validate
    #[arg(short, long, default_value = "sessions.toml", env = "FIXCORE_CONFIG")]
    pub config: PathBuf,

    /// Output validation result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Log output format
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum LogFormat {
    /// JSON structured logging
    Json,
    /// Human-readable pretty format
    #[default]
    Pretty,
    /// Compact single-line format
    Compact,
}

impl From<LogFormat> for observability::LogFormat {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Json => Self::Json,
            LogFormat::Pretty => Self::Pretty,
            LogFormat::Compact => Self::Compact,
        }
    }
}
