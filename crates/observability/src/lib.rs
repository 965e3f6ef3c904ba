//! # Observability
//!
//! Tracing and Prometheus metrics for the fixcore crates.
//!
//! Logs always go to stderr so that command output on stdout stays parseable.
//!
//! ```ignore
//! observability::init_with_config(ObservabilityConfig::for_verbosity(1, false))?;
//! ```

pub mod metrics;

use anyhow::{Context, Result};
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub use crate::metrics::{
    record_group_unsupported, record_log_disposed_access, record_log_fanout,
    record_message_created, record_plugin_load, UNKNOWN_BEGIN_STRING,
};

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
    Compact,
}

/// How tracing and the metrics exporter are installed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub log_format: LogFormat,
    /// Prometheus listener port, `None` leaves metrics as no-ops
    pub metrics_port: Option<u16>,
    /// Level used when `RUST_LOG` is unset or ignored
    pub level: &'static str,
    /// Whether `RUST_LOG` may override `level`
    pub env_override: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self::for_verbosity(0, false)
    }
}

impl ObservabilityConfig {
    /// Level from a `-v` count; `quiet` pins `warn` and ignores `RUST_LOG`
    pub fn for_verbosity(verbose: u8, quiet: bool) -> Self {
        let level = match (quiet, verbose) {
            (true, _) => "warn",
            (false, 0) => "info",
            (false, 1) => "debug",
            (false, _) => "trace",
        };
        Self {
            log_format: LogFormat::default(),
            metrics_port: None,
            level,
            env_override: !quiet,
        }
    }

    pub fn with_log_format(mut self, log_format: LogFormat) -> Self {
        self.log_format = log_format;
        self
    }

    /// Port 0 disables the exporter
    pub fn with_metrics_port(mut self, port: u16) -> Self {
        self.metrics_port = (port != 0).then_some(port);
        self
    }

    /// Filter directives given the current `RUST_LOG` value
    fn filter_directives(&self, env: Option<&str>) -> String {
        match env {
            Some(directives) if self.env_override && !directives.trim().is_empty() => {
                directives.to_string()
            }
            _ => self.level.to_string(),
        }
    }
}

/// Install the global tracing subscriber and, if configured, the exporter
pub fn init_with_config(config: ObservabilityConfig) -> Result<()> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = EnvFilter::try_new(config.filter_directives(env.as_deref()))
        .context("Invalid log filter")?;

    let fmt_layer = match config.log_format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .boxed(),
        LogFormat::Pretty => fmt::layer().pretty().with_writer(std::io::stderr).boxed(),
        LogFormat::Compact => fmt::layer().compact().with_writer(std::io::stderr).boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    if let Some(port) = config.metrics_port {
        init_metrics(port)?;
    }

    tracing::debug!(
        log_format = ?config.log_format,
        metrics_port = ?config.metrics_port,
        level = config.level,
        "observability initialized"
    );
    Ok(())
}

fn init_metrics(port: u16) -> Result<()> {
    PrometheusBuilder::new()
        .with_http_listener(([0, 0, 0, 0], port))
        .install()
        .context("Failed to install Prometheus recorder")?;

    tracing::info!(port, "Prometheus metrics endpoint listening");
    Ok(())
}
