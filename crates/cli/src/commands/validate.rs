//! `validate` command implementation.

use anyhow::{Context, Result};
use config_loader::{SettingsFile, SettingsLoader};
use contracts::settings::FILE_LOG_PATH;
use contracts::MessageFactory;
use serde::Serialize;
use tracing::info;

use super::build_factory;
use crate::cli::ValidateArgs;
use crate::error::CliError;

/// Validation result for JSON output
#[derive(Serialize)]
struct ValidationResult {
    valid: bool,
    config_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warnings: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<ConfigSummary>,
}

#[derive(Serialize)]
struct ConfigSummary {
    default_keys: usize,
    session_count: usize,
    sessions: Vec<String>,
}

/// Execute the `validate` command
pub fn run_validate(args: &ValidateArgs) -> Result<()> {
    info!(config = %args.config.display(), "Validating configuration");

    let result = validate_config(args);

    if args.json {
        let json = serde_json::to_string_pretty(&result)
            .context("Failed to serialize validation result")?;
        println!("{}", json);
    } else {
        print_validation_result(&result);
    }

    match result.error {
        None => Ok(()),
        Some(message) => Err(CliError::config_validation(message).into()),
    }
}

fn validate_config(args: &ValidateArgs) -> ValidationResult {
    let config_path = args.config.display().to_string();

    // Check file exists
    if !args.config.exists() {
        return ValidationResult {
            valid: false,
            error: Some(CliError::config_not_found(&config_path).to_string()),
            config_path,
            warnings: None,
            summary: None,
        };
    }

    // Try to load and validate
    match SettingsLoader::read_path(&args.config) {
        Ok(file) => {
            let warnings = collect_warnings(&file);
            ValidationResult {
                valid: true,
                config_path,
                error: None,
                warnings: if warnings.is_empty() {
                    None
                } else {
                    Some(warnings)
                },
                summary: Some(ConfigSummary {
                    default_keys: file.default.len(),
                    session_count: file.sessions.len(),
                    sessions: file
                        .sessions
                        .iter()
                        .map(|s| s.session_id().to_string())
                        .collect(),
                }),
            }
        }
        Err(e) => ValidationResult {
            valid: false,
            config_path,
            error: Some(e.to_string()),
            warnings: None,
            summary: None,
        },
    }
}

/// Collect configuration warnings (non-fatal issues)
fn collect_warnings(file: &SettingsFile) -> Vec<String> {
    let mut warnings = Vec::new();

    if file.sessions.is_empty() {
        warnings.push("No sessions configured".to_string());
    }

    let settings = file.to_session_settings();
    let supported = build_factory(false).supported_begin_strings();

    for session_id in settings.session_ids() {
        let has_log_path = settings
            .get(session_id)
            .map(|dict| dict.has(FILE_LOG_PATH))
            .unwrap_or(false);
        if !has_log_path {
            warnings.push(format!(
                "Session '{}' has no {} - file logging unavailable",
                session_id, FILE_LOG_PATH
            ));
        }

        if !supported.contains(&session_id.begin_string) {
            warnings.push(format!(
                "Session '{}' uses {} which no provider supports",
                session_id, session_id.begin_string
            ));
        }
    }

    warnings
}

fn print_validation_result(result: &ValidationResult) {
    if result.valid {
        println!("✓ Configuration is valid: {}", result.config_path);

        if let Some(ref summary) = result.summary {
            println!("\n  Default keys: {}", summary.default_keys);
            println!("  Sessions: {}", summary.session_count);
            for session in &summary.sessions {
                println!("    - {}", session);
            }
        }

        if let Some(ref warnings) = result.warnings {
            println!("\n⚠ Warnings:");
            for warning in warnings {
                println!("  - {}", warning);
            }
        }
    } else {
        println!("✗ Configuration is invalid: {}", result.config_path);
        if let Some(ref error) = result.error {
            println!("\n  Error: {}", error);
        }
    }
}
