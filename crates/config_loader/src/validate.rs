//! Settings file validation
//!
//! Rules:
//! - BeginString, SenderCompID and TargetCompID are non-empty
//! - Session identities are unique

use std::collections::HashSet;

use contracts::ContractError;
use validator::{Validate, ValidationErrors};

use crate::schema::SettingsFile;

/// Validate a settings file
///
/// Returns the first error found.
pub fn validate(file: &SettingsFile) -> Result<(), ContractError> {
    validate_sections(file)?;
    validate_unique_sessions(file)?;
    Ok(())
}

/// Run the derived field checks on each session
fn validate_sections(file: &SettingsFile) -> Result<(), ContractError> {
    for (idx, section) in file.sessions.iter().enumerate() {
        section
            .validate()
            .map_err(|errors| first_error(idx, &errors))?;
    }
    Ok(())
}

/// Reject duplicate session identities
fn validate_unique_sessions(file: &SettingsFile) -> Result<(), ContractError> {
    let mut seen = HashSet::new();
    for (idx, section) in file.sessions.iter().enumerate() {
        let session_id = section.session_id();
        if !seen.insert(session_id.clone()) {
            return Err(ContractError::config_validation(
                format!("sessions[{idx}]"),
                format!("duplicate session {session_id}"),
            ));
        }
    }
    Ok(())
}

/// First error by field name, so output is stable
fn first_error(idx: usize, errors: &ValidationErrors) -> ContractError {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .find_map(|(field, errs)| {
            errs.first().map(|err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                ContractError::config_validation(format!("sessions[{idx}].{field}"), message)
            })
        })
        .unwrap_or_else(|| {
            ContractError::config_validation(format!("sessions[{idx}]"), errors.to_string())
        })
}
