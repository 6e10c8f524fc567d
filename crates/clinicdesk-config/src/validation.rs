// SPDX-FileCopyrightText: 2026 Clinicdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Checks semantic constraints serde attributes cannot express. All problems
//! are collected so the operator sees every mistake in one run.

use crate::diagnostic::ConfigError;
use crate::model::ClinicDeskConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
pub fn validate_config(config: &ClinicDeskConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.storage.database_path.trim().is_empty() {
        errors.push(invalid("storage.database_path must not be empty"));
    }

    let level = config.agent.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(invalid(format!(
            "agent.log_level `{}` is not one of {}",
            config.agent.log_level,
            LOG_LEVELS.join(", ")
        )));
    }

    if config.agent.staff_actor.trim().is_empty() {
        errors.push(invalid("agent.staff_actor must not be empty"));
    }

    if config.clinic.booking_type.trim().is_empty() {
        errors.push(invalid("clinic.booking_type must not be empty"));
    }

    if config.smtp.enabled {
        let smtp = &config.smtp;
        if smtp.host.trim().is_empty() {
            errors.push(invalid("smtp.host must not be empty when smtp.enabled = true"));
        }
        match smtp.from_address.as_deref() {
            None => errors.push(invalid(
                "smtp.from_address is required when smtp.enabled = true",
            )),
            Some(addr) if !looks_like_address(addr) => errors.push(invalid(format!(
                "smtp.from_address `{addr}` is not an email address"
            ))),
            Some(_) => {}
        }
        if let Some(addr) = smtp.staff_address.as_deref()
            && !looks_like_address(addr)
        {
            errors.push(invalid(format!(
                "smtp.staff_address `{addr}` is not an email address"
            )));
        }
        if smtp.username.is_some() != smtp.password.is_some() {
            errors.push(invalid(
                "smtp.username and smtp.password must be set together",
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::Validation {
        message: message.into(),
    }
}

/// Loose address check: `local@domain.tld` with no whitespace.
fn looks_like_address(addr: &str) -> bool {
    match addr.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !addr.chars().any(char::is_whitespace)
        }
        None => false,
    }
}
