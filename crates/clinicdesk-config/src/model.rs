// SPDX-FileCopyrightText: 2026 Clinicdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a misspelled key fails
//! at startup instead of silently falling back to a default.

use serde::{Deserialize, Serialize};

/// Top-level configuration. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ClinicDeskConfig {
    /// Process-level settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Clinic identity used in conversation texts and notifications.
    #[serde(default)]
    pub clinic: ClinicConfig,

    /// Booking store settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Outbound mail settings for confirmations and staff alerts.
    #[serde(default)]
    pub smtp: SmtpConfig,
}

/// Process-level configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Actor recorded in the audit log for staff commands run without `--actor`.
    #[serde(default = "default_staff_actor")]
    pub staff_actor: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            staff_actor: default_staff_actor(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_staff_actor() -> String {
    "Admin".to_string()
}

/// Clinic identity configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ClinicConfig {
    /// Display name of the clinic.
    #[serde(default = "default_clinic_name")]
    pub name: String,

    /// Appointment type recorded on every booking made through the conversation.
    #[serde(default = "default_booking_type")]
    pub booking_type: String,

    /// Postal location printed in confirmation emails.
    #[serde(default = "default_location")]
    pub location: String,

    /// Contact phone printed in confirmation emails.
    #[serde(default)]
    pub phone: Option<String>,

    /// Contact email printed in confirmation emails.
    #[serde(default)]
    pub contact_email: Option<String>,
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self {
            name: default_clinic_name(),
            booking_type: default_booking_type(),
            location: default_location(),
            phone: None,
            contact_email: None,
        }
    }
}

fn default_clinic_name() -> String {
    "SmileCare Dental Clinic".to_string()
}

fn default_booking_type() -> String {
    "Dental Consultation".to_string()
}

fn default_location() -> String {
    "Hyderabad, Telangana".to_string()
}

/// Booking store configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Enable WAL (Write-Ahead Logging) mode for SQLite.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            wal_mode: default_wal_mode(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("clinicdesk").join("bookings.db"))
        .unwrap_or_else(|| std::path::PathBuf::from("bookings.db"))
        .to_string_lossy()
        .into_owned()
}

fn default_wal_mode() -> bool {
    true
}

/// Outbound SMTP configuration.
///
/// Disabled by default; with mail disabled every confirmation is reported
/// as not sent and the patient is told so.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SmtpConfig {
    /// Send confirmation and alert emails.
    #[serde(default)]
    pub enabled: bool,

    /// SMTP relay host.
    #[serde(default = "default_smtp_host")]
    pub host: String,

    /// SMTP submission port (STARTTLS).
    #[serde(default = "default_smtp_port")]
    pub port: u16,

    /// Relay login. `None` sends without authentication.
    #[serde(default)]
    pub username: Option<String>,

    /// Relay password. Prefer `CLINICDESK_SMTP_PASSWORD` over the file.
    #[serde(default)]
    pub password: Option<String>,

    /// Sender address for all outgoing mail.
    #[serde(default)]
    pub from_address: Option<String>,

    /// Recipient of staff alerts. Falls back to `from_address`.
    #[serde(default)]
    pub staff_address: Option<String>,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            host: default_smtp_host(),
            port: default_smtp_port(),
            username: None,
            password: None,
            from_address: None,
            staff_address: None,
        }
    }
}

impl SmtpConfig {
    /// Recipient of staff alerts, if any address is configured.
    pub fn alert_recipient(&self) -> Option<&str> {
        self.staff_address
            .as_deref()
            .or(self.from_address.as_deref())
    }
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    587
}
