// SPDX-FileCopyrightText: 2026 Clinicdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered configuration loading with Figment.
//!
//! Lookup order: `/etc/clinicdesk/clinicdesk.toml`, then
//! `~/.config/clinicdesk/clinicdesk.toml`, then `./clinicdesk.toml`, then
//! `CLINICDESK_*` environment variables. Later layers win.

#![allow(clippy::result_large_err)] // figment::Error is external

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::ClinicDeskConfig;

const FILE_NAME: &str = "clinicdesk.toml";

/// Config file locations in merge order (lowest precedence first).
pub fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("/etc/clinicdesk").join(FILE_NAME)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("clinicdesk").join(FILE_NAME));
    }
    paths.push(PathBuf::from(FILE_NAME));
    paths
}

/// Build the full layered Figment without extracting it.
pub fn build_figment() -> Figment {
    candidate_paths()
        .into_iter()
        .fold(
            Figment::new().merge(Serialized::defaults(ClinicDeskConfig::default())),
            |figment, path| figment.merge(Toml::file(path)),
        )
        .merge(env_provider())
}

/// Load configuration from the standard hierarchy with env var overrides.
pub fn load_config() -> Result<ClinicDeskConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no files, no environment).
pub fn load_config_from_str(toml_content: &str) -> Result<ClinicDeskConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ClinicDeskConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from one explicit file with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<ClinicDeskConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ClinicDeskConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Section names recognised in `CLINICDESK_<SECTION>_<KEY>` variables.
const SECTIONS: &[&str] = &["agent", "clinic", "storage", "smtp"];

/// Maps `CLINICDESK_SMTP_FROM_ADDRESS` to `smtp.from_address`.
///
/// Only the first underscore after a known section name becomes a dot, so
/// keys that themselves contain underscores survive intact.
fn env_provider() -> Env {
    Env::prefixed("CLINICDESK_").map(|key| {
        let key = key.as_str().to_ascii_lowercase();
        SECTIONS
            .iter()
            .find_map(|section| {
                key.strip_prefix(section)
                    .and_then(|rest| rest.strip_prefix('_'))
                    .map(|rest| format!("{section}.{rest}"))
            })
            .unwrap_or(key)
            .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_paths_end_with_local_file() {
        let paths = candidate_paths();
        assert_eq!(paths.first().unwrap(), Path::new("/etc/clinicdesk/clinicdesk.toml"));
        assert_eq!(paths.last().unwrap(), Path::new("clinicdesk.toml"));
    }

    #[test]
    fn env_vars_map_to_sections() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("CLINICDESK_SMTP_FROM_ADDRESS", "desk@clinic.test");
            jail.set_env("CLINICDESK_CLINIC_BOOKING_TYPE", "Checkup");
            jail.set_env("CLINICDESK_STORAGE_WAL_MODE", "false");

            let config: ClinicDeskConfig = Figment::new()
                .merge(Serialized::defaults(ClinicDeskConfig::default()))
                .merge(env_provider())
                .extract()?;

            assert_eq!(config.smtp.from_address.as_deref(), Some("desk@clinic.test"));
            assert_eq!(config.clinic.booking_type, "Checkup");
            assert!(!config.storage.wal_mode);
            Ok(())
        });
    }

    #[test]
    fn local_file_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                FILE_NAME,
                r#"
                [clinic]
                name = "Riverside Dental"
                "#,
            )?;
            let config: ClinicDeskConfig = Figment::new()
                .merge(Serialized::defaults(ClinicDeskConfig::default()))
                .merge(Toml::file(FILE_NAME))
                .extract()?;
            assert_eq!(config.clinic.name, "Riverside Dental");
            Ok(())
        });
    }
}
