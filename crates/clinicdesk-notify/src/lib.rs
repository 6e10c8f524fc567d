// SPDX-FileCopyrightText: 2026 Clinicdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Booking notifications for clinicdesk.
//!
//! Two [`Notifier`] backends: [`SmtpNotifier`] delivers plain-text mail over a
//! STARTTLS relay, [`DisabledNotifier`] stands in when mail is switched off.
//! Delivery failures never escape a notifier; they are logged and reported as
//! [`clinicdesk_core::DeliveryStatus::Failed`].

pub mod disabled;
pub mod smtp;
pub mod templates;

use std::sync::Arc;

use clinicdesk_config::ClinicDeskConfig;
use clinicdesk_core::{ClinicError, Notifier};
use tracing::info;

pub use disabled::DisabledNotifier;
pub use smtp::SmtpNotifier;

/// Pick the notifier backend for this configuration.
pub fn build_notifier(config: &ClinicDeskConfig) -> Result<Arc<dyn Notifier>, ClinicError> {
    if config.smtp.enabled {
        let notifier = SmtpNotifier::new(&config.smtp, &config.clinic)?;
        info!(host = %config.smtp.host, "email notifications enabled");
        Ok(Arc::new(notifier))
    } else {
        info!("email notifications disabled");
        Ok(Arc::new(DisabledNotifier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinicdesk_core::PluginAdapter;

    #[test]
    fn disabled_config_selects_disabled_backend() {
        let notifier = build_notifier(&ClinicDeskConfig::default()).unwrap();
        assert_eq!(notifier.name(), "disabled");
    }

    #[test]
    fn enabled_config_selects_smtp_backend() {
        let mut config = ClinicDeskConfig::default();
        config.smtp.enabled = true;
        config.smtp.from_address = Some("desk@clinic.test".into());
        let notifier = build_notifier(&config).unwrap();
        assert_eq!(notifier.name(), "smtp");
    }
}
