// SPDX-FileCopyrightText: 2026 Clinicdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SMTP notifier backed by lettre's async STARTTLS transport.

use std::time::Duration;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{debug, warn};

use clinicdesk_config::model::{ClinicConfig, SmtpConfig};
use clinicdesk_core::{
    AdapterType, Booking, ClinicError, DeliveryStatus, HealthStatus, Notifier, PluginAdapter,
};

use crate::templates::{self, RenderedMessage};

/// Upper bound on one SMTP exchange, so a stalled relay cannot hold a turn.
const SEND_TIMEOUT: Duration = Duration::from_secs(20);

/// Sends confirmations and staff alerts through an SMTP relay.
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    staff: Option<Mailbox>,
    clinic: ClinicConfig,
}

impl SmtpNotifier {
    /// Build the transport from configuration. No connection is made here.
    pub fn new(smtp: &SmtpConfig, clinic: &ClinicConfig) -> Result<Self, ClinicError> {
        let from = smtp
            .from_address
            .as_deref()
            .ok_or_else(|| ClinicError::Config("smtp.from_address is required".into()))
            .and_then(parse_mailbox)?;
        let staff = smtp.alert_recipient().map(parse_mailbox).transpose()?;

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp.host)
            .map_err(|e| ClinicError::Config(format!("invalid smtp.host `{}`: {e}", smtp.host)))?
            .port(smtp.port)
            .timeout(Some(SEND_TIMEOUT));

        if let (Some(username), Some(password)) = (&smtp.username, &smtp.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        debug!(host = %smtp.host, port = smtp.port, "SMTP notifier configured");
        Ok(Self {
            transport: builder.build(),
            from,
            staff,
            clinic: clinic.clone(),
        })
    }

    async fn deliver(&self, to: Mailbox, message: RenderedMessage) -> Result<(), ClinicError> {
        let email = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(message.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(message.body)
            .map_err(|e| notification_error("failed to build message", e))?;

        self.transport
            .send(email)
            .await
            .map_err(|e| notification_error("SMTP send failed", e))?;
        Ok(())
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, ClinicError> {
    address
        .parse::<Mailbox>()
        .map_err(|e| ClinicError::Config(format!("`{address}` is not a valid mailbox: {e}")))
}

fn notification_error(
    message: &str,
    e: impl std::error::Error + Send + Sync + 'static,
) -> ClinicError {
    ClinicError::Notification {
        message: format!("{message}: {e}"),
        source: Some(Box::new(e)),
    }
}

#[async_trait]
impl PluginAdapter for SmtpNotifier {
    fn name(&self) -> &str {
        "smtp"
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Notifier
    }

    async fn health_check(&self) -> Result<HealthStatus, ClinicError> {
        match self.transport.test_connection().await {
            Ok(true) => Ok(HealthStatus::Healthy),
            Ok(false) => Ok(HealthStatus::Degraded("relay refused NOOP".into())),
            Err(e) => Ok(HealthStatus::Unhealthy(e.to_string())),
        }
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send_confirmation(&self, booking: &Booking) -> DeliveryStatus {
        let to = match booking.patient_email.parse::<Mailbox>() {
            Ok(to) => to,
            Err(e) => {
                warn!(booking_id = %booking.id, error = %e, "confirmation email failed: bad recipient");
                return DeliveryStatus::Failed(e.to_string());
            }
        };

        match self
            .deliver(to, templates::confirmation(booking, &self.clinic))
            .await
        {
            Ok(()) => {
                debug!(booking_id = %booking.id, "confirmation email sent");
                DeliveryStatus::Sent
            }
            Err(e) => {
                warn!(booking_id = %booking.id, error = %e, "confirmation email failed");
                DeliveryStatus::Failed(e.to_string())
            }
        }
    }

    async fn send_staff_alert(&self, booking: &Booking) {
        let Some(to) = self.staff.clone() else {
            debug!(booking_id = %booking.id, "no staff address configured, alert skipped");
            return;
        };
        match self.deliver(to, templates::staff_alert(booking)).await {
            Ok(()) => debug!(booking_id = %booking.id, "staff alert sent"),
            Err(e) => warn!(booking_id = %booking.id, error = %e, "staff alert failed"),
        }
    }
}
