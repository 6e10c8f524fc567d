// SPDX-FileCopyrightText: 2026 Clinicdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notifier used when outbound mail is switched off.

use async_trait::async_trait;
use tracing::debug;

use clinicdesk_core::{
    AdapterType, Booking, ClinicError, DeliveryStatus, HealthStatus, Notifier, PluginAdapter,
};

/// Reason reported for every confirmation while mail is disabled.
pub const DISABLED_REASON: &str = "notifications disabled";

/// Never sends anything. Confirmations report [`DeliveryStatus::Failed`] so
/// the patient is told no email is coming.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledNotifier;

#[async_trait]
impl PluginAdapter for DisabledNotifier {
    fn name(&self) -> &str {
        "disabled"
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Notifier
    }

    async fn health_check(&self) -> Result<HealthStatus, ClinicError> {
        Ok(HealthStatus::Degraded(DISABLED_REASON.into()))
    }
}

#[async_trait]
impl Notifier for DisabledNotifier {
    async fn send_confirmation(&self, booking: &Booking) -> DeliveryStatus {
        debug!(booking_id = %booking.id, "confirmation skipped: {DISABLED_REASON}");
        DeliveryStatus::Failed(DISABLED_REASON.into())
    }

    async fn send_staff_alert(&self, booking: &Booking) {
        debug!(booking_id = %booking.id, "staff alert skipped: {DISABLED_REASON}");
    }
}
