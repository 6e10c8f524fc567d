// SPDX-FileCopyrightText: 2026 Clinicdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notifier trait for booking confirmations and staff alerts.

use async_trait::async_trait;

use crate::traits::adapter::PluginAdapter;
use crate::types::{Booking, DeliveryStatus};

/// Best-effort dispatch of booking notifications.
///
/// Neither method returns an error: transport failures are contained inside
/// the implementation. Each call is a single independent attempt.
#[async_trait]
pub trait Notifier: PluginAdapter {
    /// Sends the confirmation message to the patient.
    async fn send_confirmation(&self, booking: &Booking) -> DeliveryStatus;

    /// Sends the new-booking alert to staff. Failures are logged, not returned.
    async fn send_staff_alert(&self, booking: &Booking);
}
