// SPDX-FileCopyrightText: 2026 Clinicdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock notifier for deterministic testing.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use clinicdesk_core::{
    AdapterType, Booking, BookingId, ClinicError, DeliveryStatus, HealthStatus, Notifier,
    PluginAdapter,
};

/// A notifier that records calls instead of sending mail.
///
/// Confirmations report [`DeliveryStatus::Sent`] unless the notifier was
/// created with [`MockNotifier::failing`] or switched with [`set_failing`].
///
/// [`set_failing`]: MockNotifier::set_failing
pub struct MockNotifier {
    failing: AtomicBool,
    confirmations: Mutex<Vec<BookingId>>,
    alerts: Mutex<Vec<BookingId>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self {
            failing: AtomicBool::new(false),
            confirmations: Mutex::new(Vec::new()),
            alerts: Mutex::new(Vec::new()),
        }
    }

    /// A notifier whose every confirmation fails.
    pub fn failing() -> Self {
        let notifier = Self::new();
        notifier.set_failing(true);
        notifier
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Booking ids a confirmation was attempted for, in call order.
    pub fn confirmations(&self) -> Vec<BookingId> {
        self.confirmations.lock().unwrap().clone()
    }

    /// Booking ids a staff alert was attempted for, in call order.
    pub fn alerts(&self) -> Vec<BookingId> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Default for MockNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PluginAdapter for MockNotifier {
    fn name(&self) -> &str {
        "mock-notifier"
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Notifier
    }

    async fn health_check(&self) -> Result<HealthStatus, ClinicError> {
        Ok(HealthStatus::Healthy)
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn send_confirmation(&self, booking: &Booking) -> DeliveryStatus {
        self.confirmations.lock().unwrap().push(booking.id);
        if self.failing.load(Ordering::SeqCst) {
            DeliveryStatus::Failed("mock transport failure".into())
        } else {
            DeliveryStatus::Sent
        }
    }

    async fn send_staff_alert(&self, booking: &Booking) {
        self.alerts.lock().unwrap().push(booking.id);
    }
}
