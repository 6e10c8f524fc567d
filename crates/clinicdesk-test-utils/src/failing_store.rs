// SPDX-FileCopyrightText: 2026 Clinicdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A booking store that is always unavailable.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use clinicdesk_core::{
    AdapterType, AuditEntry, Booking, BookingId, BookingStatus, BookingStore, ClinicError,
    HealthStatus, NewBooking, PluginAdapter,
};

/// Every operation fails with [`ClinicError::Storage`]. Counts create attempts.
#[derive(Debug, Default)]
pub struct FailingStore {
    create_attempts: AtomicUsize,
}

impl FailingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_attempts(&self) -> usize {
        self.create_attempts.load(Ordering::SeqCst)
    }
}

fn unavailable() -> ClinicError {
    ClinicError::Storage {
        source: "database is unavailable".into(),
    }
}

#[async_trait]
impl PluginAdapter for FailingStore {
    fn name(&self) -> &str {
        "failing-store"
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Storage
    }

    async fn health_check(&self) -> Result<HealthStatus, ClinicError> {
        Ok(HealthStatus::Unhealthy("database is unavailable".into()))
    }
}

#[async_trait]
impl BookingStore for FailingStore {
    async fn initialize(&self) -> Result<(), ClinicError> {
        Ok(())
    }

    async fn close(&self) -> Result<(), ClinicError> {
        Ok(())
    }

    async fn create_booking(&self, _booking: &NewBooking) -> Result<Booking, ClinicError> {
        self.create_attempts.fetch_add(1, Ordering::SeqCst);
        Err(unavailable())
    }

    async fn get_booking(&self, _id: BookingId) -> Result<Option<Booking>, ClinicError> {
        Err(unavailable())
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>, ClinicError> {
        Err(unavailable())
    }

    async fn update_status(
        &self,
        _id: BookingId,
        _status: BookingStatus,
        _actor: &str,
    ) -> Result<(), ClinicError> {
        Err(unavailable())
    }

    async fn delete_booking(&self, _id: BookingId, _actor: &str) -> Result<(), ClinicError> {
        Err(unavailable())
    }

    async fn list_audit_log(&self) -> Result<Vec<AuditEntry>, ClinicError> {
        Err(unavailable())
    }
}
