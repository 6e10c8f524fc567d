// SPDX-FileCopyrightText: 2026 Clinicdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Booking store trait: durable bookings plus the staff audit log.

use async_trait::async_trait;

use crate::error::ClinicError;
use crate::traits::adapter::PluginAdapter;
use crate::types::{AuditEntry, Booking, BookingId, BookingStatus, NewBooking};

/// Durable record keeper for bookings and the append-only audit log.
///
/// Every mutation is a single transaction: a status change or deletion is
/// never observable without its audit entry, or vice versa. The store performs
/// no authorization and trusts the `actor` it is given.
#[async_trait]
pub trait BookingStore: PluginAdapter {
    /// Initializes the backend (migrations, connection, etc.).
    async fn initialize(&self) -> Result<(), ClinicError>;

    /// Flushes pending writes and releases the backend.
    async fn close(&self) -> Result<(), ClinicError>;

    /// Inserts a booking in status `Confirmed` and returns the stored record.
    async fn create_booking(&self, booking: &NewBooking) -> Result<Booking, ClinicError>;

    /// Fetches a single booking.
    async fn get_booking(&self, id: BookingId) -> Result<Option<Booking>, ClinicError>;

    /// Lists all bookings, newest first.
    async fn list_bookings(&self) -> Result<Vec<Booking>, ClinicError>;

    /// Changes a booking's status and appends one audit entry.
    ///
    /// Fails with [`ClinicError::NotFound`] if the booking does not exist.
    async fn update_status(
        &self,
        id: BookingId,
        status: BookingStatus,
        actor: &str,
    ) -> Result<(), ClinicError>;

    /// Removes a booking and appends one audit entry describing the deletion.
    ///
    /// Fails with [`ClinicError::NotFound`] if the booking does not exist.
    async fn delete_booking(&self, id: BookingId, actor: &str) -> Result<(), ClinicError>;

    /// Lists the audit log, newest first.
    async fn list_audit_log(&self) -> Result<Vec<AuditEntry>, ClinicError>;
}
