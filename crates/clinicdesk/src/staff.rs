// SPDX-FileCopyrightText: 2026 Clinicdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `clinicdesk bookings` and `clinicdesk audit` command implementations.
//!
//! Thin wrappers over the booking store. Authorization is the operator's
//! business: the store trusts the `--actor` it is given.

use std::io::Write;

use clinicdesk_core::{AuditEntry, Booking, BookingId, BookingStatus, BookingStore, ClinicError};
use colored::Colorize;

fn io_err(e: std::io::Error) -> ClinicError {
    ClinicError::Internal(format!("failed to write output: {e}"))
}

fn json_err(e: serde_json::Error) -> ClinicError {
    ClinicError::Internal(format!("failed to encode JSON: {e}"))
}

/// Print every booking, newest first.
pub async fn list_bookings(
    store: &dyn BookingStore,
    json: bool,
    out: &mut impl Write,
) -> Result<(), ClinicError> {
    let bookings = store.list_bookings().await?;
    if json {
        let text = serde_json::to_string_pretty(&bookings).map_err(json_err)?;
        return writeln!(out, "{text}").map_err(io_err);
    }
    if bookings.is_empty() {
        return writeln!(out, "No bookings found.").map_err(io_err);
    }
    writeln!(
        out,
        "{}",
        format!(
            "{:>5}  {:<20} {:<28} {:<10} {:<8} {:<20} {:<9} {}",
            "ID", "NAME", "EMAIL", "DATE", "TIME", "TYPE", "STATUS", "CREATED"
        )
        .bold()
    )
    .map_err(io_err)?;
    for booking in &bookings {
        writeln!(out, "{}", booking_row(booking)).map_err(io_err)?;
    }
    Ok(())
}

fn booking_row(b: &Booking) -> String {
    format!(
        "{:>5}  {:<20} {:<28} {:<10} {:<8} {:<20} {:<9} {}",
        b.id.to_string(),
        b.patient_name,
        b.patient_email,
        b.date_display(),
        b.time_display(),
        b.booking_type,
        b.status.to_string(),
        b.created_at,
    )
}

/// Change a booking's status on behalf of `actor`.
pub async fn update_status(
    store: &dyn BookingStore,
    id: BookingId,
    status: BookingStatus,
    actor: &str,
    out: &mut impl Write,
) -> Result<(), ClinicError> {
    store.update_status(id, status, actor).await?;
    writeln!(out, "Booking #{id} status changed to {status}.").map_err(io_err)
}

/// Delete a booking on behalf of `actor`.
pub async fn delete_booking(
    store: &dyn BookingStore,
    id: BookingId,
    actor: &str,
    out: &mut impl Write,
) -> Result<(), ClinicError> {
    store.delete_booking(id, actor).await?;
    writeln!(out, "Booking #{id} deleted.").map_err(io_err)
}

/// Print the audit log, newest first.
pub async fn show_audit(
    store: &dyn BookingStore,
    json: bool,
    out: &mut impl Write,
) -> Result<(), ClinicError> {
    let entries = store.list_audit_log().await?;
    if json {
        let text = serde_json::to_string_pretty(&entries).map_err(json_err)?;
        return writeln!(out, "{text}").map_err(io_err);
    }
    if entries.is_empty() {
        return writeln!(out, "No staff actions recorded yet.").map_err(io_err);
    }
    for entry in &entries {
        writeln!(out, "{}", audit_row(entry)).map_err(io_err)?;
    }
    Ok(())
}

fn audit_row(e: &AuditEntry) -> String {
    format!(
        "{}  booking #{:<5} {:<28} by {}",
        e.timestamp, e.booking_id, e.action, e.performed_by
    )
}

/// Parse a status argument such as `cancelled` or `Completed`.
pub fn parse_status(s: &str) -> Result<BookingStatus, String> {
    s.parse::<BookingStatus>()
        .map_err(|_| format!("unknown status `{s}` (expected pending, confirmed, cancelled or completed)"))
}
