// SPDX-FileCopyrightText: 2026 Clinicdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Audit log queries.
//!
//! Entries are only ever appended from inside a booking mutation's
//! transaction; this module exposes no standalone insert.

use clinicdesk_core::{AuditEntry, BookingId, ClinicError};
use rusqlite::params;

use crate::database::{map_tr_err, Database};

const AUDIT_COLUMNS: &str = "id, action, booking_id, performed_by, timestamp";

/// Append one entry using the caller's transaction.
pub(crate) fn append_entry(
    conn: &rusqlite::Connection,
    action: &str,
    booking_id: BookingId,
    performed_by: &str,
) -> Result<(), rusqlite::Error> {
    conn.execute(
        "INSERT INTO audit_log (action, booking_id, performed_by) VALUES (?1, ?2, ?3)",
        params![action, booking_id.0, performed_by],
    )?;
    Ok(())
}

fn row_to_entry(row: &rusqlite::Row<'_>) -> Result<AuditEntry, rusqlite::Error> {
    Ok(AuditEntry {
        id: row.get(0)?,
        action: row.get(1)?,
        booking_id: BookingId(row.get(2)?),
        performed_by: row.get(3)?,
        timestamp: row.get(4)?,
    })
}

/// List the whole audit log, newest first.
pub async fn list_audit_log(db: &Database) -> Result<Vec<AuditEntry>, ClinicError> {
    db.connection()
        .call(|conn| -> Result<Vec<AuditEntry>, rusqlite::Error> {
            let mut stmt = conn.prepare(&format!(
                "SELECT {AUDIT_COLUMNS} FROM audit_log ORDER BY timestamp DESC, id DESC"
            ))?;
            let rows = stmt.query_map([], row_to_entry)?;
            rows.collect()
        })
        .await
        .map_err(map_tr_err)
}

/// List the entries referencing one booking, newest first.
///
/// Works for deleted bookings too.
pub async fn list_for_booking(
    db: &Database,
    booking_id: BookingId,
) -> Result<Vec<AuditEntry>, ClinicError> {
    db.connection()
        .call(move |conn| -> Result<Vec<AuditEntry>, rusqlite::Error> {
            let mut stmt = conn.prepare(&format!(
                "SELECT {AUDIT_COLUMNS} FROM audit_log WHERE booking_id = ?1
                 ORDER BY timestamp DESC, id DESC"
            ))?;
            let rows = stmt.query_map(params![booking_id.0], row_to_entry)?;
            rows.collect()
        })
        .await
        .map_err(map_tr_err)
}
