// SPDX-FileCopyrightText: 2026 Clinicdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Booking CRUD operations.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use clinicdesk_core::types::{format_date, format_time, DATE_FORMAT, TIME_PARSE_FORMAT};
use clinicdesk_core::{Booking, BookingId, BookingStatus, ClinicError, NewBooking};
use rusqlite::params;
use rusqlite::types::Type;

use crate::database::{map_tr_err, Database};
use crate::queries::audit;

const BOOKING_COLUMNS: &str = "id, patient_name, patient_email, appointment_date, \
     appointment_time, booking_type, status, created_at";

fn conversion_err(
    column: usize,
    e: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(e))
}

fn row_to_booking(row: &rusqlite::Row<'_>) -> Result<Booking, rusqlite::Error> {
    let date: String = row.get(3)?;
    let time: String = row.get(4)?;
    let status: String = row.get(6)?;
    Ok(Booking {
        id: BookingId(row.get(0)?),
        patient_name: row.get(1)?,
        patient_email: row.get(2)?,
        date: NaiveDate::parse_from_str(&date, DATE_FORMAT).map_err(|e| conversion_err(3, e))?,
        time: NaiveTime::parse_from_str(&time, TIME_PARSE_FORMAT)
            .map_err(|e| conversion_err(4, e))?,
        booking_type: row.get(5)?,
        status: BookingStatus::from_str(&status).map_err(|e| conversion_err(6, e))?,
        created_at: row.get(7)?,
    })
}

/// Insert a booking in status `Confirmed` and return the stored row.
///
/// The insert and the read-back share one transaction, so the caller either
/// gets a complete record or an error with nothing written.
pub async fn insert_booking(db: &Database, booking: &NewBooking) -> Result<Booking, ClinicError> {
    let name = booking.patient_name.clone();
    let email = booking.patient_email.clone();
    let date = format_date(booking.date);
    let time = format_time(booking.time);
    let booking_type = booking.booking_type.clone();
    db.connection()
        .call(move |conn| -> Result<Booking, rusqlite::Error> {
            let tx = conn.transaction()?;
            tx.execute(
                "INSERT INTO bookings
                 (patient_name, patient_email, appointment_date, appointment_time, booking_type, status)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    name,
                    email,
                    date,
                    time,
                    booking_type,
                    BookingStatus::Confirmed.to_string(),
                ],
            )?;
            let id = tx.last_insert_rowid();
            let stored = tx.query_row(
                &format!("SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = ?1"),
                params![id],
                row_to_booking,
            )?;
            tx.commit()?;
            Ok(stored)
        })
        .await
        .map_err(map_tr_err)
}

/// Get a booking by ID.
pub async fn get_booking(db: &Database, id: BookingId) -> Result<Option<Booking>, ClinicError> {
    db.connection()
        .call(move |conn| -> Result<Option<Booking>, rusqlite::Error> {
            let result = conn.query_row(
                &format!("SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = ?1"),
                params![id.0],
                row_to_booking,
            );
            match result {
                Ok(booking) => Ok(Some(booking)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(map_tr_err)
}

/// List all bookings, newest first. Ties on the timestamp fall back to id.
pub async fn list_bookings(db: &Database) -> Result<Vec<Booking>, ClinicError> {
    db.connection()
        .call(|conn| -> Result<Vec<Booking>, rusqlite::Error> {
            let mut stmt = conn.prepare(&format!(
                "SELECT {BOOKING_COLUMNS} FROM bookings ORDER BY created_at DESC, id DESC"
            ))?;
            let rows = stmt.query_map([], row_to_booking)?;
            let mut bookings = Vec::new();
            for row in rows {
                bookings.push(row?);
            }
            Ok(bookings)
        })
        .await
        .map_err(map_tr_err)
}

/// Change a booking's status and record the change in the audit log.
///
/// Returns [`ClinicError::NotFound`] (with nothing written) for an unknown id.
pub async fn update_status(
    db: &Database,
    id: BookingId,
    status: BookingStatus,
    actor: &str,
) -> Result<(), ClinicError> {
    let actor = actor.to_string();
    let found = db
        .connection()
        .call(move |conn| -> Result<bool, rusqlite::Error> {
            let tx = conn.transaction()?;
            let changed = tx.execute(
                "UPDATE bookings SET status = ?1 WHERE id = ?2",
                params![status.to_string(), id.0],
            )?;
            if changed == 0 {
                return Ok(false);
            }
            audit::append_entry(&tx, &format!("Status changed to {status}"), id, &actor)?;
            tx.commit()?;
            Ok(true)
        })
        .await
        .map_err(map_tr_err)?;

    if found {
        Ok(())
    } else {
        Err(ClinicError::NotFound { booking_id: id })
    }
}

/// Delete a booking and record the deletion in the audit log.
///
/// Returns [`ClinicError::NotFound`] (with nothing written) for an unknown id.
pub async fn delete_booking(db: &Database, id: BookingId, actor: &str) -> Result<(), ClinicError> {
    let actor = actor.to_string();
    let found = db
        .connection()
        .call(move |conn| -> Result<bool, rusqlite::Error> {
            let tx = conn.transaction()?;
            let removed = tx.execute("DELETE FROM bookings WHERE id = ?1", params![id.0])?;
            if removed == 0 {
                return Ok(false);
            }
            audit::append_entry(&tx, "Booking deleted", id, &actor)?;
            tx.commit()?;
            Ok(true)
        })
        .await
        .map_err(map_tr_err)?;

    if found {
        Ok(())
    } else {
        Err(ClinicError::NotFound { booking_id: id })
    }
}
