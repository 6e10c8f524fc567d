// SPDX-FileCopyrightText: 2026 Clinicdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Booking domain types shared across adapter traits.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Calendar date format accepted from patients and persisted in the store.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 12-hour clock format used when parsing patient input (`10:30 AM`).
pub const TIME_PARSE_FORMAT: &str = "%I:%M %p";

/// 12-hour clock format used for display and persistence (`9:05 AM`).
pub const TIME_DISPLAY_FORMAT: &str = "%-I:%M %p";

/// Store-assigned booking identifier. Unique and strictly increasing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BookingId(pub i64);

impl std::fmt::Display for BookingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of a booking.
///
/// Bookings created by the conversation are always `Confirmed`; the other
/// values are only reachable through staff status updates.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

/// A persisted booking record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub patient_name: String,
    pub patient_email: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub booking_type: String,
    pub status: BookingStatus,
    /// ISO 8601 creation timestamp, set by the store.
    pub created_at: String,
}

impl Booking {
    /// The appointment date as `YYYY-MM-DD`.
    pub fn date_display(&self) -> String {
        format_date(self.date)
    }

    /// The appointment time as `H:MM AM|PM`.
    pub fn time_display(&self) -> String {
        format_time(self.time)
    }
}

/// The fields required to create a booking. The store assigns id, status and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub patient_name: String,
    pub patient_email: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub booking_type: String,
}

/// One row of the append-only staff audit log.
///
/// `booking_id` is a reference: the entry outlives a deleted booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: i64,
    pub action: String,
    pub booking_id: BookingId,
    pub performed_by: String,
    pub timestamp: String,
}

/// Result of a single best-effort notification attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryStatus {
    /// The transport accepted the message.
    Sent,
    /// The attempt failed; the reason is for logs, not for patients.
    Failed(String),
}

impl DeliveryStatus {
    pub fn is_sent(&self) -> bool {
        matches!(self, DeliveryStatus::Sent)
    }
}

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Adapter is fully operational.
    Healthy,
    /// Adapter is operational but experiencing issues.
    Degraded(String),
    /// Adapter is not operational.
    Unhealthy(String),
}

/// Identifies the kind of adapter behind a trait object.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum AdapterType {
    Storage,
    Notifier,
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_DISPLAY_FORMAT).to_string()
}
