// SPDX-FileCopyrightText: 2026 Clinicdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the clinicdesk workspace.

use thiserror::Error;

use crate::types::BookingId;

/// The primary error type used across all adapter traits and core operations.
///
/// User-correctable input problems (malformed email, date, or time) are not
/// errors: the conversation engine handles them by re-prompting.
#[derive(Debug, Error)]
pub enum ClinicError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Durability layer failures (database unavailable, query failure, corrupt row).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A staff operation referenced a booking that does not exist.
    #[error("booking #{booking_id} not found")]
    NotFound { booking_id: BookingId },

    /// Mail transport failures. Contained by notifiers, never fatal to a booking.
    #[error("notification error: {message}")]
    Notification {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The knowledge base failed to produce an answer.
    #[error("knowledge base error: {message}")]
    Knowledge { message: String },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ClinicError {
    /// Returns true if this error is a missing-booking rejection.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClinicError::NotFound { .. })
    }
}
