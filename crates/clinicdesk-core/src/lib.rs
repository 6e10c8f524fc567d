// SPDX-FileCopyrightText: 2026 Clinicdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the clinicdesk front-desk assistant.
//!
//! This crate provides the booking domain types, the error type, and the
//! adapter traits shared by the storage, notification, and conversation
//! crates. Concrete backends implement the traits defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::ClinicError;
pub use types::{
    AdapterType, AuditEntry, Booking, BookingId, BookingStatus, DeliveryStatus, HealthStatus,
    NewBooking,
};

pub use traits::{BookingStore, KnowledgeBase, Notifier, PluginAdapter};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clinic_error_has_all_variants() {
        let _config = ClinicError::Config("test".into());
        let _storage = ClinicError::Storage {
            source: Box::new(std::io::Error::other("test")),
        };
        let _not_found = ClinicError::NotFound {
            booking_id: BookingId(7),
        };
        let _notification = ClinicError::Notification {
            message: "test".into(),
            source: None,
        };
        let _knowledge = ClinicError::Knowledge {
            message: "test".into(),
        };
        let _internal = ClinicError::Internal("test".into());
    }

    #[test]
    fn not_found_message_names_the_booking() {
        let err = ClinicError::NotFound {
            booking_id: BookingId(42),
        };
        assert_eq!(err.to_string(), "booking #42 not found");
    }

    #[test]
    fn all_trait_modules_are_exported() {
        fn _assert_plugin_adapter<T: PluginAdapter>() {}
        fn _assert_booking_store<T: BookingStore>() {}
        fn _assert_notifier<T: Notifier>() {}
        fn _assert_knowledge_base<T: KnowledgeBase>() {}
    }
}
