// SPDX-FileCopyrightText: 2026 Clinicdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plain-text message bodies for patient confirmations and staff alerts.

use clinicdesk_config::model::ClinicConfig;
use clinicdesk_core::Booking;

/// Subject line of every staff alert.
pub const STAFF_ALERT_SUBJECT: &str = "New Appointment Booked - Admin Alert";

/// A rendered message ready to hand to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    pub subject: String,
    pub body: String,
}

/// Render the confirmation sent to the patient.
pub fn confirmation(booking: &Booking, clinic: &ClinicConfig) -> RenderedMessage {
    let mut body = format!(
        "Hello {name},\n\
         \n\
         Your appointment has been successfully booked!\n\
         \n\
         Booking Details:\n\
         -------------------------\n\
         Booking ID   : {id}\n\
         Name         : {name}\n\
         Date         : {date}\n\
         Time         : {time}\n\
         Appointment  : {kind}\n\
         \n\
         Location:\n\
         {clinic_name}\n\
         {location}\n\
         \n\
         If you need to reschedule or cancel, please contact us.\n",
        name = booking.patient_name,
        id = booking.id,
        date = booking.date_display(),
        time = booking.time_display(),
        kind = booking.booking_type,
        clinic_name = clinic.name,
        location = clinic.location,
    );

    if clinic.phone.is_some() || clinic.contact_email.is_some() {
        body.push('\n');
    }
    if let Some(phone) = &clinic.phone {
        body.push_str(&format!("Phone: {phone}\n"));
    }
    if let Some(email) = &clinic.contact_email {
        body.push_str(&format!("Email: {email}\n"));
    }
    body.push_str(&format!("\nThank you for choosing {}!\n", clinic.name));

    RenderedMessage {
        subject: format!("Appointment Confirmation - {}", clinic.name),
        body,
    }
}

/// Render the new-booking alert sent to staff.
pub fn staff_alert(booking: &Booking) -> RenderedMessage {
    let body = format!(
        "New appointment has been booked.\n\
         \n\
         Booking Details:\n\
         -------------------------\n\
         Booking ID : {id}\n\
         Patient    : {name}\n\
         Date       : {date}\n\
         Time       : {time}\n\
         \n\
         Please review this booking in the admin dashboard.\n",
        id = booking.id,
        name = booking.patient_name,
        date = booking.date_display(),
        time = booking.time_display(),
    );
    RenderedMessage {
        subject: STAFF_ALERT_SUBJECT.to_string(),
        body,
    }
}
