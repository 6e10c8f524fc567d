// SPDX-FileCopyrightText: 2026 Clinicdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Canned assistant texts.

use clinicdesk_core::BookingId;

use crate::session::BookingDraft;

pub fn greeting(clinic_name: &str) -> String {
    format!(
        "Hello! Welcome to {clinic_name}.\n\n\
         How can I help you today?\n\
         - Book an appointment\n\
         - Clinic timings\n\
         - Treatments offered\n\
         - Doctors information"
    )
}

pub const THANKS: &str =
    "You're welcome! If you need anything else or want to book an appointment, just let me know.";

pub const NO_KNOWLEDGE: &str = "Please upload a clinic brochure so I can answer your questions, \
     or just say **'Book'** to schedule an appointment.";

pub const ASK_NAME: &str = "I can help you book an appointment. First, what is your **Full Name**?";

pub const NAME_REQUIRED: &str = "Please enter your **Full Name** to continue.";

pub const ASK_EMAIL: &str = "Please enter your **Email Address**.";

pub const INVALID_EMAIL: &str = "Invalid email format.\n\
     Please enter a valid **Email Address** (example: name@gmail.com)";

pub const ASK_DATE: &str = "What **Date** would you like? (YYYY-MM-DD)";

pub const INVALID_DATE: &str = "Invalid date format.\nPlease enter the date in **YYYY-MM-DD** format.";

pub const ASK_TIME: &str = "Got it. What **Time** works for you? (e.g., 10:30 AM)";

pub const INVALID_TIME: &str = "Invalid time format.\nPlease enter time like **10:30 AM**";

pub const CANCELLED: &str = "Booking cancelled. You can ask me other questions.";

pub const NOT_CREATED: &str = "Sorry, your booking could not be created due to a system problem. \
     Nothing was saved; please try again in a moment.";

pub fn summary(draft: &BookingDraft) -> String {
    format!(
        "Please confirm details:\n\
         - **Name:** {}\n\
         - **Email:** {}\n\
         - **Date:** {}\n\
         - **Time:** {}\n\n\
         Type **'Yes'** to confirm or **'No'** to cancel.",
        draft.name,
        draft.email,
        draft.date_display(),
        draft.time_display(),
    )
}

pub fn confirmed(booking_id: BookingId, email_sent: bool) -> String {
    if email_sent {
        format!("Booking Confirmed!\nBooking ID: {booking_id}\nConfirmation email sent successfully.")
    } else {
        format!("Booking Confirmed!\nBooking ID: {booking_id}\nEmail could not be sent.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn summary_lists_every_field() {
        let draft = BookingDraft {
            name: "Jane Doe".into(),
            email: "jane@mail.com".into(),
            date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            time: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
        };
        let text = summary(&draft);
        assert!(text.contains("**Name:** Jane Doe"));
        assert!(text.contains("**Email:** jane@mail.com"));
        assert!(text.contains("**Date:** 2025-03-10"));
        assert!(text.contains("**Time:** 10:30 AM"));
        assert!(text.ends_with("Type **'Yes'** to confirm or **'No'** to cancel."));
    }

    #[test]
    fn confirmation_text_depends_on_delivery() {
        assert!(confirmed(BookingId(4), true).contains("Booking ID: 4"));
        assert!(confirmed(BookingId(4), true).contains("email sent"));
        assert!(confirmed(BookingId(4), false).contains("could not be sent"));
    }

    #[test]
    fn greeting_names_the_clinic() {
        assert!(greeting("SmileCare Dental Clinic").starts_with("Hello! Welcome to SmileCare"));
    }
}
