// SPDX-FileCopyrightText: 2026 Clinicdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query modules for bookings and the audit log.

pub mod audit;
pub mod bookings;
