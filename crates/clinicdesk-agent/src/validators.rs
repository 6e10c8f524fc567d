// SPDX-FileCopyrightText: 2026 Clinicdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Input validators for the booking dialogue.
//!
//! Each validator checks the text exactly as received: no trimming, no case
//! folding beyond what the format allows. The `parse_*` functions return the
//! typed value so the engine never re-parses text it already accepted.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use clinicdesk_core::types::{DATE_FORMAT, TIME_PARSE_FORMAT};
use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.\-]+@[A-Za-z0-9_.\-]+\.[A-Za-z0-9_]+$").expect("valid regex")
});

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));

static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}:\d{2} [AaPp][Mm]$").expect("valid regex"));

/// `local@domain.tld` with ASCII word characters, dots and hyphens.
pub fn is_valid_email(text: &str) -> bool {
    EMAIL_RE.is_match(text)
}

/// Parse `YYYY-MM-DD`. Rejects other separators, orders and impossible dates.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    if !DATE_RE.is_match(text) {
        return None;
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
}

pub fn is_valid_date(text: &str) -> bool {
    parse_date(text).is_some()
}

/// Parse a 12-hour clock time such as `10:30 AM` or `9:05 pm`.
pub fn parse_time(text: &str) -> Option<NaiveTime> {
    if !TIME_RE.is_match(text) {
        return None;
    }
    NaiveTime::parse_from_str(text, TIME_PARSE_FORMAT).ok()
}

pub fn is_valid_time(text: &str) -> bool {
    parse_time(text).is_some()
}
