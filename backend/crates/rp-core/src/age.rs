//! Calendar-aware age arithmetic.

use chrono::{Datelike, NaiveDate};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Whole years between `date_of_birth` and `today`.
///
/// Year difference, minus one while `today`'s (month, day) is still before
/// the birthday's. A 29 February birthday counts from 1 March in common years.
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

/// Parse `YYYY-MM-DD`, or the date part of an ISO 8601 timestamp.
pub fn parse_date_of_birth(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Some(date);
    }

    // Timestamp: date part as written, offset ignored
    let separator = value.as_bytes().get(10)?;
    if *separator != b'T' && *separator != b' ' {
        return None;
    }
    value
        .get(..10)
        .and_then(|date| NaiveDate::parse_from_str(date, DATE_FORMAT).ok())
}
