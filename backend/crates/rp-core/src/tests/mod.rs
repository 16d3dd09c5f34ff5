mod models;
mod property_tests;

use crate::{RawUserRecord, RecordStore};

use chrono::NaiveDate;

/// Fixed "today" so derived ages are deterministic
pub(crate) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

/// A complete profile (loads as `Submitted`)
pub(crate) fn complete(id: i64, username: &str, dob: &str, gender: &str) -> RawUserRecord {
    RawUserRecord {
        id,
        username: Some(username.to_string()),
        email: Some(format!("{}@example.com", username.to_lowercase())),
        dob: Some(dob.to_string()),
        gender: Some(gender.to_string()),
        phone: Some("555-0100".to_string()),
        city: Some("Springfield".to_string()),
    }
}

/// A profile missing date of birth, gender, phone and city (loads as `Pending`)
pub(crate) fn incomplete(id: i64, username: &str) -> RawUserRecord {
    RawUserRecord {
        id,
        username: Some(username.to_string()),
        email: Some(format!("{}@example.com", username.to_lowercase())),
        ..Default::default()
    }
}

pub(crate) fn store_of(rows: Vec<RawUserRecord>) -> RecordStore {
    RecordStore::load(rows, today())
}
