use crate::age::{age_on, parse_date_of_birth};
use crate::{ModerationStatus, RawUserRecord};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the moderation collection, with its derived fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,

    // Profile
    pub username: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,

    // Derived at load
    pub age: Option<i32>,
    pub completeness: bool,

    // Moderation
    pub moderation_status: ModerationStatus,
    pub is_verified: bool,
}

impl UserRecord {
    /// Ingest a raw row, deriving age and completeness as of `today`.
    pub fn from_raw(raw: RawUserRecord, today: NaiveDate) -> Self {
        let age = raw
            .dob
            .as_deref()
            .and_then(parse_date_of_birth)
            .map(|dob| age_on(dob, today));

        let completeness = [
            &raw.username,
            &raw.email,
            &raw.dob,
            &raw.gender,
            &raw.phone,
            &raw.city,
        ]
        .into_iter()
        .all(is_filled);

        Self {
            id: raw.id,
            username: raw.username,
            email: raw.email,
            date_of_birth: raw.dob,
            gender: raw.gender,
            phone: raw.phone,
            city: raw.city,
            age,
            completeness,
            moderation_status: ModerationStatus::initial(completeness),
            is_verified: false,
        }
    }

    /// Username for notices, falling back to the id when the profile has none
    pub fn display_name(&self) -> String {
        match self.username.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("User #{}", self.id),
        }
    }

    /// Set status and keep `is_verified` in step with it.
    pub(crate) fn mark(&mut self, status: ModerationStatus) {
        self.moderation_status = status;
        self.is_verified = status == ModerationStatus::Verified;
    }
}

fn is_filled(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|value| !value.trim().is_empty())
}
