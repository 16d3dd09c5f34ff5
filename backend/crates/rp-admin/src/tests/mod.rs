
use rp_core::{Ack, CoreError, ModerationAuthority, RawUserRecord, Result as CoreErrorResult};

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;

pub(crate) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

pub(crate) fn complete(id: i64, username: &str) -> RawUserRecord {
    RawUserRecord {
        id,
        username: Some(username.to_string()),
        email: Some(format!("{}@example.com", username.to_lowercase())),
        dob: Some("1990-03-15".to_string()),
        gender: Some("female".to_string()),
        phone: Some("555-0100".to_string()),
        city: Some("Springfield".to_string()),
    }
}

pub(crate) fn incomplete(id: i64, username: &str) -> RawUserRecord {
    RawUserRecord {
        id,
        username: Some(username.to_string()),
        ..Default::default()
    }
}

/// In-memory authority that records every confirmation it receives
#[derive(Default)]
pub(crate) struct FakeAuthority {
    records: Vec<RawUserRecord>,
    fail_load: bool,
    fail_confirmations: AtomicBool,
    pub verifications: Mutex<Vec<i64>>,
    pub rejections: Mutex<Vec<i64>>,
}

impl FakeAuthority {
    pub fn with_records(records: Vec<RawUserRecord>) -> Self {
        Self {
            records,
            ..Default::default()
        }
    }

    pub fn unreachable() -> Self {
        Self {
            fail_load: true,
            ..Default::default()
        }
    }

    pub fn fail_confirmations(&self, fail: bool) {
        self.fail_confirmations.store(fail, Ordering::SeqCst);
    }

    fn confirm(&self, calls: &Mutex<Vec<i64>>, id: i64, message: &str) -> CoreErrorResult<Ack> {
        calls.lock().unwrap().push(id);
        if self.fail_confirmations.load(Ordering::SeqCst) {
            return Err(CoreError::network("connection refused"));
        }
        Ok(Ack::new(Some(message.to_string())))
    }
}

#[async_trait]
impl ModerationAuthority for FakeAuthority {
    async fn load_all_records(&self) -> CoreErrorResult<Vec<RawUserRecord>> {
        if self.fail_load {
            return Err(CoreError::network("connection refused"));
        }
        Ok(self.records.clone())
    }

    async fn confirm_verification(&self, id: i64) -> CoreErrorResult<Ack> {
        self.confirm(&self.verifications, id, "User verified")
    }

    async fn confirm_rejection(&self, id: i64) -> CoreErrorResult<Ack> {
        self.confirm(&self.rejections, id, "User rejected")
    }
}
