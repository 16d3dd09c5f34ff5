
use rp_admin::ModerationDashboard;
use rp_core::{
    Ack, CoreError, ModerationAuthority, RawUserRecord, Result as CoreErrorResult, ViewParameters,
};

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;

pub(crate) fn user(id: i64, username: &str, complete: bool) -> RawUserRecord {
    let filled = |value: &str| complete.then(|| value.to_string());
    RawUserRecord {
        id,
        username: Some(username.to_string()),
        email: Some(format!("{}@example.com", username)),
        dob: filled("2000-01-15"),
        gender: filled("female"),
        phone: filled("555-0100"),
        city: filled("Springfield"),
    }
}

#[derive(Default)]
pub(crate) struct StubAuthority {
    records: Vec<RawUserRecord>,
    refuse: AtomicBool,
}

impl StubAuthority {
    pub fn refusing(self) -> Self {
        self.refuse.store(true, Ordering::SeqCst);
        self
    }

    fn answer(&self) -> CoreErrorResult<Ack> {
        if self.refuse.load(Ordering::SeqCst) {
            return Err(CoreError::network("backend unavailable"));
        }
        Ok(Ack::new(None))
    }
}

#[async_trait]
impl ModerationAuthority for StubAuthority {
    async fn load_all_records(&self) -> CoreErrorResult<Vec<RawUserRecord>> {
        Ok(self.records.clone())
    }

    async fn confirm_verification(&self, _id: i64) -> CoreErrorResult<Ack> {
        self.answer()
    }

    async fn confirm_rejection(&self, _id: i64) -> CoreErrorResult<Ack> {
        self.answer()
    }
}

pub(crate) async fn dashboard_of(
    authority: StubAuthority,
    page_size: usize,
) -> ModerationDashboard<StubAuthority> {
    ModerationDashboard::load_as_of(
        std::sync::Arc::new(authority),
        ViewParameters::new(page_size).unwrap(),
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
    )
    .await
    .unwrap()
}

pub(crate) fn stub(records: Vec<RawUserRecord>) -> StubAuthority {
    StubAuthority {
        records,
        ..Default::default()
    }
}
