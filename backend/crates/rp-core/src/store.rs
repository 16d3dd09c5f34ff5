//! Record Store: the single owner of the moderation collection.

use crate::{
    CoreError, ModerationStatus, RawUserRecord, Result as CoreErrorResult, Transition, UserRecord,
};

use std::collections::HashMap;
use std::panic::Location;

use chrono::NaiveDate;
use error_location::ErrorLocation;

/// In-memory collection of user records and their moderation state
///
/// Rows are never removed: a rejection marks the row, it does not delete it.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<UserRecord>,
    index: HashMap<i64, usize>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest a bulk load, deriving age and completeness as of `today`.
    ///
    /// A repeated id replaces the earlier row in place.
    pub fn load(raw: Vec<RawUserRecord>, today: NaiveDate) -> Self {
        let mut store = Self::new();
        for row in raw {
            let record = UserRecord::from_raw(row, today);
            match store.index.get(&record.id) {
                Some(&position) => store.records[position] = record,
                None => {
                    store.index.insert(record.id, store.records.len());
                    store.records.push(record);
                }
            }
        }
        store
    }

    /// Records in load order
    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn get(&self, id: i64) -> Option<&UserRecord> {
        self.index.get(&id).map(|&position| &self.records[position])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Mark a record `Verified`.
    ///
    /// Refused with [`CoreError::ModerationPrecondition`] while the record is
    /// still `Pending`; the record is left untouched in that case.
    #[track_caller]
    pub fn verify(&mut self, id: i64) -> CoreErrorResult<Transition> {
        let location = Location::caller();
        let record = self.record_mut(id, location)?;

        if record.moderation_status == ModerationStatus::Pending {
            return Err(CoreError::ModerationPrecondition {
                id,
                username: record.display_name(),
                location: ErrorLocation::from(location),
            });
        }

        Ok(Self::apply(record, ModerationStatus::Verified))
    }

    /// Mark a record `Rejected`, whatever its current status.
    #[track_caller]
    pub fn reject(&mut self, id: i64) -> CoreErrorResult<Transition> {
        let location = Location::caller();
        let record = self.record_mut(id, location)?;

        Ok(Self::apply(record, ModerationStatus::Rejected))
    }

    fn record_mut(
        &mut self,
        id: i64,
        location: &'static Location<'static>,
    ) -> CoreErrorResult<&mut UserRecord> {
        match self.index.get(&id) {
            Some(&position) => Ok(&mut self.records[position]),
            None => Err(CoreError::RecordNotFound {
                id,
                location: ErrorLocation::from(location),
            }),
        }
    }

    fn apply(record: &mut UserRecord, to: ModerationStatus) -> Transition {
        let from = record.moderation_status;
        record.mark(to);

        Transition {
            id: record.id,
            username: record.display_name(),
            from,
            to,
        }
    }
}
