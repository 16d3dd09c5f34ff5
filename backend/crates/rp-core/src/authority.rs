use crate::{Ack, RawUserRecord, Result as CoreErrorResult};

use async_trait::async_trait;

/// The remote system of record for user registrations
///
/// Confirmation results are advisory: the local store commits before the
/// call is made and never waits on, or reverts for, its outcome.
#[async_trait]
pub trait ModerationAuthority: Send + Sync {
    /// Fetch every submitted record. Called once per session.
    async fn load_all_records(&self) -> CoreErrorResult<Vec<RawUserRecord>>;

    /// Report that an operator verified `id`.
    async fn confirm_verification(&self, id: i64) -> CoreErrorResult<Ack>;

    /// Report that an operator rejected `id`.
    async fn confirm_rejection(&self, id: i64) -> CoreErrorResult<Ack>;
}
