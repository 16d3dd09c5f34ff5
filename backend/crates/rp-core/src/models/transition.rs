use crate::ModerationStatus;

use serde::Serialize;

/// A committed local moderation state change
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub id: i64,
    pub username: String,
    pub from: ModerationStatus,
    pub to: ModerationStatus,
}
