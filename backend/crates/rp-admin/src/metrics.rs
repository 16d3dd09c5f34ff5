use crate::ModerationAction;

use metrics::{counter, gauge};

/// Metrics collector for moderation activity
///
/// Failed confirmations are the measurable gap between local and remote
/// state; nothing here reconciles it.
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "rp_admin" }
    }

    /// Record the size of the initial load
    pub fn records_loaded(&self, count: usize) {
        gauge!(format!("{}.records.loaded", self.prefix)).set(count as f64);
    }

    /// Record a committed local decision
    pub fn moderation_applied(&self, action: ModerationAction) {
        let outcome = match action {
            ModerationAction::Verify => "verified",
            ModerationAction::Reject => "rejected",
        };
        counter!(format!("{}.moderation.{}", self.prefix, outcome)).increment(1);
    }

    /// Record a verify refused because the profile is still pending
    pub fn moderation_refused(&self) {
        counter!(format!("{}.moderation.refused", self.prefix)).increment(1);
    }

    /// Record a confirmation request leaving for the authority
    pub fn confirmation_sent(&self, action: ModerationAction) {
        counter!(format!("{}.confirmations.sent.{}", self.prefix, action)).increment(1);
    }

    /// Record a confirmation the authority did not acknowledge
    pub fn confirmation_failed(&self, action: ModerationAction) {
        counter!(format!("{}.confirmations.failed.{}", self.prefix, action)).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
