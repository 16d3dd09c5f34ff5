pub mod dashboard;
pub mod divergence_ledger;
pub mod error;
pub mod metrics;
pub mod moderation_action;
pub mod notice;

pub use dashboard::{ModerationDashboard, ModerationOutcome};
pub use divergence_ledger::{Divergence, DivergenceLedger};
pub use error::{AdminError, Result as AdminResult};
pub use metrics::Metrics;
pub use moderation_action::ModerationAction;
pub use notice::{Notice, NoticeLevel};

#[cfg(test)]
mod tests;
