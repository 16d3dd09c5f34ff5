use crate::ModerationAction;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::warn;
use serde::Serialize;
use tokio::sync::RwLock;

/// A decision committed locally that the authority did not acknowledge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Divergence {
    pub id: i64,
    pub action: ModerationAction,
    pub error: String,
    pub recorded_at: DateTime<Utc>,
}

/// Append-only record of local/remote divergence
///
/// Local state stands regardless; entries are kept so the gap is visible
/// to the operator and to logs rather than silently dropped.
#[derive(Clone, Default)]
pub struct DivergenceLedger {
    inner: Arc<RwLock<Vec<Divergence>>>,
}

impl DivergenceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn record(&self, id: i64, action: ModerationAction, error: String) {
        warn!(
            "Local {} of record {} diverges from the authority: {}",
            action, id, error
        );

        self.inner.write().await.push(Divergence {
            id,
            action,
            error,
            recorded_at: Utc::now(),
        });
    }

    /// All divergences, oldest first
    pub async fn entries(&self) -> Vec<Divergence> {
        self.inner.read().await.clone()
    }

    pub async fn for_record(&self, id: i64) -> Vec<Divergence> {
        self.inner
            .read()
            .await
            .iter()
            .filter(|entry| entry.id == id)
            .cloned()
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
