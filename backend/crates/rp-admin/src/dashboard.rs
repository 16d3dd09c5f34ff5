//! Moderation dashboard: the explicit state container behind the admin view.
//!
//! Holds the [`RecordStore`], the caller's [`ViewParameters`] and a handle to
//! the [`ModerationAuthority`]. Every command recomputes the visible page
//! synchronously. Moderation decisions commit locally first, emit exactly one
//! notice, then send a confirmation to the authority on the ambient Tokio
//! runtime without waiting for it. Confirmation failures are logged, counted
//! and recorded in the [`DivergenceLedger`]; local state is never reverted
//! and nothing is retried.

use crate::{
    AdminError, AdminResult, DivergenceLedger, Metrics, ModerationAction, Notice,
};

use rp_core::{
    ColumnId, CoreError, ModerationAuthority, Page, RecordStore, SortKey, Transition,
    ViewParameters, project,
};

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use log::{debug, error, info, warn};
use tokio::task::JoinHandle;

/// Result of a verify/reject command that reached a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModerationOutcome {
    /// The local state changed and a confirmation was dispatched
    Applied(Transition),
    /// Verify was refused because the profile is still pending
    Refused { id: i64, username: String },
}

pub struct ModerationDashboard<A: ModerationAuthority + 'static> {
    store: RecordStore,
    params: ViewParameters,
    page: Page,
    max_page_size: usize,
    authority: Arc<A>,
    notices: Vec<Notice>,
    in_flight: Vec<JoinHandle<()>>,
    ledger: DivergenceLedger,
    metrics: Metrics,
}

impl<A: ModerationAuthority + 'static> ModerationDashboard<A> {
    /// Fetch every record from the authority and open the first view.
    ///
    /// A failed fetch is returned as [`AdminError::Load`]; there is no
    /// partially loaded dashboard.
    pub async fn load(authority: Arc<A>, params: ViewParameters) -> AdminResult<Self> {
        Self::load_as_of(authority, params, Local::now().date_naive()).await
    }

    /// [`load`](Self::load) with ages derived as of `today`.
    pub async fn load_as_of(
        authority: Arc<A>,
        params: ViewParameters,
        today: NaiveDate,
    ) -> AdminResult<Self> {
        let raw = match authority.load_all_records().await {
            Ok(raw) => raw,
            Err(e) => {
                error!("Initial record load failed: {}", e);
                return Err(AdminError::load(e));
            }
        };

        let store = RecordStore::load(raw, today);
        info!("Loaded {} user records", store.len());

        let metrics = Metrics::new();
        metrics.records_loaded(store.len());

        Ok(Self::from_store(store, params, authority, metrics))
    }

    fn from_store(
        store: RecordStore,
        mut params: ViewParameters,
        authority: Arc<A>,
        metrics: Metrics,
    ) -> Self {
        let page = project(store.records(), &params);
        params.page_index = page.page_index;

        Self {
            store,
            params,
            page,
            max_page_size: usize::MAX,
            authority,
            notices: Vec::new(),
            in_flight: Vec::new(),
            ledger: DivergenceLedger::new(),
            metrics,
        }
    }

    /// Cap page size changes at `max_page_size`.
    pub fn with_max_page_size(mut self, max_page_size: usize) -> Self {
        self.max_page_size = max_page_size.max(1);
        self
    }

    // =========================================================================
    // View commands
    // =========================================================================

    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        self.params.set_filter_text(text);
        self.recompute();
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.params.set_sort_key(key);
        self.recompute();
    }

    pub fn toggle_column_sort(&mut self, column: ColumnId) {
        self.params.toggle_column_sort(column);
        self.recompute();
    }

    pub fn set_page_index(&mut self, index: usize) {
        self.params.set_page_index(index);
        self.recompute();
    }

    #[track_caller]
    pub fn set_page_size(&mut self, size: usize) -> AdminResult<()> {
        if size > self.max_page_size {
            return Err(CoreError::validation(format!(
                "page size must be at most {}, got {}",
                self.max_page_size, size
            ))
            .into());
        }

        self.params.set_page_size(size)?;
        self.recompute();
        Ok(())
    }

    // =========================================================================
    // Moderation commands
    // =========================================================================

    /// Verify a record.
    ///
    /// Must be called inside a Tokio runtime: the confirmation is spawned.
    #[track_caller]
    pub fn verify(&mut self, id: i64) -> AdminResult<ModerationOutcome> {
        match self.store.verify(id) {
            Ok(transition) => {
                self.metrics.moderation_applied(ModerationAction::Verify);
                self.notices.push(Notice::verified(&transition.username));
                self.recompute();
                self.dispatch(ModerationAction::Verify, id);
                Ok(ModerationOutcome::Applied(transition))
            }
            Err(CoreError::ModerationPrecondition { id, username, .. }) => {
                warn!("Verify refused for record {}: details still pending", id);
                self.metrics.moderation_refused();
                self.notices.push(Notice::still_pending(&username));
                Ok(ModerationOutcome::Refused { id, username })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Reject a record. The row stays in the collection, marked `Rejected`.
    ///
    /// Must be called inside a Tokio runtime: the confirmation is spawned.
    #[track_caller]
    pub fn reject(&mut self, id: i64) -> AdminResult<ModerationOutcome> {
        let transition = self.store.reject(id)?;

        self.metrics.moderation_applied(ModerationAction::Reject);
        self.notices.push(Notice::rejected(&transition.username));
        self.recompute();
        self.dispatch(ModerationAction::Reject, id);
        Ok(ModerationOutcome::Applied(transition))
    }

    fn dispatch(&mut self, action: ModerationAction, id: i64) {
        let authority = Arc::clone(&self.authority);
        let ledger = self.ledger.clone();
        let metrics = self.metrics.clone();

        self.in_flight.retain(|handle| !handle.is_finished());

        let handle = tokio::spawn(async move {
            metrics.confirmation_sent(action);

            let result = match action {
                ModerationAction::Verify => authority.confirm_verification(id).await,
                ModerationAction::Reject => authority.confirm_rejection(id).await,
            };

            match result {
                Ok(ack) => info!(
                    "Authority confirmed {} of record {}: {}",
                    action,
                    id,
                    ack.message.as_deref().unwrap_or("ok")
                ),
                Err(e) => {
                    error!("Error confirming {} of record {}: {}", action, id, e);
                    metrics.confirmation_failed(action);
                    ledger.record(id, action, e.to_string()).await;
                }
            }
        });

        self.in_flight.push(handle);
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Snapshot of the visible page
    pub fn current_page(&self) -> &Page {
        &self.page
    }

    pub fn params(&self) -> &ViewParameters {
        &self.params
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Take the notices emitted since the last drain.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Confirmations dispatched but not yet finished
    pub fn in_flight(&self) -> usize {
        self.in_flight
            .iter()
            .filter(|handle| !handle.is_finished())
            .count()
    }

    /// Wait for every dispatched confirmation to finish.
    pub async fn settle(&mut self) {
        let handles = std::mem::take(&mut self.in_flight);
        if handles.is_empty() {
            return;
        }

        debug!("Waiting on {} confirmation(s)", handles.len());
        for result in futures::future::join_all(handles).await {
            if let Err(e) = result {
                warn!("Confirmation task ended abnormally: {}", e);
            }
        }
    }

    pub fn divergences(&self) -> &DivergenceLedger {
        &self.ledger
    }

    fn recompute(&mut self) {
        self.page = project(self.store.records(), &self.params);
        self.params.page_index = self.page.page_index;
    }
}
