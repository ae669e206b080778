use crate::details::{BookingDetails, BookingDetailsPatch};
use crate::error::BookingError;
use crate::gateway::{BookingGateway, BookingSubmission};
use crate::record::{BookingRecord, SelectedPackage};
use crate::repository::BookingRepository;
use crate::status::{self, BookingStatus};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, RwLock};
use uuid::Uuid;
use yatra_shared::models::events::{
    BookingEvent, BookingRequestedEvent, BookingStatusChangedEvent,
};
use yatra_shared::Masked;

const EVENT_CHANNEL_CAPACITY: usize = 32;

/// Workflow policy knobs, loaded from configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRules {
    #[serde(default = "default_submission_timeout_ms")]
    pub submission_timeout_ms: u64,
}

fn default_submission_timeout_ms() -> u64 {
    5000
}

impl Default for BookingRules {
    fn default() -> Self {
        Self {
            submission_timeout_ms: default_submission_timeout_ms(),
        }
    }
}

impl BookingRules {
    pub fn submission_timeout(&self) -> Duration {
        Duration::from_millis(self.submission_timeout_ms)
    }
}

#[derive(Debug, Default)]
struct WorkflowState {
    selected: Option<SelectedPackage>,
    details: BookingDetails,
    error: Option<String>,
}

/// Single source of truth for the booking workflow: the active package
/// selection, the in-progress draft, and submitted history.
///
/// Collaborators are injected at construction; there is no ambient state.
/// All mutation goes through the methods below, serialized by the state
/// lock. The one long await, the gateway call inside `submit_request`, holds
/// no lock, so reads and other mutations proceed while it is in flight, and
/// dropping the `submit_request` future cancels the call before any history
/// write happens.
pub struct BookingService {
    state: RwLock<WorkflowState>,
    loading: AtomicBool,
    history: Arc<dyn BookingRepository>,
    gateway: Arc<dyn BookingGateway>,
    events: broadcast::Sender<BookingEvent>,
    rules: BookingRules,
}

impl BookingService {
    pub fn new(
        history: Arc<dyn BookingRepository>,
        gateway: Arc<dyn BookingGateway>,
        rules: BookingRules,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            state: RwLock::new(WorkflowState::default()),
            loading: AtomicBool::new(false),
            history,
            gateway,
            events,
            rules,
        }
    }

    /// Replace the active selection unconditionally. Selecting the same
    /// package again is a no-op in effect; nothing ever clears a selection.
    pub async fn select_package(&self, id: u32, title: &str, price: &str) {
        let mut state = self.state.write().await;
        state.selected = Some(SelectedPackage::new(id, title, price));
        tracing::debug!(package_id = id, "package selected");
    }

    /// Shallow-merge a draft patch: present fields overwrite, absent stay.
    pub async fn update_details(&self, patch: BookingDetailsPatch) {
        let mut state = self.state.write().await;
        state.details.apply(patch);
    }

    /// Restore the draft to its defaults. Selection and history untouched.
    pub async fn reset_details(&self) {
        let mut state = self.state.write().await;
        state.details = BookingDetails::default();
    }

    /// Submit the current draft as a booking request for the given package.
    ///
    /// Fails with `NoPackageSelected`, appending nothing, when no selection
    /// is active. Otherwise the draft goes to the gateway under the
    /// configured timeout; on acceptance exactly one PENDING record is
    /// appended to history and returned. Gateway failure or timeout appends
    /// nothing and leaves the failure in the error flag.
    pub async fn submit_request(
        &self,
        package_id: u32,
        package_title: &str,
    ) -> Result<BookingRecord, BookingError> {
        let details = {
            let mut state = self.state.write().await;
            if state.selected.is_none() {
                tracing::warn!("booking submitted without a selected package");
                return Err(BookingError::NoPackageSelected);
            }
            state.error = None;
            state.details.clone()
        };

        self.loading.store(true, Ordering::SeqCst);
        // Clears the loading flag on every exit path, including cancellation
        let _loading = LoadingGuard(&self.loading);

        let submission = BookingSubmission {
            package_id,
            package_title: package_title.to_string(),
            contact_name: Masked(details.name),
            contact_email: Masked(details.email),
            contact_phone: Masked(details.phone),
            tour_date: details.tour_date,
            package_type: details.package_type,
            message: details.message,
        };

        let outcome =
            tokio::time::timeout(self.rules.submission_timeout(), self.gateway.submit(&submission))
                .await;

        let receipt = match outcome {
            Err(_) => {
                let err = BookingError::SubmissionTimedOut(self.rules.submission_timeout_ms);
                return Err(self.fail(err).await);
            }
            Ok(Err(gateway_err)) => {
                let err = BookingError::SubmissionFailed(gateway_err.to_string());
                return Err(self.fail(err).await);
            }
            Ok(Ok(receipt)) => receipt,
        };

        let record = BookingRecord::new(package_id, package_title);
        if let Err(err) = self.history.append(record.clone()).await {
            return Err(self.fail(BookingError::Repository(err)).await);
        }

        tracing::info!(
            booking_id = %record.id,
            reference = %receipt.reference,
            "booking request accepted"
        );

        let _ = self.events.send(BookingEvent::Requested(BookingRequestedEvent {
            booking_id: record.id,
            package_id,
            package_title: package_title.to_string(),
            requested_at: Utc::now().timestamp(),
        }));

        Ok(record)
    }

    /// Apply a status transition to one record.
    ///
    /// The transition table is the only path that rewrites a status;
    /// disallowed requests are rejected and history is never reordered or
    /// resized here.
    pub async fn update_status(
        &self,
        id: Uuid,
        requested: BookingStatus,
    ) -> Result<BookingStatus, BookingError> {
        let record = self
            .history
            .get(id)
            .await?
            .ok_or(BookingError::BookingNotFound(id))?;

        let next = status::transition(record.status, requested)?;
        self.history.replace_status(id, next).await?;

        tracing::info!(booking_id = %id, from = %record.status, to = %next, "booking status changed");

        let _ = self
            .events
            .send(BookingEvent::StatusChanged(BookingStatusChangedEvent {
                booking_id: id,
                from: record.status.to_string(),
                to: next.to_string(),
                changed_at: Utc::now().timestamp(),
            }));

        Ok(next)
    }

    pub async fn selected_package(&self) -> Option<SelectedPackage> {
        self.state.read().await.selected.clone()
    }

    pub async fn details(&self) -> BookingDetails {
        self.state.read().await.details.clone()
    }

    pub async fn history(&self) -> Result<Vec<BookingRecord>, BookingError> {
        Ok(self.history.list().await?)
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    /// Subscribe to workflow events. Slow subscribers lag and lose events;
    /// the sender never blocks on them.
    pub fn subscribe(&self) -> broadcast::Receiver<BookingEvent> {
        self.events.subscribe()
    }

    async fn fail(&self, err: BookingError) -> BookingError {
        tracing::warn!("booking submission failed: {err}");
        let mut state = self.state.write().await;
        state.error = Some(err.to_string());
        err
    }
}

struct LoadingGuard<'a>(&'a AtomicBool);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
