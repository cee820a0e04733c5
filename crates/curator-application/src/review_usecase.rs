//! Review use case: the working set of staged photos and batch submission.
//!
//! `ReviewUseCase` owns the [`DecisionStore`] for the running client and
//! coordinates it with the remote [`StagingApi`]. The store sits behind a
//! short-lived `std::sync::Mutex` that is never held across an await.

use curator_core::api::StagingApi;
use curator_core::decision::{DecisionCounts, DecisionStore, ReviewAction, Visibility};
use curator_core::error::{CuratorError, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub const EMPTY_SUBMISSION_MESSAGE: &str =
    "No decisions made. Mark photos as approve or reject first.";

/// Result of a submit trigger.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The batch was accepted by the server.
    Submitted(SubmitReport),
    /// Another submission is in flight; nothing was sent.
    Busy,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitReport {
    pub submitted: usize,
    pub approved: usize,
    pub rejected: usize,
    /// Set when the reload after a successful submission failed. The store
    /// stays cleared in that case.
    pub reload_error: Option<CuratorError>,
}

impl SubmitReport {
    pub fn reloaded(&self) -> bool {
        self.reload_error.is_none()
    }
}

/// Resets the processing flag when a submission ends, including on early
/// return and error paths.
struct ProcessingGuard<'a>(&'a AtomicBool);

impl Drop for ProcessingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

pub struct ReviewUseCase {
    api: Arc<dyn StagingApi>,
    store: Mutex<DecisionStore>,
    processing: AtomicBool,
}

impl ReviewUseCase {
    pub fn new(api: Arc<dyn StagingApi>) -> Self {
        Self {
            api,
            store: Mutex::new(DecisionStore::new()),
            processing: AtomicBool::new(false),
        }
    }

    fn store(&self) -> MutexGuard<'_, DecisionStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fetches the staging page and replaces the working set with it.
    ///
    /// Returns the number of photos loaded. On failure the store is left
    /// untouched.
    pub async fn refresh(&self) -> Result<usize> {
        let page = self.api.fetch_staging().await?;
        let loaded = page.photos.len();
        tracing::info!(
            "[ReviewUseCase] Loaded {} staged photo(s), {} remaining",
            loaded,
            page.total_remaining
        );
        self.store().load_page(page);
        Ok(loaded)
    }

    /// Sends every actioned decision as one batch.
    ///
    /// Fails with a validation error, without any network call, when nothing
    /// is actioned. On success the store is cleared and reloaded; on failure
    /// the decisions are kept so the reviewer can retry.
    pub async fn submit(&self) -> Result<SubmitOutcome> {
        if self
            .processing
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::debug!("[ReviewUseCase] Submit ignored, another submission is in flight");
            return Ok(SubmitOutcome::Busy);
        }
        let _guard = ProcessingGuard(&self.processing);

        let (decisions, counts) = {
            let store = self.store();
            (store.pending(), store.counts())
        };

        if decisions.is_empty() {
            return Err(CuratorError::validation(EMPTY_SUBMISSION_MESSAGE));
        }

        tracing::info!(
            "[ReviewUseCase] Submitting {} decision(s): {} approve, {} reject",
            decisions.len(),
            counts.approve,
            counts.reject
        );

        if let Err(e) = self.api.submit_batch(&decisions).await {
            tracing::warn!("[ReviewUseCase] Batch submission failed: {}", e);
            return Err(e);
        }

        self.store().clear();

        let reload_error = match self.refresh().await {
            Ok(_) => None,
            Err(e) => {
                tracing::warn!("[ReviewUseCase] Reload after submission failed: {}", e);
                Some(e)
            }
        };

        Ok(SubmitOutcome::Submitted(SubmitReport {
            submitted: decisions.len(),
            approved: counts.approve,
            rejected: counts.reject,
            reload_error,
        }))
    }

    /// Drops the working set and every pending decision.
    pub fn clear(&self) {
        self.store().clear();
        tracing::debug!("[ReviewUseCase] Working set cleared");
    }

    pub fn is_processing(&self) -> bool {
        self.processing.load(Ordering::SeqCst)
    }

    pub fn set_action(&self, ulid: &str, action: ReviewAction) -> bool {
        self.store().set_action(ulid, action)
    }

    pub fn set_context(&self, ulid: &str, context: impl Into<String>) -> bool {
        self.store().set_context(ulid, context)
    }

    pub fn set_visibility(&self, ulid: &str, visibility: Visibility) -> bool {
        self.store().set_visibility(ulid, visibility)
    }

    pub fn counts(&self) -> DecisionCounts {
        self.store().counts()
    }

    /// A copy of the store for rendering.
    pub fn snapshot(&self) -> DecisionStore {
        self.store().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockStagingApi, page};
    use tokio::sync::Notify;

    async fn loaded(api: MockStagingApi) -> (Arc<MockStagingApi>, ReviewUseCase) {
        let api = Arc::new(api);
        let usecase = ReviewUseCase::new(api.clone());
        usecase.refresh().await.unwrap();
        (api, usecase)
    }

    #[tokio::test]
    async fn test_refresh_loads_neutral_decisions() {
        let (_api, usecase) =
            loaded(MockStagingApi::with_pages(vec![Ok(page(&["A", "B", "C"]))])).await;

        let store = usecase.snapshot();
        assert_eq!(store.len(), 3);
        assert!(store.is_consistent());
        assert_eq!(usecase.counts(), DecisionCounts::default());
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_store() {
        let (_api, usecase) = loaded(MockStagingApi::with_pages(vec![
            Ok(page(&["A"])),
            Err(CuratorError::network("connection refused")),
        ]))
        .await;
        usecase.set_action("A", ReviewAction::Approve);

        assert!(usecase.refresh().await.is_err());
        assert_eq!(usecase.snapshot().len(), 1);
        assert_eq!(usecase.counts().approve, 1);
    }

    #[tokio::test]
    async fn test_submit_sends_only_actioned_decisions_in_order() {
        let (api, usecase) = loaded(MockStagingApi::with_pages(vec![
            Ok(page(&["A", "B", "C"])),
            Ok(page(&["D"])),
        ]))
        .await;

        usecase.set_action("A", ReviewAction::Approve);
        usecase.set_action("B", ReviewAction::Reject);
        assert_eq!(usecase.counts(), DecisionCounts { approve: 1, reject: 1 });

        let outcome = usecase.submit().await.unwrap();

        let submissions = api.submissions();
        assert_eq!(submissions.len(), 1);
        let sent: Vec<(&str, ReviewAction)> = submissions[0]
            .iter()
            .map(|d| (d.ulid.as_str(), d.action))
            .collect();
        assert_eq!(sent, vec![("A", ReviewAction::Approve), ("B", ReviewAction::Reject)]);

        assert_eq!(
            outcome,
            SubmitOutcome::Submitted(SubmitReport {
                submitted: 2,
                approved: 1,
                rejected: 1,
                reload_error: None,
            })
        );

        // Fresh working set with neutral decisions.
        let store = usecase.snapshot();
        assert_eq!(store.len(), 1);
        assert_eq!(store.photo(0).unwrap().ulid, "D");
        assert_eq!(usecase.counts(), DecisionCounts::default());
    }

    #[tokio::test]
    async fn test_submit_carries_context_and_visibility() {
        let (api, usecase) = loaded(MockStagingApi::with_pages(vec![Ok(page(&["A"]))])).await;

        usecase.set_action("A", ReviewAction::Approve);
        usecase.set_context("A", "Golden hour");
        usecase.set_visibility("A", Visibility::Sanctum);
        usecase.submit().await.unwrap();

        let sent = &api.submissions()[0][0];
        assert_eq!(sent.context.as_deref(), Some("Golden hour"));
        assert_eq!(sent.visibility, Visibility::Sanctum);
    }

    #[tokio::test]
    async fn test_empty_submit_is_validation_error_without_network_call() {
        let (api, usecase) = loaded(MockStagingApi::with_pages(vec![Ok(page(&["A", "B"]))])).await;
        usecase.set_context("A", "context alone is not a decision");
        let before = usecase.snapshot();

        let err = usecase.submit().await.unwrap_err();

        assert_eq!(err, CuratorError::validation(EMPTY_SUBMISSION_MESSAGE));
        assert!(api.submissions().is_empty());
        assert_eq!(usecase.snapshot(), before);
        assert!(!usecase.is_processing());
    }

    #[tokio::test]
    async fn test_failed_submit_preserves_decisions() {
        let (api, usecase) = loaded(MockStagingApi::with_pages(vec![Ok(page(&["A", "B"]))])).await;
        *api.submit_error.lock().unwrap() =
            Some(CuratorError::remote(Some(500), "Server Error"));

        usecase.set_action("A", ReviewAction::Approve);
        let before = usecase.snapshot();

        let err = usecase.submit().await.unwrap_err();

        assert_eq!(err, CuratorError::remote(Some(500), "Server Error"));
        assert_eq!(usecase.snapshot(), before);
        assert!(!usecase.is_processing());

        // Retry succeeds once the server recovers.
        *api.submit_error.lock().unwrap() = None;
        assert!(matches!(
            usecase.submit().await.unwrap(),
            SubmitOutcome::Submitted(_)
        ));
    }

    #[tokio::test]
    async fn test_reload_failure_after_submit_is_reported() {
        let (_api, usecase) = loaded(MockStagingApi::with_pages(vec![
            Ok(page(&["A"])),
            Err(CuratorError::network("timed out")),
        ]))
        .await;
        usecase.set_action("A", ReviewAction::Reject);

        let outcome = usecase.submit().await.unwrap();

        match outcome {
            SubmitOutcome::Submitted(report) => {
                assert!(!report.reloaded());
                assert_eq!(report.reload_error, Some(CuratorError::network("timed out")));
            }
            SubmitOutcome::Busy => panic!("expected a submission"),
        }
        assert!(usecase.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_overlapping_submit_returns_busy() {
        let gate = Arc::new(Notify::new());
        let api = MockStagingApi {
            submit_gate: Some(gate.clone()),
            ..MockStagingApi::with_pages(vec![Ok(page(&["A"]))])
        };
        let (api, usecase) = loaded(api).await;
        let usecase = Arc::new(usecase);
        usecase.set_action("A", ReviewAction::Approve);

        let first = {
            let usecase = usecase.clone();
            tokio::spawn(async move { usecase.submit().await })
        };

        while !usecase.is_processing() {
            tokio::task::yield_now().await;
        }

        assert_eq!(usecase.submit().await.unwrap(), SubmitOutcome::Busy);
        assert!(api.submissions().is_empty());

        gate.notify_one();
        let outcome = first.await.unwrap().unwrap();

        assert!(matches!(outcome, SubmitOutcome::Submitted(_)));
        assert_eq!(api.submissions().len(), 1);
        assert!(!usecase.is_processing());
    }

    #[tokio::test]
    async fn test_clear_drops_pending_decisions() {
        let (api, usecase) = loaded(MockStagingApi::with_pages(vec![Ok(page(&["A", "B"]))])).await;
        usecase.set_action("A", ReviewAction::Approve);

        usecase.clear();

        assert!(usecase.snapshot().is_empty());
        assert_eq!(usecase.counts(), DecisionCounts::default());
        assert_eq!(
            usecase.submit().await.unwrap_err(),
            CuratorError::validation(EMPTY_SUBMISSION_MESSAGE)
        );
        assert!(api.submissions().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_ulid_mutations_are_noops() {
        let (_api, usecase) = loaded(MockStagingApi::with_pages(vec![Ok(page(&["A"]))])).await;

        assert!(!usecase.set_action("Z", ReviewAction::Approve));
        assert!(!usecase.set_context("Z", "x"));
        assert!(!usecase.set_visibility("Z", Visibility::Private));
        assert!(usecase.snapshot().is_consistent());
    }
}
