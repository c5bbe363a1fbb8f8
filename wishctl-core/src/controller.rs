//! Single source of truth for the wisher collection
//!
//! The controller owns one [`TrackerState`] and mediates every mutation
//! through the remote collection, reconciling local state with the call
//! outcome. Errors are folded into the state (`has_error`) per the
//! operation's fallback policy, and also returned to the caller so one-shot
//! command surfaces can report the detail.

use tracing::{debug, warn};

use crate::error::Result;
use crate::remote::RemoteCollection;
use crate::state::{now_millis, RemoteOutcome, TrackerState};
use crate::wisher::Wisher;

/// Client-side controller for the wish-list tracker page
pub struct WisherListController<R> {
    remote: R,
    state: TrackerState,
}

impl<R: RemoteCollection> WisherListController<R> {
    pub fn new(remote: R) -> Self {
        Self {
            remote,
            state: TrackerState::default(),
        }
    }

    /// Current view state
    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    /// Tracked wishers, in insertion order
    pub fn wishers(&self) -> &[Wisher] {
        &self.state.wishers
    }

    /// Fetch the full remote collection.
    ///
    /// Replaces the local collection only when the fetch returns at least
    /// one item; on any failure the collection is left as-is and the error
    /// is flagged.
    pub async fn initialize(&mut self) -> Result<()> {
        match self.remote.list().await {
            Ok(items) => {
                debug!("fetched {} wishers", items.len());
                self.state.apply(RemoteOutcome::Loaded(items), now_millis());
                Ok(())
            }
            Err(err) => {
                warn!("initial list fetch failed: {err}");
                self.state.apply(RemoteOutcome::LoadFailed, now_millis());
                Err(err)
            }
        }
    }

    /// Update the input field verbatim; clears any standing error
    pub fn set_pending_name(&mut self, text: impl Into<String>) {
        self.state.set_pending_name(text);
    }

    /// Clear the error flag
    pub fn dismiss_error(&mut self) {
        self.state.dismiss_error();
    }

    /// Create a wisher with the given name. No-op on an empty name.
    ///
    /// On success the confirmed entry is appended; on failure an
    /// unconfirmed entry is appended anyway so the typed name stays
    /// visible, and the error is both flagged and returned.
    pub async fn submit_create(&mut self, name: &str) -> Result<()> {
        if name.is_empty() {
            debug!("ignoring create with empty name");
            return Ok(());
        }

        self.state.begin_submit();

        match self.remote.create(name).await {
            Ok(user_id) => {
                self.state.apply(
                    RemoteOutcome::CreateConfirmed {
                        name: name.to_string(),
                        user_id,
                    },
                    now_millis(),
                );
                Ok(())
            }
            Err(err) => {
                warn!("create failed for {name:?}: {err}");
                self.state.apply(
                    RemoteOutcome::CreateUnconfirmed {
                        name: name.to_string(),
                    },
                    now_millis(),
                );
                Err(err)
            }
        }
    }

    /// Submit the current input field value, the Enter-key equivalent of
    /// [`Self::submit_create`]
    pub async fn submit_pending(&mut self) -> Result<()> {
        let name = self.state.pending_name.clone();
        self.submit_create(&name).await
    }

    /// Delete the wisher with the given user id.
    ///
    /// The remote call is issued without pre-validating local presence.
    /// The entry is removed only after the remote confirms; a failing
    /// delete leaves the collection untouched.
    pub async fn submit_delete_by_user_id(&mut self, user_id: &str) -> Result<()> {
        match self.remote.delete(user_id).await {
            Ok(()) => {
                self.state.apply(
                    RemoteOutcome::Deleted {
                        user_id: user_id.to_string(),
                    },
                    now_millis(),
                );
                Ok(())
            }
            Err(err) => {
                warn!("delete failed for {user_id}: {err}");
                self.state.apply(RemoteOutcome::DeleteFailed, now_millis());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::error::WishError;

    /// Programmable in-memory stand-in for the HTTP collection
    #[derive(Default)]
    struct FakeRemote {
        list_reply: Mutex<Option<Result<Vec<Wisher>>>>,
        create_replies: Mutex<VecDeque<Result<String>>>,
        delete_replies: Mutex<VecDeque<Result<()>>>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeRemote {
        fn with_create(reply: Result<String>) -> Self {
            let remote = Self::default();
            remote.create_replies.lock().unwrap().push_back(reply);
            remote
        }

        fn with_delete(reply: Result<()>) -> Self {
            let remote = Self::default();
            remote.delete_replies.lock().unwrap().push_back(reply);
            remote
        }

        fn with_list(reply: Result<Vec<Wisher>>) -> Self {
            let remote = Self::default();
            *remote.list_reply.lock().unwrap() = Some(reply);
            remote
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RemoteCollection for FakeRemote {
        async fn list(&self) -> Result<Vec<Wisher>> {
            self.calls.lock().unwrap().push("list".to_string());
            self.list_reply
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn create(&self, name: &str) -> Result<String> {
            self.calls.lock().unwrap().push(format!("create {name}"));
            self.create_replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(WishError::transport("no reply queued")))
        }

        async fn delete(&self, user_id: &str) -> Result<()> {
            self.calls.lock().unwrap().push(format!("delete {user_id}"));
            self.delete_replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(WishError::transport("no reply queued")))
        }
    }

    fn rejection() -> WishError {
        WishError::remote(500, Some("boom".to_string()))
    }

    #[tokio::test]
    async fn test_create_success_appends_confirmed_entry() {
        let mut controller =
            WisherListController::new(FakeRemote::with_create(Ok("U1".to_string())));
        controller.set_pending_name("Alice");

        controller.submit_pending().await.unwrap();

        let state = controller.state();
        assert_eq!(state.wishers.len(), 1);
        assert_eq!(state.wishers[0].name, "Alice");
        assert_eq!(state.wishers[0].user_id, "U1");
        assert!(state.wishers[0].wishlist.is_empty());
        assert!(!state.has_error);
        assert!(!state.is_submitting);
        assert_eq!(state.pending_name, "");
    }

    #[tokio::test]
    async fn test_create_failure_never_loses_the_input() {
        let remote = FakeRemote::with_create(Err(rejection()));
        let mut controller = WisherListController::new(remote);

        let err = controller.submit_create("Eve").await.unwrap_err();
        assert_eq!(err.status(), 500);

        let state = controller.state();
        assert_eq!(state.wishers.len(), 1);
        assert_eq!(state.wishers[0].name, "Eve");
        assert_eq!(state.wishers[0].user_id, "");
        assert!(state.has_error);
        assert!(!state.is_submitting);
    }

    #[tokio::test]
    async fn test_empty_name_performs_no_remote_call() {
        let remote = FakeRemote::default();
        let mut controller = WisherListController::new(remote);

        controller.submit_create("").await.unwrap();

        assert!(controller.remote.calls().is_empty());
        assert!(controller.wishers().is_empty());
        assert!(!controller.state().is_submitting);
    }

    #[tokio::test]
    async fn test_delete_success_removes_exactly_one() {
        let remote = FakeRemote::with_delete(Ok(()));
        let mut controller = WisherListController::new(remote);
        controller
            .state
            .wishers
            .push(Wisher::confirmed("Bob", "U2", 1));

        controller.submit_delete_by_user_id("U2").await.unwrap();

        assert!(controller.wishers().is_empty());
        assert!(!controller.state().has_error);
    }

    #[tokio::test]
    async fn test_delete_failure_is_a_collection_noop() {
        let remote = FakeRemote::with_delete(Err(rejection()));
        let mut controller = WisherListController::new(remote);
        controller
            .state
            .wishers
            .push(Wisher::confirmed("Bob", "U2", 1));

        controller.submit_delete_by_user_id("U2").await.unwrap_err();

        assert_eq!(controller.wishers().len(), 1);
        assert_eq!(controller.wishers()[0].user_id, "U2");
        assert!(controller.state().has_error);
    }

    #[tokio::test]
    async fn test_delete_is_issued_without_local_prevalidation() {
        let remote = FakeRemote::with_delete(Ok(()));
        let mut controller = WisherListController::new(remote);

        controller.submit_delete_by_user_id("U9").await.unwrap();

        assert_eq!(controller.remote.calls(), vec!["delete U9".to_string()]);
        assert!(controller.wishers().is_empty());
    }

    #[tokio::test]
    async fn test_initialize_replaces_collection() {
        let fetched = vec![
            Wisher::confirmed("Alice", "U1", 1),
            Wisher::confirmed("Bob", "U2", 2),
        ];
        let mut controller = WisherListController::new(FakeRemote::with_list(Ok(fetched)));

        controller.initialize().await.unwrap();

        assert_eq!(controller.wishers().len(), 2);
        assert!(!controller.state().has_error);
    }

    #[tokio::test]
    async fn test_initialize_failure_flags_error_and_keeps_collection() {
        let mut controller = WisherListController::new(FakeRemote::with_list(Err(
            WishError::malformed("list", "missing Items field"),
        )));

        controller.initialize().await.unwrap_err();

        assert!(controller.wishers().is_empty());
        assert!(controller.state().has_error);
    }

    #[tokio::test]
    async fn test_initialize_with_empty_fetch_keeps_previous_view() {
        let mut controller = WisherListController::new(FakeRemote::with_list(Ok(Vec::new())));
        controller
            .state
            .wishers
            .push(Wisher::unconfirmed("Eve", 1));

        controller.initialize().await.unwrap();

        assert_eq!(controller.wishers().len(), 1);
    }

    #[tokio::test]
    async fn test_dismiss_error_when_clear_leaves_state_unchanged() {
        let mut controller = WisherListController::new(FakeRemote::default());
        let before = controller.state().clone();

        controller.dismiss_error();

        assert_eq!(controller.state(), &before);
    }

    #[tokio::test]
    async fn test_typing_clears_a_standing_error() {
        let remote = FakeRemote::with_create(Err(rejection()));
        let mut controller = WisherListController::new(remote);

        controller.submit_create("Eve").await.unwrap_err();
        assert!(controller.state().has_error);

        controller.set_pending_name("Ev");
        assert!(!controller.state().has_error);
        assert_eq!(controller.state().pending_name, "Ev");
    }
}
