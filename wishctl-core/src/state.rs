//! Tracker state and the pure reducer applied when remote calls resolve
//!
//! Network resolutions are modeled as [`RemoteOutcome`] events applied to
//! the current state. Each resolution is an incremental step against the
//! state as it is now, so concurrent in-flight operations cannot clobber
//! each other's appends and removals; arrival order alone decides ordering.

use chrono::Utc;

use crate::wisher::Wisher;

/// Current time in milliseconds since epoch
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// View state owned by a single controller instance for the page's lifetime
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackerState {
    /// Tracked wishers, in insertion order
    pub wishers: Vec<Wisher>,
    /// Text of the in-progress input field
    pub pending_name: String,
    /// True while a create call is in flight
    pub is_submitting: bool,
    /// True when the most recent operation failed
    pub has_error: bool,
}

/// Resolution of a remote call, applied to the state by [`TrackerState::apply`]
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteOutcome {
    /// Initial list fetch succeeded
    Loaded(Vec<Wisher>),
    /// Initial list fetch failed (transport, non-2xx, or malformed body)
    LoadFailed,
    /// Create acknowledged with a server-assigned user id
    CreateConfirmed { name: String, user_id: String },
    /// Create failed; the typed name must stay visible regardless
    CreateUnconfirmed { name: String },
    /// Delete acknowledged for this user id
    Deleted { user_id: String },
    /// Delete failed; the collection stays untouched
    DeleteFailed,
}

impl TrackerState {
    /// Update the input field verbatim; clears any standing error
    pub fn set_pending_name(&mut self, text: impl Into<String>) {
        self.pending_name = text.into();
        self.has_error = false;
    }

    /// Clear the error flag. Idempotent, no other side effect.
    pub fn dismiss_error(&mut self) {
        self.has_error = false;
    }

    /// Mark a create call as in flight
    pub fn begin_submit(&mut self) {
        self.is_submitting = true;
        self.has_error = false;
    }

    /// Apply a resolved remote call to the current state.
    ///
    /// `now_ms` stamps newly appended entries; it is a parameter so the
    /// reducer stays pure and deterministic under test.
    pub fn apply(&mut self, outcome: RemoteOutcome, now_ms: i64) {
        match outcome {
            RemoteOutcome::Loaded(items) => {
                // An empty fetch keeps whatever the view already shows
                if !items.is_empty() {
                    self.wishers = items;
                }
            }
            RemoteOutcome::LoadFailed => {
                self.has_error = true;
            }
            RemoteOutcome::CreateConfirmed { name, user_id } => {
                self.wishers.push(Wisher::confirmed(name, user_id, now_ms));
                self.is_submitting = false;
                self.pending_name.clear();
            }
            RemoteOutcome::CreateUnconfirmed { name } => {
                // Optimistic insert: the typed name never vanishes from the
                // view, but the failure is flagged
                self.wishers.push(Wisher::unconfirmed(name, now_ms));
                self.is_submitting = false;
                self.has_error = true;
                self.pending_name.clear();
            }
            RemoteOutcome::Deleted { user_id } => {
                if let Some(pos) = self.wishers.iter().position(|w| w.user_id == user_id) {
                    self.wishers.remove(pos);
                }
            }
            RemoteOutcome::DeleteFailed => {
                self.has_error = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn confirmed(name: &str, user_id: &str) -> Wisher {
        Wisher::confirmed(name, user_id, 1)
    }

    #[test]
    fn test_loaded_replaces_only_when_nonempty() {
        let mut state = TrackerState::default();
        state.wishers.push(confirmed("Alice", "U1"));

        state.apply(RemoteOutcome::Loaded(Vec::new()), 2);
        assert_eq!(state.wishers.len(), 1);

        let fetched = vec![confirmed("Bob", "U2"), confirmed("Carol", "U3")];
        state.apply(RemoteOutcome::Loaded(fetched), 3);
        assert_eq!(state.wishers.len(), 2);
        assert_eq!(state.wishers[0].name, "Bob");
    }

    #[test]
    fn test_load_failure_keeps_collection() {
        let mut state = TrackerState::default();
        state.apply(RemoteOutcome::LoadFailed, 1);
        assert!(state.has_error);
        assert!(state.wishers.is_empty());
    }

    #[test]
    fn test_create_confirmed_clears_pending() {
        let mut state = TrackerState::default();
        state.set_pending_name("Alice");
        state.begin_submit();

        state.apply(
            RemoteOutcome::CreateConfirmed {
                name: "Alice".to_string(),
                user_id: "U1".to_string(),
            },
            7,
        );

        assert_eq!(state.wishers.len(), 1);
        assert_eq!(state.wishers[0].user_id, "U1");
        assert_eq!(state.wishers[0].time_stamp, 7);
        assert!(!state.is_submitting);
        assert!(!state.has_error);
        assert_eq!(state.pending_name, "");
    }

    #[test]
    fn test_create_unconfirmed_keeps_the_input_visible() {
        let mut state = TrackerState::default();
        state.set_pending_name("Eve");
        state.begin_submit();

        state.apply(
            RemoteOutcome::CreateUnconfirmed {
                name: "Eve".to_string(),
            },
            7,
        );

        assert_eq!(state.wishers.len(), 1);
        assert_eq!(state.wishers[0].name, "Eve");
        assert_eq!(state.wishers[0].user_id, "");
        assert!(state.has_error);
        assert!(!state.is_submitting);
        assert_eq!(state.pending_name, "");
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut state = TrackerState::default();
        state.wishers.push(confirmed("Alice", "U1"));
        state.wishers.push(confirmed("Bob", "U2"));
        state.wishers.push(confirmed("Carol", "U3"));

        state.apply(
            RemoteOutcome::Deleted {
                user_id: "U2".to_string(),
            },
            9,
        );

        assert_eq!(state.wishers.len(), 2);
        assert!(state.wishers.iter().all(|w| w.user_id != "U2"));
    }

    #[test]
    fn test_delete_of_absent_id_is_a_noop() {
        let mut state = TrackerState::default();
        state.wishers.push(confirmed("Alice", "U1"));

        state.apply(
            RemoteOutcome::Deleted {
                user_id: "U9".to_string(),
            },
            9,
        );

        assert_eq!(state.wishers.len(), 1);
        assert!(!state.has_error);
    }

    #[test]
    fn test_delete_failed_leaves_collection_untouched() {
        let mut state = TrackerState::default();
        state.wishers.push(confirmed("Alice", "U1"));
        let before = state.wishers.clone();

        state.apply(RemoteOutcome::DeleteFailed, 9);

        assert_eq!(state.wishers, before);
        assert!(state.has_error);
    }

    #[test]
    fn test_set_pending_name_clears_error() {
        let mut state = TrackerState::default();
        state.has_error = true;
        state.set_pending_name("A");
        assert!(!state.has_error);
        assert_eq!(state.pending_name, "A");
    }

    #[test]
    fn test_dismiss_error_is_idempotent() {
        let mut state = TrackerState::default();
        state.dismiss_error();
        assert_eq!(state, TrackerState::default());

        state.has_error = true;
        state.dismiss_error();
        state.dismiss_error();
        assert!(!state.has_error);
    }

    #[test]
    fn test_interleaved_resolutions_do_not_lose_updates() {
        // A create and a delete in flight at once: whichever resolves
        // second must not wipe out the first resolution's effect.
        let mut state = TrackerState::default();
        state.wishers.push(confirmed("Bob", "U2"));

        state.apply(
            RemoteOutcome::CreateConfirmed {
                name: "Alice".to_string(),
                user_id: "U1".to_string(),
            },
            5,
        );
        state.apply(
            RemoteOutcome::Deleted {
                user_id: "U2".to_string(),
            },
            6,
        );

        assert_eq!(state.wishers.len(), 1);
        assert_eq!(state.wishers[0].user_id, "U1");
    }
}
