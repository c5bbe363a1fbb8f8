//! wishctl-core - client-side state synchronization for the wish-list tracker
//!
//! This crate provides:
//! - The `Wisher` data model matching the backend's wire format
//! - `WisherListController`, the single source of truth for the wisher
//!   collection and every create/delete state transition
//! - A pure reducer (`TrackerState::apply`) that applies resolved remote
//!   calls as incremental steps, keeping the update logic testable
//!   independent of the transport
//! - The `RemoteCollection` trait, the seam the HTTP client plugs into
//!
//! Create lifecycle: `Idle -> Submitting -> { Confirmed | Unconfirmed }`.
//! A failed create still appends the typed name as an unconfirmed entry so
//! user intent never vanishes from the view. Deletes are never optimistic:
//! an entry leaves the collection only after the remote confirms.

pub mod controller;
pub mod error;
pub mod remote;
pub mod state;
pub mod wisher;

pub use controller::WisherListController;
pub use error::{Result, WishError};
pub use remote::RemoteCollection;
pub use state::{now_millis, RemoteOutcome, TrackerState};
pub use wisher::Wisher;
