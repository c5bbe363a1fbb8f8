//! Interactive tracker page
//!
//! A single-screen TUI mirroring the wish-list page:
//! - text input bound to the pending name (Enter submits)
//! - dismissible error banner
//! - wisher list with per-item delete
//!
//! Remote calls run as background tasks; their outcomes come back over a
//! channel and are applied to the state in arrival order, so the view
//! keeps rendering while calls are in flight.

pub mod app;
pub mod event;
pub mod terminal;
pub mod ui;

pub use terminal::run;
