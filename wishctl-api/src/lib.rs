//! wishctl-api - HTTP transport for the wish tracker backend
//!
//! This crate provides:
//! - `HttpCollection`, the reqwest implementation of the
//!   `RemoteCollection` seam defined in wishctl-core
//! - Endpoint resolution (flag/env > config file > default)
//!
//! ## Endpoints
//!
//! ```text
//! GET    api/node/wishes       -> { Items: Wisher[] }
//! POST   api/node/wish         { name, wishes: [] } -> { user_id }
//! DELETE api/node/wish/delete  { user_id } -> 2xx, body ignored
//! ```

pub mod client;
pub mod config;

pub use client::HttpCollection;
pub use config::{resolve_endpoint, WishConfig, DEFAULT_ENDPOINT};
