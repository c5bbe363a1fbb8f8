//! Transport seam between the controller and the remote collection

use async_trait::async_trait;

use crate::error::Result;
use crate::wisher::Wisher;

/// The remote collection of wisher records.
///
/// Every mutation the controller performs goes through this trait, which
/// keeps the state-transition logic testable independent of the transport.
/// `wishctl-api` provides the HTTP implementation.
#[async_trait]
pub trait RemoteCollection: Send + Sync {
    /// Fetch the full collection
    async fn list(&self) -> Result<Vec<Wisher>>;

    /// Create a wisher with an empty wish list; returns the assigned user id
    async fn create(&self, name: &str) -> Result<String>;

    /// Delete the wisher with the given user id
    async fn delete(&self, user_id: &str) -> Result<()>;
}
