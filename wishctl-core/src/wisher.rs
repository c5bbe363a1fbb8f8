//! Wire-level data model for tracked wishers

use serde::{Deserialize, Serialize};

/// A tracked person with a name, an optional server-assigned identifier,
/// and an associated wish list.
///
/// Field names match the backend's wire format. `user_id` stays empty until
/// the remote collection acknowledges the creation; an entry with an empty
/// `user_id` is an unconfirmed creation that must remain visible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wisher {
    pub name: String,
    #[serde(default)]
    pub user_id: String,
    /// Milliseconds since epoch, recorded locally at the add action
    #[serde(default)]
    pub time_stamp: i64,
    /// Wish entries, always initialized empty here (populated elsewhere)
    #[serde(default)]
    pub wishlist: Vec<serde_json::Value>,
}

impl Wisher {
    /// Wisher acknowledged by the remote collection
    pub fn confirmed(name: impl Into<String>, user_id: impl Into<String>, now_ms: i64) -> Self {
        Self {
            name: name.into(),
            user_id: user_id.into(),
            time_stamp: now_ms,
            wishlist: Vec::new(),
        }
    }

    /// Wisher whose creation was attempted but never acknowledged
    pub fn unconfirmed(name: impl Into<String>, now_ms: i64) -> Self {
        Self {
            name: name.into(),
            user_id: String::new(),
            time_stamp: now_ms,
            wishlist: Vec::new(),
        }
    }

    /// Whether the remote collection has assigned this entry an identifier
    pub fn is_confirmed(&self) -> bool {
        !self.user_id.is_empty()
    }
}
