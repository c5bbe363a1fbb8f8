/// Structured error types for wishctl-core.
///
/// Uses `thiserror` for better API surface and error composition.
/// The binary crate (wishctl-cli) can still use `anyhow` for convenience,
/// but library consumers get structured, composable errors.
use thiserror::Error;

/// Main error type for wish-tracker operations
#[derive(Error, Debug)]
pub enum WishError {
    /// Remote rejected the request with a non-2xx status
    #[error("remote rejected request (status {status}): {}", description.as_deref().unwrap_or("no detail"))]
    Remote {
        status: u16,
        description: Option<String>,
    },

    /// No usable response received (DNS, connect, TLS, or mid-body failure)
    #[error("transport failure: {reason}")]
    Transport { reason: String },

    /// 2xx response whose body is missing expected fields
    #[error("malformed response from {operation}: {reason}")]
    Malformed { operation: String, reason: String },

    /// Configuration error
    #[error("configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for wish-tracker operations
pub type Result<T> = std::result::Result<T, WishError>;

impl WishError {
    /// Create a remote-rejection error from a normalized status and message
    pub fn remote(status: u16, description: Option<String>) -> Self {
        Self::Remote {
            status,
            description,
        }
    }

    /// Create a transport error
    pub fn transport(reason: impl Into<String>) -> Self {
        Self::Transport {
            reason: reason.into(),
        }
    }

    /// Create a malformed-response error
    pub fn malformed(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// HTTP status carried by this failure; 500 when the failure carried none
    pub fn status(&self) -> u16 {
        match self {
            Self::Remote { status, .. } => *status,
            _ => 500,
        }
    }
}
