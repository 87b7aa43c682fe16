//! Daemon error types.

use thiserror::Error;

/// Daemon errors.
#[derive(Debug, Error)]
pub enum DaemonError {
    /// The schema table failed to build.
    #[error("schema error: {0}")]
    Registry(#[from] isisnb_registry::RegistryError),

    /// A commit failed.
    #[error("commit failed: {0}")]
    Transaction(#[from] isisnb_transaction::TransactionError),

    /// An interface event could not be processed.
    #[error("interface event failed: {0}")]
    Store(#[from] isisnb_store::StoreError),

    /// The log subscriber could not be configured.
    #[error("logging error: {message}")]
    Logging { message: String },

    /// The daemon was not started or already shut down.
    #[error("daemon is not running")]
    NotRunning,
}

impl DaemonError {
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }

    /// The transaction error behind a failed commit.
    pub fn transaction(&self) -> Option<&isisnb_transaction::TransactionError> {
        match self {
            DaemonError::Transaction(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type for daemon operations.
pub type DaemonResult<T> = Result<T, DaemonError>;
