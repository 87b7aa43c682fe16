//! Transaction error types.

use isisnb_tree::TreeError;
use thiserror::Error;

/// Result type for node callbacks.
pub type NbResult<T> = Result<T, NbError>;

/// Errors a node callback can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NbError {
    /// The proposed configuration is invalid; rejects the whole transaction.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// A precondition validation should have guaranteed does not hold.
    #[error("inconsistency: {message}")]
    Inconsistency { message: String },

    /// A resource could not be acquired while preparing.
    #[error("resource error: {message}")]
    Resource { message: String },
}

impl NbError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn inconsistency(message: impl Into<String>) -> Self {
        Self::Inconsistency {
            message: message.into(),
        }
    }

    pub fn resource(message: impl Into<String>) -> Self {
        Self::Resource {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            NbError::Validation { message }
            | NbError::Inconsistency { message }
            | NbError::Resource { message } => message,
        }
    }
}

// A mandatory leaf missing from the tree means the tree and the
// handler disagree about the schema.
impl From<TreeError> for NbError {
    fn from(e: TreeError) -> Self {
        Self::inconsistency(e.to_string())
    }
}

/// One node that failed to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyFailure {
    pub path: String,
    pub error: NbError,
}

/// Transaction errors.
#[derive(Debug, Error)]
pub enum TransactionError {
    /// A node rejected the change; nothing was prepared.
    #[error("validation failed at {path}: {source}")]
    Validation {
        path: String,
        #[source]
        source: NbError,
    },

    /// A node failed to prepare; every node prepared before it was aborted.
    #[error("prepare failed at {path}: {source} ({aborted} prepared nodes aborted)")]
    Prepare {
        path: String,
        #[source]
        source: NbError,
        aborted: usize,
    },

    /// Nodes reported inconsistencies while applying. Every other node
    /// was applied.
    #[error("{} node(s) failed to apply", .errors.len())]
    Apply { errors: Vec<ApplyFailure> },

    /// The candidate equals the running configuration.
    #[error("no configuration changes to commit")]
    NoChanges,
}

impl TransactionError {
    /// The callback error behind a validation or prepare failure.
    pub fn node_error(&self) -> Option<&NbError> {
        match self {
            TransactionError::Validation { source, .. }
            | TransactionError::Prepare { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type for transaction operations.
pub type TransactionResult<T> = Result<T, TransactionError>;
