//! Configuration tree errors.

use isisnb_core::CoreError;
use thiserror::Error;

/// Errors that can occur while reading or editing a configuration tree.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Path text could not be parsed.
    #[error("invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    /// Node does not exist.
    #[error("node not found: {0}")]
    NodeNotFound(String),

    /// Leaf holds a value of another type.
    #[error("type mismatch at {path}: expected {expected}, got {actual}")]
    TypeMismatch {
        path: String,
        expected: String,
        actual: String,
    },

    /// Leaf holds an enumeration name the caller cannot decode.
    #[error("invalid value at {path}: {source}")]
    InvalidValue {
        path: String,
        #[source]
        source: CoreError,
    },

    /// A different runtime entity is already bound to the node.
    #[error("entity already bound at {path}: {existing}")]
    EntryAlreadySet { path: String, existing: String },
}

impl TreeError {
    pub fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn node_not_found(path: impl ToString) -> Self {
        Self::NodeNotFound(path.to_string())
    }

    pub fn type_mismatch(
        path: impl ToString,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            path: path.to_string(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn invalid_value(path: impl ToString, source: CoreError) -> Self {
        Self::InvalidValue {
            path: path.to_string(),
            source,
        }
    }
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
