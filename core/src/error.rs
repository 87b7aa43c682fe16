//! Common error types for isisnb.

use thiserror::Error;

/// Errors raised while decoding configuration input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A NET or area address could not be decoded.
    #[error("invalid network entity title '{input}': {reason}")]
    InvalidNet { input: String, reason: String },

    /// A system identifier could not be decoded.
    #[error("invalid system id: {0}")]
    InvalidSystemId(String),

    /// An enumeration value is not one of the known names.
    #[error("unknown {type_name} value: {value}")]
    UnknownEnum { type_name: String, value: String },
}

impl CoreError {
    pub fn invalid_net(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidNet {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_system_id(input: impl Into<String>) -> Self {
        Self::InvalidSystemId(input.into())
    }

    pub fn unknown_enum(type_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnknownEnum {
            type_name: type_name.into(),
            value: value.into(),
        }
    }
}

/// Result type for core decoding operations.
pub type CoreResult<T> = Result<T, CoreError>;
