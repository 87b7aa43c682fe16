//! Store error types.

use isisnb_core::{CircuitId, SystemId};
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised when a store precondition does not hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Area {0} already exists")]
    AreaExists(String),

    #[error("Area {0} not found")]
    AreaNotFound(String),

    #[error("Circuit {0} not found")]
    CircuitNotFound(CircuitId),

    #[error("Interface {0} not found")]
    InterfaceNotFound(String),

    #[error("Area address {address} is not configured on area {area}")]
    AddressNotFound { area: String, address: String },

    #[error("System ID {found} differs from router system ID {expected}")]
    SystemIdMismatch { expected: SystemId, found: SystemId },
}

impl StoreError {
    pub fn area_exists(tag: impl Into<String>) -> Self {
        Self::AreaExists(tag.into())
    }

    pub fn area_not_found(area: impl ToString) -> Self {
        Self::AreaNotFound(area.to_string())
    }

    pub fn interface_not_found(name: impl Into<String>) -> Self {
        Self::InterfaceNotFound(name.into())
    }

    pub fn address_not_found(area: impl Into<String>, address: impl ToString) -> Self {
        Self::AddressNotFound {
            area: area.into(),
            address: address.to_string(),
        }
    }
}
