//! Identity types for runtime entities.
//!
//! Entity identifiers are 32-bit values that are:
//! - Unique within their namespace for the lifetime of the router context
//! - Never reused after the entity is destroyed
//! - Opaque to configuration clients

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Length of a system identifier in bytes.
pub const SYS_ID_LEN: usize = 6;

/// Length of the NSEL (reserved trailing) byte of a NET.
pub const NSEL_LEN: usize = 1;

/// Identifier for an Area in the entity store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AreaId(pub u32);

impl AreaId {
    /// Create a new AreaId from a raw value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for AreaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a{}", self.0)
    }
}

/// Identifier for a Circuit in the entity store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CircuitId(pub u32);

impl CircuitId {
    /// Create a new CircuitId from a raw value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for CircuitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

/// Identifier for a network interface known to the daemon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InterfaceId(pub u32);

impl InterfaceId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for InterfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "if{}", self.0)
    }
}

/// The router-wide system identifier.
///
/// Printed and parsed in the dotted form `0000.0000.0001`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SystemId(pub [u8; SYS_ID_LEN]);

impl SystemId {
    /// The all-zero system identifier of a router with no area address.
    pub const ZERO: SystemId = SystemId([0; SYS_ID_LEN]);

    /// Build a system identifier from a byte slice of exactly six bytes.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let raw: [u8; SYS_ID_LEN] = bytes.try_into().ok()?;
        Some(Self(raw))
    }

    pub fn as_bytes(&self) -> &[u8; SYS_ID_LEN] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0; SYS_ID_LEN]
    }
}

impl fmt::Display for SystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.0;
        write!(
            f,
            "{:02x}{:02x}.{:02x}{:02x}.{:02x}{:02x}",
            b[0], b[1], b[2], b[3], b[4], b[5]
        )
    }
}

impl FromStr for SystemId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: String = s.chars().filter(|c| *c != '.').collect();
        if digits.len() != SYS_ID_LEN * 2 || !digits.is_ascii() {
            return Err(CoreError::invalid_system_id(s));
        }
        let mut raw = [0u8; SYS_ID_LEN];
        for (i, byte) in raw.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
                .map_err(|_| CoreError::invalid_system_id(s))?;
        }
        Ok(Self(raw))
    }
}
