//! Network entity titles and area addresses.
//!
//! A NET is written in dotted hex, e.g. `49.0001.0000.0000.0001.00`:
//! an area prefix, the six-byte system ID and one trailing NSEL byte.
//! Once accepted, only the area prefix is retained as an [`AreaAddress`].

use std::fmt;
use std::sync::OnceLock;

use regex_lite::Regex;

use crate::error::{CoreError, CoreResult};
use crate::id::{SystemId, NSEL_LEN, SYS_ID_LEN};

/// Maximum length of an area prefix in bytes.
pub const MAX_AREA_ADDR_LEN: usize = 13;

fn net_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[0-9a-fA-F]{2}(\.[0-9a-fA-F]{4}){3,9}\.[0-9a-fA-F]{2}$")
            .unwrap_or_else(|e| panic!("NET pattern must compile: {e}"))
    })
}

/// Decode dotted hex into raw bytes.
fn dotted_to_bytes(input: &str) -> CoreResult<Vec<u8>> {
    let digits: Vec<char> = input.chars().filter(|c| *c != '.').collect();
    if digits.len() % 2 != 0 {
        return Err(CoreError::invalid_net(input, "odd number of hex digits"));
    }
    digits
        .chunks(2)
        .map(|pair| {
            let text: String = pair.iter().collect();
            u8::from_str_radix(&text, 16)
                .map_err(|_| CoreError::invalid_net(input, "non-hex digit"))
        })
        .collect()
}

/// Encode bytes as dotted hex: the first byte alone, then dot-separated pairs.
fn bytes_to_dotted(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    if let Some(first) = bytes.first() {
        out.push_str(&format!("{:02x}", first));
    }
    for chunk in bytes.get(1..).unwrap_or_default().chunks(2) {
        out.push('.');
        for b in chunk {
            out.push_str(&format!("{:02x}", b));
        }
    }
    out
}

/// A full network entity title: area prefix + system ID + NSEL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetAddress {
    bytes: Vec<u8>,
}

impl NetAddress {
    /// Parse a NET in dotted form.
    pub fn parse(input: &str) -> CoreResult<Self> {
        if !net_pattern().is_match(input) {
            return Err(CoreError::invalid_net(input, "malformed dotted address"));
        }
        let bytes = dotted_to_bytes(input)?;
        if bytes.len() < 1 + SYS_ID_LEN + NSEL_LEN {
            return Err(CoreError::invalid_net(input, "address too short"));
        }
        if bytes.len() - SYS_ID_LEN - NSEL_LEN > MAX_AREA_ADDR_LEN {
            return Err(CoreError::invalid_net(input, "area prefix too long"));
        }
        Ok(Self { bytes })
    }

    /// Total encoded length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The reserved trailing byte.
    pub fn nsel(&self) -> u8 {
        self.bytes[self.bytes.len() - 1]
    }

    /// The embedded system identifier.
    pub fn system_id(&self) -> SystemId {
        let start = self.bytes.len() - SYS_ID_LEN - NSEL_LEN;
        let mut raw = [0u8; SYS_ID_LEN];
        raw.copy_from_slice(&self.bytes[start..start + SYS_ID_LEN]);
        SystemId(raw)
    }

    /// Strip the system ID and NSEL, keeping only the area prefix.
    pub fn area_prefix(&self) -> AreaAddress {
        let len = self.bytes.len() - SYS_ID_LEN - NSEL_LEN;
        AreaAddress {
            bytes: self.bytes[..len].to_vec(),
        }
    }
}

impl fmt::Display for NetAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bytes_to_dotted(&self.bytes))
    }
}

/// An accepted area address (area prefix only).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AreaAddress {
    bytes: Vec<u8>,
}

impl AreaAddress {
    /// Build from raw prefix bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for AreaAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bytes_to_dotted(&self.bytes))
    }
}
