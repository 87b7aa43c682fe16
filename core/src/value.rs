//! Value types for configuration leaves.
//!
//! Values are the typed data stored in configuration-tree leaves.
//! Containers, list entries and presence leaves carry no value or `Empty`.

use std::fmt;

/// A value that can be stored in a configuration leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Presence leaf (YANG `empty`).
    Empty,
    /// Boolean value.
    Bool(bool),
    /// Unsigned 8-bit integer.
    U8(u8),
    /// Unsigned 16-bit integer.
    U16(u16),
    /// Unsigned 32-bit integer.
    U32(u32),
    /// UTF-8 string.
    String(String),
    /// Enumeration, stored by its schema name.
    Enum(String),
}

impl Value {
    /// Build an enumeration value.
    pub fn enumeration(name: impl Into<String>) -> Self {
        Value::Enum(name.into())
    }

    /// Returns true if this is a presence value.
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }

    /// Get as boolean if this is a Bool value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as u16, widening from u8 where lossless.
    pub fn as_u16(&self) -> Option<u16> {
        match self {
            Value::U8(v) => Some(u16::from(*v)),
            Value::U16(v) => Some(*v),
            Value::U32(v) => u16::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Get as u32, widening from the smaller integer kinds.
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Value::U8(v) => Some(u32::from(*v)),
            Value::U16(v) => Some(u32::from(*v)),
            Value::U32(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as string reference if this is a String value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the enumeration name. Strings are accepted too, since the
    /// scripted loaders cannot tell the two apart.
    pub fn as_enum(&self) -> Option<&str> {
        match self {
            Value::Enum(s) | Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Empty => "empty",
            Value::Bool(_) => "boolean",
            Value::U8(_) => "uint8",
            Value::U16(_) => "uint16",
            Value::U32(_) => "uint32",
            Value::String(_) => "string",
            Value::Enum(_) => "enumeration",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Empty => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::U8(v) => write!(f, "{}", v),
            Value::U16(v) => write!(f, "{}", v),
            Value::U32(v) => write!(f, "{}", v),
            Value::String(s) | Value::Enum(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::U8(v)
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Value::U16(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::U32(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}
