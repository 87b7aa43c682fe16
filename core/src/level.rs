//! Routing levels.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// One of the two hierarchical routing scopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    L1,
    L2,
}

impl Level {
    /// Both levels, in order.
    pub const ALL: [Level; 2] = [Level::L1, Level::L2];

    /// Zero-based index for per-level arrays.
    pub fn index(self) -> usize {
        match self {
            Level::L1 => 0,
            Level::L2 => 1,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::L1 => write!(f, "level-1"),
            Level::L2 => write!(f, "level-2"),
        }
    }
}

/// A non-empty set of levels, used both for the area type and the circuit type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IsType {
    Level1,
    Level2,
    #[default]
    Level1And2,
}

impl IsType {
    /// Returns true if the set includes the given level.
    pub fn contains(self, level: Level) -> bool {
        matches!(
            (self, level),
            (IsType::Level1, Level::L1)
                | (IsType::Level2, Level::L2)
                | (IsType::Level1And2, _)
        )
    }

    /// Iterate the levels in the set.
    pub fn levels(self) -> impl Iterator<Item = Level> {
        Level::ALL.into_iter().filter(move |l| self.contains(*l))
    }

    /// Intersection of two level sets, `None` when disjoint.
    pub fn intersect(self, other: IsType) -> Option<IsType> {
        let l1 = self.contains(Level::L1) && other.contains(Level::L1);
        let l2 = self.contains(Level::L2) && other.contains(Level::L2);
        IsType::from_flags(l1, l2)
    }

    /// Build a level set from per-level flags.
    pub fn from_flags(l1: bool, l2: bool) -> Option<IsType> {
        match (l1, l2) {
            (true, true) => Some(IsType::Level1And2),
            (true, false) => Some(IsType::Level1),
            (false, true) => Some(IsType::Level2),
            (false, false) => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            IsType::Level1 => "level-1",
            IsType::Level2 => "level-2",
            IsType::Level1And2 => "level-1-2",
        }
    }
}

impl fmt::Display for IsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IsType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "level-1" => Ok(IsType::Level1),
            "level-2" | "level-2-only" => Ok(IsType::Level2),
            "level-1-2" => Ok(IsType::Level1And2),
            other => Err(CoreError::unknown_enum("is-type", other)),
        }
    }
}

impl From<Level> for IsType {
    fn from(level: Level) -> Self {
        match level {
            Level::L1 => IsType::Level1,
            Level::L2 => IsType::Level2,
        }
    }
}
