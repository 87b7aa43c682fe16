//! Protocol enums configured per area or per circuit.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Which metric encodings an area originates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MetricStyle {
    #[default]
    Narrow,
    Transition,
    Wide,
}

impl MetricStyle {
    /// The (old, new) metric flag pair.
    pub fn flags(self) -> (bool, bool) {
        match self {
            MetricStyle::Narrow => (true, false),
            MetricStyle::Transition => (true, true),
            MetricStyle::Wide => (false, true),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MetricStyle::Narrow => "narrow",
            MetricStyle::Transition => "transition",
            MetricStyle::Wide => "wide",
        }
    }
}

impl fmt::Display for MetricStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricStyle {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "narrow" => Ok(MetricStyle::Narrow),
            "transition" => Ok(MetricStyle::Transition),
            "wide" => Ok(MetricStyle::Wide),
            other => Err(CoreError::unknown_enum("metric-style", other)),
        }
    }
}

/// Link type of a circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NetworkType {
    #[default]
    Broadcast,
    PointToPoint,
}

impl NetworkType {
    pub fn as_str(self) -> &'static str {
        match self {
            NetworkType::Broadcast => "broadcast",
            NetworkType::PointToPoint => "point-to-point",
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "broadcast" => Ok(NetworkType::Broadcast),
            "point-to-point" => Ok(NetworkType::PointToPoint),
            other => Err(CoreError::unknown_enum("network-type", other)),
        }
    }
}
