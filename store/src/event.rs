//! Triggers for the routing computation.

use std::fmt;

use isisnb_core::{AreaId, IsType, Level};

/// A request to the routing computation, queued by the store and
/// drained by the daemon after a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutingEvent {
    /// Generate link-state data for one level of an area now.
    LspGenerate { area: AreaId, level: Level },
    /// Schedule regeneration of link-state data for a set of levels.
    LspRegenerate { area: AreaId, levels: IsType },
}

impl RoutingEvent {
    pub fn area(&self) -> AreaId {
        match self {
            RoutingEvent::LspGenerate { area, .. } | RoutingEvent::LspRegenerate { area, .. } => {
                *area
            }
        }
    }
}

impl fmt::Display for RoutingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutingEvent::LspGenerate { area, level } => {
                write!(f, "lsp-generate {} {}", area, level)
            }
            RoutingEvent::LspRegenerate { area, levels } => {
                write!(f, "lsp-regenerate {} {}", area, levels)
            }
        }
    }
}
