//! Schema node kinds.

use std::fmt;

use isisnb_core::Level;

/// Every configuration node the daemon handles.
///
/// Per-level leaves carry their level so one handler serves both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    // ========== Area ==========
    Instance,
    IsType,
    AreaAddress,
    DynamicHostname,
    Attached,
    Overload,
    MetricStyle,
    PurgeOriginator,
    LogAdjacencyChanges,
    LspMtu,
    /// Renders both refresh intervals in one line when they agree.
    LspRefreshIntervals,
    LspRefreshInterval(Level),
    LspMaxLifetime(Level),
    LspGenerationIntervals,
    LspGenerationInterval(Level),
    SpfMinimumInterval(Level),
    SpfBackoff,
    SpfBackoffDelay,
    /// Level-1 is the area password, level-2 the domain password.
    AreaPassword(Level),

    // ========== Shared password leaves ==========
    PasswordSecret,
    PasswordOption,

    // ========== Interface ==========
    Interface,
    Circuit,
    AreaTag,
    CircuitType,
    Ipv4Routing,
    Ipv6Routing,
    CsnpInterval(Level),
    PsnpInterval(Level),
    HelloPadding,
    HelloInterval(Level),
    HelloMultiplier(Level),
    Metric(Level),
    Priority(Level),
    NetworkType,
    Passive,
    DisableThreeWayHandshake,
    CircuitPassword,
}

impl NodeKind {
    /// Kinds whose handlers act on an area.
    pub fn is_area_scoped(self) -> bool {
        matches!(
            self,
            NodeKind::Instance
                | NodeKind::IsType
                | NodeKind::AreaAddress
                | NodeKind::DynamicHostname
                | NodeKind::Attached
                | NodeKind::Overload
                | NodeKind::MetricStyle
                | NodeKind::PurgeOriginator
                | NodeKind::LogAdjacencyChanges
                | NodeKind::LspMtu
                | NodeKind::LspRefreshIntervals
                | NodeKind::LspRefreshInterval(_)
                | NodeKind::LspMaxLifetime(_)
                | NodeKind::LspGenerationIntervals
                | NodeKind::LspGenerationInterval(_)
                | NodeKind::SpfMinimumInterval(_)
                | NodeKind::SpfBackoff
                | NodeKind::SpfBackoffDelay
                | NodeKind::AreaPassword(_)
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::LspRefreshInterval(l)
            | NodeKind::LspMaxLifetime(l)
            | NodeKind::LspGenerationInterval(l)
            | NodeKind::SpfMinimumInterval(l)
            | NodeKind::AreaPassword(l)
            | NodeKind::CsnpInterval(l)
            | NodeKind::PsnpInterval(l)
            | NodeKind::HelloInterval(l)
            | NodeKind::HelloMultiplier(l)
            | NodeKind::Metric(l)
            | NodeKind::Priority(l) => {
                let name = format!("{:?}", self);
                let base = name.split('(').next().unwrap_or_default();
                write!(f, "{}({})", base, l)
            }
            other => write!(f, "{:?}", other),
        }
    }
}
