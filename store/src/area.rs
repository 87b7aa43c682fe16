//! Routing areas.

use isisnb_core::{AreaAddress, AreaId, CircuitId, IsType, Level, MetricStyle, Password};

use crate::defaults::AreaDefaults;

/// IETF SPF back-off delays, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpfBackoff {
    pub init_delay: u16,
    pub short_delay: u16,
    pub long_delay: u16,
    pub hold_down: u16,
    pub time_to_learn: u16,
}

impl Default for SpfBackoff {
    fn default() -> Self {
        Self {
            init_delay: 50,
            short_delay: 200,
            long_delay: 5000,
            hold_down: 10000,
            time_to_learn: 500,
        }
    }
}

/// A routing area and everything it owns.
#[derive(Debug, Clone)]
pub struct Area {
    pub id: AreaId,
    pub tag: String,
    pub is_type: IsType,
    /// Accepted area prefixes, system ID stripped.
    pub addresses: Vec<AreaAddress>,
    /// Attached circuits.
    pub circuits: Vec<CircuitId>,
    pub dynamic_hostname: bool,
    pub attached: bool,
    pub overload: bool,
    pub old_metric: bool,
    pub new_metric: bool,
    pub lsp_mtu: u16,
    /// Per-level values are indexed by [`Level::index`].
    pub lsp_refresh_interval: [u16; 2],
    pub lsp_max_lifetime: [u16; 2],
    pub lsp_gen_interval: [u16; 2],
    pub spf_min_interval: [u16; 2],
    pub spf_backoff: Option<SpfBackoff>,
    pub purge_originator: bool,
    pub log_adjacency_changes: bool,
    /// Level-1 authentication.
    pub area_password: Option<Password>,
    /// Level-2 authentication.
    pub domain_password: Option<Password>,
}

impl Area {
    pub(crate) fn new(id: AreaId, tag: impl Into<String>, defaults: &AreaDefaults) -> Self {
        let (old_metric, new_metric) = defaults.metric_style.flags();
        Self {
            id,
            tag: tag.into(),
            is_type: defaults.is_type,
            addresses: Vec::new(),
            circuits: Vec::new(),
            dynamic_hostname: defaults.dynamic_hostname,
            attached: false,
            overload: false,
            old_metric,
            new_metric,
            lsp_mtu: defaults.lsp_mtu,
            lsp_refresh_interval: [defaults.lsp_refresh_interval; 2],
            lsp_max_lifetime: [defaults.lsp_max_lifetime; 2],
            lsp_gen_interval: [defaults.lsp_gen_interval; 2],
            spf_min_interval: [defaults.spf_min_interval; 2],
            spf_backoff: None,
            purge_originator: false,
            log_adjacency_changes: false,
            area_password: None,
            domain_password: None,
        }
    }

    /// Returns true if an address with the same prefix bytes is configured.
    pub fn has_address(&self, prefix: &AreaAddress) -> bool {
        self.addresses.iter().any(|a| a == prefix)
    }

    /// The password protecting one level.
    pub fn password(&self, level: Level) -> Option<&Password> {
        match level {
            Level::L1 => self.area_password.as_ref(),
            Level::L2 => self.domain_password.as_ref(),
        }
    }

    pub(crate) fn password_slot(&mut self, level: Level) -> &mut Option<Password> {
        match level {
            Level::L1 => &mut self.area_password,
            Level::L2 => &mut self.domain_password,
        }
    }

    /// The metric style implied by the old/new flags.
    pub fn metric_style(&self) -> MetricStyle {
        match (self.old_metric, self.new_metric) {
            (true, true) => MetricStyle::Transition,
            (false, true) => MetricStyle::Wide,
            _ => MetricStyle::Narrow,
        }
    }
}
