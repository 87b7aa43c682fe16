//! Protocol defaults applied to newly created objects.

use isisnb_core::{IsType, MetricStyle, NetworkType};

/// Defaults for every newly created area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaDefaults {
    pub is_type: IsType,
    pub dynamic_hostname: bool,
    pub metric_style: MetricStyle,
    /// LSP refresh interval in seconds.
    pub lsp_refresh_interval: u16,
    /// LSP maximum lifetime in seconds.
    pub lsp_max_lifetime: u16,
    /// Minimum LSP generation interval in seconds.
    pub lsp_gen_interval: u16,
    /// Minimum SPF interval in seconds.
    pub spf_min_interval: u16,
    pub lsp_mtu: u16,
}

impl Default for AreaDefaults {
    fn default() -> Self {
        Self {
            is_type: IsType::Level1And2,
            dynamic_hostname: true,
            metric_style: MetricStyle::Narrow,
            lsp_refresh_interval: 900,
            lsp_max_lifetime: 1200,
            lsp_gen_interval: 30,
            spf_min_interval: 1,
            lsp_mtu: 1497,
        }
    }
}

impl AreaDefaults {
    pub fn with_is_type(mut self, is_type: IsType) -> Self {
        self.is_type = is_type;
        self
    }

    pub fn with_dynamic_hostname(mut self, enabled: bool) -> Self {
        self.dynamic_hostname = enabled;
        self
    }

    pub fn with_metric_style(mut self, style: MetricStyle) -> Self {
        self.metric_style = style;
        self
    }

    pub fn with_lsp_timers(mut self, refresh: u16, max_lifetime: u16) -> Self {
        self.lsp_refresh_interval = refresh;
        self.lsp_max_lifetime = max_lifetime;
        self
    }

    pub fn with_lsp_mtu(mut self, mtu: u16) -> Self {
        self.lsp_mtu = mtu;
        self
    }
}

/// Defaults for every newly created circuit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircuitDefaults {
    pub circuit_type: IsType,
    /// Hello interval in seconds.
    pub hello_interval: u32,
    pub hello_multiplier: u16,
    pub hello_padding: bool,
    /// CSNP interval in seconds.
    pub csnp_interval: u16,
    /// PSNP interval in seconds.
    pub psnp_interval: u16,
    pub metric: u32,
    pub priority: u8,
    pub network_type: NetworkType,
}

impl Default for CircuitDefaults {
    fn default() -> Self {
        Self {
            circuit_type: IsType::Level1And2,
            hello_interval: 3,
            hello_multiplier: 10,
            hello_padding: true,
            csnp_interval: 10,
            psnp_interval: 2,
            metric: 10,
            priority: 64,
            network_type: NetworkType::Broadcast,
        }
    }
}

impl CircuitDefaults {
    pub fn with_hello(mut self, interval: u32, multiplier: u16) -> Self {
        self.hello_interval = interval;
        self.hello_multiplier = multiplier;
        self
    }

    pub fn with_metric(mut self, metric: u32) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_network_type(mut self, network_type: NetworkType) -> Self {
        self.network_type = network_type;
        self
    }
}
