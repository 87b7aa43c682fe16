//! Circuits and the interfaces they run on.

use isisnb_core::{AreaId, CircuitId, InterfaceId, IsType, NetworkType, Password};
use isisnb_csm::CircuitState;

use crate::defaults::CircuitDefaults;

/// A network interface known to the router, either configured or
/// reported by the network layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    pub id: InterfaceId,
    pub name: String,
    /// Operationally ready.
    pub up: bool,
    /// Present in the configuration.
    pub configured: bool,
    pub circuit: Option<CircuitId>,
}

impl Interface {
    pub(crate) fn new(id: InterfaceId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            up: false,
            configured: false,
            circuit: None,
        }
    }

    /// Neither configured nor operational, nothing references it.
    pub(crate) fn is_unused(&self) -> bool {
        !self.up && !self.configured && self.circuit.is_none()
    }
}

/// Protocol state bound to one interface.
#[derive(Debug, Clone)]
pub struct Circuit {
    pub id: CircuitId,
    pub interface: InterfaceId,
    pub state: CircuitState,
    pub area: Option<AreaId>,
    /// Bound to the interface's readiness.
    pub if_bound: bool,
    /// Sending protocol traffic.
    pub active: bool,
    /// Configured circuit type.
    pub circuit_type: IsType,
    /// Levels in effect after applying the area's level set.
    pub is_type: IsType,
    pub ipv4_routing: bool,
    pub ipv6_routing: bool,
    pub hello_interval: [u32; 2],
    pub hello_multiplier: [u16; 2],
    pub hello_padding: bool,
    pub csnp_interval: [u16; 2],
    pub psnp_interval: [u16; 2],
    pub metric: [u32; 2],
    pub priority: [u8; 2],
    pub network_type: NetworkType,
    pub passive: bool,
    pub three_way_handshake: bool,
    pub password: Option<Password>,
}

impl Circuit {
    pub(crate) fn new(id: CircuitId, interface: InterfaceId, defaults: &CircuitDefaults) -> Self {
        Self {
            id,
            interface,
            state: CircuitState::NotAvailable,
            area: None,
            if_bound: false,
            active: false,
            circuit_type: defaults.circuit_type,
            is_type: defaults.circuit_type,
            ipv4_routing: false,
            ipv6_routing: false,
            hello_interval: [defaults.hello_interval; 2],
            hello_multiplier: [defaults.hello_multiplier; 2],
            hello_padding: defaults.hello_padding,
            csnp_interval: [defaults.csnp_interval; 2],
            psnp_interval: [defaults.psnp_interval; 2],
            metric: [defaults.metric; 2],
            priority: [defaults.priority; 2],
            network_type: defaults.network_type,
            passive: false,
            three_way_handshake: true,
            password: None,
        }
    }

    /// Effective levels of a circuit type inside an area.
    ///
    /// An area running both levels leaves the circuit type alone; a
    /// single-level area imposes its level.
    pub fn effective_type(circuit_type: IsType, area_type: IsType) -> IsType {
        match area_type {
            IsType::Level1And2 => circuit_type,
            single => single,
        }
    }
}
