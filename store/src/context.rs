//! The router context: areas, addresses and the system ID.

use std::collections::BTreeMap;

use isisnb_core::{
    AreaAddress, AreaId, CircuitId, InterfaceId, IsType, Level, MetricStyle, NetAddress,
    Password, SystemId,
};
use isisnb_csm::CsmEvent;

use crate::area::{Area, SpfBackoff};
use crate::circuit::{Circuit, Interface};
use crate::defaults::{AreaDefaults, CircuitDefaults};
use crate::error::{StoreError, StoreResult};
use crate::event::RoutingEvent;

/// Process-wide protocol state, created at daemon start and dropped at
/// shutdown.
///
/// Mutated only while a transaction applies or a network event is
/// processed, so status queries in between never observe partial state.
#[derive(Debug, Clone)]
pub struct RouterContext {
    pub(crate) system_id: SystemId,
    pub(crate) sysid_set: bool,
    pub(crate) areas: BTreeMap<AreaId, Area>,
    pub(crate) circuits: BTreeMap<CircuitId, Circuit>,
    pub(crate) interfaces: BTreeMap<InterfaceId, Interface>,
    next_area: u32,
    pub(crate) next_circuit: u32,
    next_interface: u32,
    area_defaults: AreaDefaults,
    pub(crate) circuit_defaults: CircuitDefaults,
    debug_events: bool,
    pub(crate) events: Vec<RoutingEvent>,
}

impl Default for RouterContext {
    fn default() -> Self {
        Self::new(AreaDefaults::default(), CircuitDefaults::default())
    }
}

impl RouterContext {
    pub fn new(area_defaults: AreaDefaults, circuit_defaults: CircuitDefaults) -> Self {
        Self {
            system_id: SystemId::ZERO,
            sysid_set: false,
            areas: BTreeMap::new(),
            circuits: BTreeMap::new(),
            interfaces: BTreeMap::new(),
            next_area: 1,
            next_circuit: 1,
            next_interface: 1,
            area_defaults,
            circuit_defaults,
            debug_events: false,
            events: Vec::new(),
        }
    }

    /// Log router-wide events such as system ID changes.
    pub fn with_debug_events(mut self, enabled: bool) -> Self {
        self.debug_events = enabled;
        self
    }

    pub fn area_defaults(&self) -> &AreaDefaults {
        &self.area_defaults
    }

    pub fn circuit_defaults(&self) -> &CircuitDefaults {
        &self.circuit_defaults
    }

    // ========== System ID ==========

    pub fn system_id(&self) -> SystemId {
        self.system_id
    }

    /// Whether a system ID was taken from an area address.
    pub fn sysid_set(&self) -> bool {
        self.sysid_set
    }

    fn reset_system_id_if_unused(&mut self) {
        if !self.sysid_set || self.areas.values().any(|a| !a.addresses.is_empty()) {
            return;
        }
        self.system_id = SystemId::ZERO;
        self.sysid_set = false;
        if self.debug_events {
            tracing::debug!("Router has no SystemID");
        }
    }

    // ========== Areas ==========

    pub fn area(&self, id: AreaId) -> Option<&Area> {
        self.areas.get(&id)
    }

    pub fn area_mut(&mut self, id: AreaId) -> StoreResult<&mut Area> {
        self.areas
            .get_mut(&id)
            .ok_or_else(|| StoreError::area_not_found(id))
    }

    /// Find an area by tag.
    pub fn area_lookup(&self, tag: &str) -> Option<&Area> {
        self.areas.values().find(|a| a.tag == tag)
    }

    pub fn areas(&self) -> impl Iterator<Item = &Area> {
        self.areas.values()
    }

    pub fn area_count(&self) -> usize {
        self.areas.len()
    }

    /// Create an area with the configured defaults.
    pub fn area_create(&mut self, tag: &str) -> StoreResult<AreaId> {
        if self.area_lookup(tag).is_some() {
            return Err(StoreError::area_exists(tag));
        }
        let id = AreaId::new(self.next_area);
        self.next_area += 1;
        self.areas.insert(id, Area::new(id, tag, &self.area_defaults));
        tracing::debug!(area = %tag, id = %id, "area created");
        Ok(id)
    }

    /// Destroy an area, disabling every attached circuit first.
    pub fn area_destroy(&mut self, tag: &str) -> StoreResult<()> {
        let (id, circuits) = match self.area_lookup(tag) {
            Some(area) => (area.id, area.circuits.clone()),
            None => return Err(StoreError::area_not_found(tag)),
        };

        for circuit_id in circuits {
            let iface = match self.circuits.get(&circuit_id) {
                Some(c) => c.interface,
                None => continue,
            };
            self.csm_state_change(iface, CsmEvent::Disable, None)?;
        }

        self.areas.remove(&id);
        self.events.retain(|e| e.area() != id);
        self.reset_system_id_if_unused();
        tracing::debug!(area = %tag, "area destroyed");
        Ok(())
    }

    /// Change the levels an area runs. A single-level area imposes its
    /// level on every attached circuit.
    pub fn area_is_type_set(&mut self, id: AreaId, is_type: IsType) -> StoreResult<()> {
        let area = self.area_mut(id)?;
        if area.is_type == is_type {
            return Ok(());
        }
        area.is_type = is_type;
        let has_addresses = !area.addresses.is_empty();
        let attached = area.circuits.clone();

        for circuit_id in attached {
            if let Some(circuit) = self.circuits.get_mut(&circuit_id) {
                circuit.is_type = Circuit::effective_type(circuit.circuit_type, is_type);
            }
        }
        if has_addresses {
            for level in is_type.levels() {
                self.events.push(RoutingEvent::LspGenerate { area: id, level });
            }
        }
        Ok(())
    }

    pub fn area_dynhostname_set(&mut self, id: AreaId, enabled: bool) -> StoreResult<()> {
        let area = self.area_mut(id)?;
        if area.dynamic_hostname != enabled {
            area.dynamic_hostname = enabled;
            let levels = area.is_type;
            self.schedule(id, levels);
        }
        Ok(())
    }

    pub fn area_attached_bit_set(&mut self, id: AreaId, attached: bool) -> StoreResult<()> {
        let area = self.area_mut(id)?;
        if area.attached != attached {
            area.attached = attached;
            self.schedule(id, IsType::Level1);
        }
        Ok(())
    }

    pub fn area_overload_bit_set(&mut self, id: AreaId, overload: bool) -> StoreResult<()> {
        let area = self.area_mut(id)?;
        if area.overload != overload {
            area.overload = overload;
            let levels = area.is_type;
            self.schedule(id, levels);
        }
        Ok(())
    }

    pub fn area_metric_style_set(&mut self, id: AreaId, style: MetricStyle) -> StoreResult<()> {
        let area = self.area_mut(id)?;
        let (old_metric, new_metric) = style.flags();
        if (area.old_metric, area.new_metric) != (old_metric, new_metric) {
            area.old_metric = old_metric;
            area.new_metric = new_metric;
            let levels = area.is_type;
            self.schedule(id, levels);
        }
        Ok(())
    }

    pub fn area_lsp_refresh_set(&mut self, id: AreaId, level: Level, secs: u16) -> StoreResult<()> {
        let area = self.area_mut(id)?;
        area.lsp_refresh_interval[level.index()] = secs;
        self.schedule(id, IsType::from(level));
        Ok(())
    }

    pub fn area_max_lsp_lifetime_set(
        &mut self,
        id: AreaId,
        level: Level,
        secs: u16,
    ) -> StoreResult<()> {
        let area = self.area_mut(id)?;
        area.lsp_max_lifetime[level.index()] = secs;
        self.schedule(id, IsType::from(level));
        Ok(())
    }

    pub fn area_spf_backoff_set(
        &mut self,
        id: AreaId,
        backoff: Option<SpfBackoff>,
    ) -> StoreResult<()> {
        self.area_mut(id)?.spf_backoff = backoff;
        Ok(())
    }

    /// Replace the whole password of one level.
    pub fn area_passwd_set(&mut self, id: AreaId, level: Level, passwd: Password) -> StoreResult<()> {
        *self.area_mut(id)?.password_slot(level) = Some(passwd);
        self.schedule(id, IsType::from(level));
        Ok(())
    }

    pub fn area_passwd_unset(&mut self, id: AreaId, level: Level) -> StoreResult<()> {
        *self.area_mut(id)?.password_slot(level) = None;
        self.schedule(id, IsType::from(level));
        Ok(())
    }

    // ========== Area addresses ==========

    /// Link an accepted NET into an area.
    ///
    /// The first address anywhere fixes the system ID. Re-adding a
    /// prefix the area already has is a silent no-op and returns false.
    pub fn area_address_add(&mut self, id: AreaId, net: &NetAddress) -> StoreResult<bool> {
        self.area_address_link(id, net.system_id(), net.area_prefix())
    }

    /// Link an already stripped prefix together with the system ID its
    /// NET carried.
    pub fn area_address_link(
        &mut self,
        id: AreaId,
        found: SystemId,
        prefix: AreaAddress,
    ) -> StoreResult<bool> {
        if self.sysid_set && self.system_id != found {
            return Err(StoreError::SystemIdMismatch {
                expected: self.system_id,
                found,
            });
        }

        let area = self
            .areas
            .get_mut(&id)
            .ok_or_else(|| StoreError::area_not_found(id))?;
        if area.has_address(&prefix) {
            tracing::debug!(area = %area.tag, address = %prefix, "duplicate area address ignored");
            return Ok(false);
        }
        area.addresses.push(prefix);
        let levels = area.is_type;

        if !self.sysid_set {
            self.system_id = found;
            self.sysid_set = true;
            if self.debug_events {
                tracing::debug!(system_id = %found, "Router SystemID set");
            }
        }

        for level in levels.levels() {
            self.events.push(RoutingEvent::LspGenerate { area: id, level });
        }
        Ok(true)
    }

    /// Unlink an area address. Removing the last address of the router
    /// resets the system ID.
    pub fn area_address_remove(&mut self, id: AreaId, net: &NetAddress) -> StoreResult<()> {
        let prefix: AreaAddress = net.area_prefix();
        let area = self
            .areas
            .get_mut(&id)
            .ok_or_else(|| StoreError::area_not_found(id))?;
        let pos = area
            .addresses
            .iter()
            .position(|a| *a == prefix)
            .ok_or_else(|| StoreError::address_not_found(area.tag.clone(), &prefix))?;
        area.addresses.remove(pos);
        let levels = area.is_type;

        self.schedule(id, levels);
        self.reset_system_id_if_unused();
        Ok(())
    }

    // ========== Interfaces ==========

    pub fn interface(&self, id: InterfaceId) -> Option<&Interface> {
        self.interfaces.get(&id)
    }

    pub fn interface_lookup(&self, name: &str) -> Option<&Interface> {
        self.interfaces.values().find(|i| i.name == name)
    }

    pub(crate) fn interface_get_or_create(&mut self, name: &str) -> InterfaceId {
        if let Some(iface) = self.interface_lookup(name) {
            return iface.id;
        }
        let id = InterfaceId::new(self.next_interface);
        self.next_interface += 1;
        self.interfaces.insert(id, Interface::new(id, name));
        id
    }

    /// Mark an interface as configured, creating its record if needed.
    pub fn interface_configure(&mut self, name: &str) -> InterfaceId {
        let id = self.interface_get_or_create(name);
        if let Some(iface) = self.interfaces.get_mut(&id) {
            iface.configured = true;
        }
        id
    }

    /// Drop the configuration of an interface, tearing down its circuit.
    pub fn interface_unconfigure(&mut self, id: InterfaceId) -> StoreResult<()> {
        let circuit = self
            .interfaces
            .get(&id)
            .ok_or_else(|| StoreError::interface_not_found(id.to_string()))?
            .circuit;
        if let Some(circuit) = circuit {
            self.circuit_teardown(circuit)?;
        }
        if let Some(iface) = self.interfaces.get_mut(&id) {
            iface.configured = false;
        }
        self.forget_interface_if_unused(id);
        Ok(())
    }

    pub(crate) fn forget_interface_if_unused(&mut self, id: InterfaceId) {
        if self.interfaces.get(&id).is_some_and(Interface::is_unused) {
            self.interfaces.remove(&id);
        }
    }

    // ========== Routing triggers ==========

    pub(crate) fn schedule(&mut self, area: AreaId, levels: IsType) {
        self.events.push(RoutingEvent::LspRegenerate { area, levels });
    }

    /// Routing triggers queued since the last drain.
    pub fn routing_events(&self) -> &[RoutingEvent] {
        &self.events
    }

    /// Drain the queued routing triggers.
    pub fn take_routing_events(&mut self) -> Vec<RoutingEvent> {
        std::mem::take(&mut self.events)
    }
}
