//! Circuit lifecycle: executes the state machine's action lists
//! against the router context.

use isisnb_core::{AreaId, CircuitId, InterfaceId, IsType, Password};
use isisnb_csm::{teardown_events, transition, CircuitState, CsmAction, CsmEvent};

use crate::circuit::Circuit;
use crate::context::RouterContext;
use crate::error::{StoreError, StoreResult};

impl RouterContext {
    pub fn circuit(&self, id: CircuitId) -> Option<&Circuit> {
        self.circuits.get(&id)
    }

    pub fn circuit_mut(&mut self, id: CircuitId) -> StoreResult<&mut Circuit> {
        self.circuits
            .get_mut(&id)
            .ok_or(StoreError::CircuitNotFound(id))
    }

    pub fn circuits(&self) -> impl Iterator<Item = &Circuit> {
        self.circuits.values()
    }

    /// The circuit running on a named interface.
    pub fn circuit_by_interface(&self, name: &str) -> Option<&Circuit> {
        self.interface_lookup(name)
            .and_then(|iface| iface.circuit)
            .and_then(|id| self.circuits.get(&id))
    }

    // ========== State machine ==========

    /// Feed one event to the circuit of an interface.
    ///
    /// `area` is required by transitions that attach the circuit. Pairs
    /// the state machine does not define are ignored. Returns the
    /// circuit that exists afterwards, if any.
    pub fn csm_state_change(
        &mut self,
        iface: InterfaceId,
        event: CsmEvent,
        area: Option<AreaId>,
    ) -> StoreResult<Option<CircuitId>> {
        let (name, mut current) = match self.interfaces.get(&iface) {
            Some(i) => (i.name.clone(), i.circuit),
            None => return Err(StoreError::interface_not_found(iface.to_string())),
        };
        let state = current
            .and_then(|id| self.circuits.get(&id))
            .map(|c| c.state)
            .unwrap_or(CircuitState::NotAvailable);

        let Some(edge) = transition(state, event) else {
            tracing::warn!(interface = %name, state = %state, event = %event, "ignoring circuit event");
            return Ok(current);
        };

        for action in edge.actions {
            current = self.csm_execute(*action, iface, current, area)?;
        }
        if let Some(circuit) = current.and_then(|id| self.circuits.get_mut(&id)) {
            circuit.state = edge.to;
        }

        tracing::debug!(
            interface = %name,
            from = %state,
            event = %event,
            to = %edge.to,
            "circuit state change"
        );
        Ok(current)
    }

    fn csm_execute(
        &mut self,
        action: CsmAction,
        iface: InterfaceId,
        current: Option<CircuitId>,
        area: Option<AreaId>,
    ) -> StoreResult<Option<CircuitId>> {
        if action == CsmAction::Create {
            let id = CircuitId::new(self.next_circuit);
            self.next_circuit += 1;
            self.circuits
                .insert(id, Circuit::new(id, iface, &self.circuit_defaults));
            if let Some(i) = self.interfaces.get_mut(&iface) {
                i.circuit = Some(id);
            }
            return Ok(Some(id));
        }

        let Some(id) = current else {
            return Ok(None);
        };

        match action {
            CsmAction::Create => {}
            CsmAction::AttachArea => {
                let area_id = area.ok_or_else(|| StoreError::area_not_found("<none>"))?;
                let area = self
                    .areas
                    .get_mut(&area_id)
                    .ok_or_else(|| StoreError::area_not_found(area_id))?;
                if !area.circuits.contains(&id) {
                    area.circuits.push(id);
                }
                let area_type = area.is_type;
                let circuit = self.circuit_mut(id)?;
                circuit.area = Some(area_id);
                circuit.is_type = Circuit::effective_type(circuit.circuit_type, area_type);
            }
            CsmAction::DetachArea => {
                let circuit = self.circuit_mut(id)?;
                if let Some(area_id) = circuit.area.take() {
                    if let Some(area) = self.areas.get_mut(&area_id) {
                        area.circuits.retain(|c| *c != id);
                    }
                }
            }
            CsmAction::BindInterface => self.circuit_mut(id)?.if_bound = true,
            CsmAction::UnbindInterface => self.circuit_mut(id)?.if_bound = false,
            CsmAction::Start | CsmAction::Stop => {
                let circuit = self.circuit_mut(id)?;
                circuit.active = action == CsmAction::Start;
                if let Some(area_id) = circuit.area {
                    let levels = circuit.is_type;
                    self.schedule(area_id, levels);
                }
            }
            CsmAction::Destroy => {
                self.circuits.remove(&id);
                if let Some(i) = self.interfaces.get_mut(&iface) {
                    i.circuit = None;
                }
                self.forget_interface_if_unused(iface);
                return Ok(None);
            }
        }
        Ok(Some(id))
    }

    // ========== Configuration ==========

    /// Enable the protocol on an interface inside an area.
    ///
    /// Reuses the circuit an earlier interface-up created, and brings
    /// the circuit up right away when the interface is ready.
    pub fn circuit_create(&mut self, area: AreaId, iface: InterfaceId) -> StoreResult<CircuitId> {
        if !self.areas.contains_key(&area) {
            return Err(StoreError::area_not_found(area));
        }
        let id = self
            .csm_state_change(iface, CsmEvent::Enable, Some(area))?
            .ok_or_else(|| StoreError::interface_not_found(iface.to_string()))?;

        let ready = self.interfaces.get(&iface).is_some_and(|i| i.up);
        if ready && self.circuits.get(&id).map(|c| c.state) == Some(CircuitState::Configured) {
            self.csm_state_change(iface, CsmEvent::IfUp, None)?;
        }
        Ok(id)
    }

    /// Drive a circuit through the teardown edges of its current state.
    ///
    /// A circuit already released by its area's destruction is left alone.
    pub fn circuit_teardown(&mut self, id: CircuitId) -> StoreResult<()> {
        let Some(circuit) = self.circuits.get(&id) else {
            return Ok(());
        };
        let iface = circuit.interface;
        for event in teardown_events(circuit.state) {
            self.csm_state_change(iface, *event, None)?;
        }
        Ok(())
    }

    /// Set the configured circuit type and recompute the effective levels.
    pub fn circuit_is_type_set(&mut self, id: CircuitId, circuit_type: IsType) -> StoreResult<()> {
        let area_type = match self.circuit(id).and_then(|c| c.area) {
            Some(area) => self.area(area).map(|a| a.is_type),
            None => None,
        };
        let circuit = self.circuit_mut(id)?;
        circuit.circuit_type = circuit_type;
        let effective = Circuit::effective_type(circuit_type, area_type.unwrap_or(circuit_type));
        if circuit.is_type == effective {
            return Ok(());
        }
        circuit.is_type = effective;
        if let (Some(area), CircuitState::Up) = (circuit.area, circuit.state) {
            self.schedule(area, IsType::Level1And2);
        }
        Ok(())
    }

    /// Set the enabled address families.
    pub fn circuit_af_set(&mut self, id: CircuitId, ipv4: bool, ipv6: bool) -> StoreResult<()> {
        let circuit = self.circuit_mut(id)?;
        if circuit.ipv4_routing == ipv4 && circuit.ipv6_routing == ipv6 {
            return Ok(());
        }
        circuit.ipv4_routing = ipv4;
        circuit.ipv6_routing = ipv6;
        if let Some(area) = circuit.area {
            let levels = circuit.is_type;
            self.schedule(area, levels);
        }
        Ok(())
    }

    pub fn circuit_passwd_set(&mut self, id: CircuitId, passwd: Option<Password>) -> StoreResult<()> {
        self.circuit_mut(id)?.password = passwd;
        Ok(())
    }

    // ========== Network events ==========

    /// An interface became ready.
    pub fn interface_up(&mut self, name: &str) -> StoreResult<Option<CircuitId>> {
        let iface = self.interface_get_or_create(name);
        if let Some(i) = self.interfaces.get_mut(&iface) {
            if i.up {
                return Ok(i.circuit);
            }
            i.up = true;
        }
        self.csm_state_change(iface, CsmEvent::IfUp, None)
    }

    /// An interface went away.
    pub fn interface_down(&mut self, name: &str) -> StoreResult<Option<CircuitId>> {
        let iface = self
            .interface_lookup(name)
            .map(|i| i.id)
            .ok_or_else(|| StoreError::interface_not_found(name))?;
        let has_circuit = match self.interfaces.get_mut(&iface) {
            Some(i) if i.up => {
                i.up = false;
                i.circuit.is_some()
            }
            Some(i) => return Ok(i.circuit),
            None => return Ok(None),
        };
        let result = if has_circuit {
            self.csm_state_change(iface, CsmEvent::IfDown, None)?
        } else {
            None
        };
        self.forget_interface_if_unused(iface);
        Ok(result)
    }
}
