//! Circuit states, events and actions.

use std::fmt;

/// Lifecycle state of a circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CircuitState {
    /// No circuit exists (initial and final state).
    NotAvailable,
    /// Bound to a ready interface, not yet attached to an area.
    Initializing,
    /// Attached to an area, interface not ready.
    Configured,
    /// Attached to an area and to a ready interface; sending protocol traffic.
    Up,
}

impl fmt::Display for CircuitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CircuitState::NotAvailable => "not-available",
            CircuitState::Initializing => "initializing",
            CircuitState::Configured => "configured",
            CircuitState::Up => "up",
        };
        f.write_str(name)
    }
}

/// Events driving the circuit lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CsmEvent {
    /// Protocol enabled on the interface (configuration).
    Enable,
    /// Protocol disabled on the interface (configuration).
    Disable,
    /// Interface became ready (network).
    IfUp,
    /// Interface went away (network).
    IfDown,
}

impl fmt::Display for CsmEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CsmEvent::Enable => "protocol-enable",
            CsmEvent::Disable => "protocol-disable",
            CsmEvent::IfUp => "interface-up",
            CsmEvent::IfDown => "interface-down",
        };
        f.write_str(name)
    }
}

/// Side effects the store performs while taking a transition, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CsmAction {
    /// Allocate the circuit object.
    Create,
    /// Link the circuit into its area and inherit the area's level set.
    AttachArea,
    /// Unlink the circuit from its area.
    DetachArea,
    /// Bind the circuit to its interface.
    BindInterface,
    /// Release the interface binding.
    UnbindInterface,
    /// Start sending protocol traffic.
    Start,
    /// Stop protocol traffic and drop adjacencies.
    Stop,
    /// Free the circuit object.
    Destroy,
}
