//! The transition table.

use crate::state::{CircuitState, CsmAction, CsmEvent};

/// One edge of the circuit lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: CircuitState,
    pub event: CsmEvent,
    pub to: CircuitState,
    pub actions: &'static [CsmAction],
}

use CircuitState as S;
use CsmAction as A;
use CsmEvent as E;

/// Every valid (state, event) pair. Pairs not listed are ignored.
pub const TRANSITIONS: &[Transition] = &[
    Transition {
        from: S::NotAvailable,
        event: E::Enable,
        to: S::Configured,
        actions: &[A::Create, A::AttachArea],
    },
    Transition {
        from: S::NotAvailable,
        event: E::IfUp,
        to: S::Initializing,
        actions: &[A::Create, A::BindInterface],
    },
    Transition {
        from: S::Initializing,
        event: E::Enable,
        to: S::Up,
        actions: &[A::AttachArea, A::Start],
    },
    Transition {
        from: S::Initializing,
        event: E::IfDown,
        to: S::NotAvailable,
        actions: &[A::UnbindInterface, A::Destroy],
    },
    Transition {
        from: S::Configured,
        event: E::IfUp,
        to: S::Up,
        actions: &[A::BindInterface, A::Start],
    },
    Transition {
        from: S::Configured,
        event: E::Disable,
        to: S::NotAvailable,
        actions: &[A::DetachArea, A::Destroy],
    },
    Transition {
        from: S::Up,
        event: E::Disable,
        to: S::Initializing,
        actions: &[A::Stop, A::DetachArea],
    },
    Transition {
        from: S::Up,
        event: E::IfDown,
        to: S::Configured,
        actions: &[A::Stop, A::UnbindInterface],
    },
];

/// Look up the transition for a (state, event) pair.
pub fn transition(state: CircuitState, event: CsmEvent) -> Option<&'static Transition> {
    TRANSITIONS
        .iter()
        .find(|t| t.from == state && t.event == event)
}

/// Events that tear down a circuit whose configuration was deleted,
/// chosen by its current state.
pub fn teardown_events(state: CircuitState) -> &'static [CsmEvent] {
    match state {
        S::Up => &[E::IfDown, E::Disable],
        S::Configured => &[E::Disable],
        S::Initializing => &[E::IfDown],
        S::NotAvailable => &[],
    }
}
