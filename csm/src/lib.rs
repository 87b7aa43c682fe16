//! isisnb Circuit State Machine
//!
//! The circuit lifecycle as a pure transition table keyed by
//! (current state, event). The entity store executes the action lists;
//! this crate only decides them, so the table is testable on its own.

mod state;
mod table;

pub use state::{CircuitState, CsmAction, CsmEvent};
pub use table::{teardown_events, transition, Transition, TRANSITIONS};
