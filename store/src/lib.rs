//! isisnb Entity Store
//!
//! The router context owns every runtime object the configuration
//! handlers manipulate: areas with their addresses and passwords,
//! circuits with their lifecycle state, and the interfaces they run on.
//! It also owns the router-wide system ID and an outbox of routing
//! triggers consumed by the routing computation.

mod area;
mod circuit;
mod context;
mod defaults;
mod error;
mod event;
mod lifecycle;

pub use area::{Area, SpfBackoff};
pub use circuit::{Circuit, Interface};
pub use context::RouterContext;
pub use defaults::{AreaDefaults, CircuitDefaults};
pub use error::{StoreError, StoreResult};
pub use event::RoutingEvent;
