//! isisnb Northbound
//!
//! The daemon side of the configuration interface.
//!
//! Responsibilities:
//! - Name every handled configuration node ([`NodeKind`])
//! - Implement the transaction phases for each kind against the router context
//! - Register the schema table with priorities and callback sets
//! - Render the running configuration as text

mod callbacks;
mod instance;
mod interface;
mod kind;
mod password;
mod render;
mod schema;

pub use instance::StagedAddress;
pub use interface::{MAX_PRIORITY, MAX_WIDE_METRIC};
pub use kind::NodeKind;
pub use render::show_running;
pub use schema::{build_registry, INSTANCE_PRIORITY};
