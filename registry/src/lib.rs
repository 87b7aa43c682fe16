//! isisnb Registry
//!
//! Immutable schema lookup for configuration nodes. Each schema path
//! maps to a node kind chosen by the caller, the set of callbacks the
//! kind implements, and the execution priority used to order changes.

mod builder;
mod registry;
mod types;

pub use builder::{NodeBuilder, RegistryBuilder, RegistryError};
pub use registry::Registry;
pub use types::{CallbackSet, Operation, SchemaNode, DEFAULT_PRIORITY};
