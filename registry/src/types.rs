//! Schema definition types.

use std::fmt;

/// Priority assigned to nodes that do not ask for another one.
/// Lower values run first.
pub const DEFAULT_PRIORITY: u32 = 100;

/// A configuration edit operation on one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// A container, presence leaf or list entry came into existence.
    Create,
    /// A valued leaf was set or changed.
    Modify,
    /// A node and its subtree were removed.
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Create => write!(f, "create"),
            Operation::Modify => write!(f, "modify"),
            Operation::Delete => write!(f, "delete"),
        }
    }
}

/// Which callbacks a schema node implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CallbackSet {
    pub create: bool,
    pub modify: bool,
    pub delete: bool,
    /// Settlement after every change beneath the node was applied.
    pub apply_finish: bool,
    /// Contributes lines to the running-config rendering.
    pub cli_show: bool,
}

impl CallbackSet {
    /// Whether the node handles the given edit operation.
    pub fn handles(&self, op: Operation) -> bool {
        match op {
            Operation::Create => self.create,
            Operation::Modify => self.modify,
            Operation::Delete => self.delete,
        }
    }

    /// Returns true if no callback at all is registered.
    pub fn is_empty(&self) -> bool {
        !(self.create || self.modify || self.delete || self.apply_finish || self.cli_show)
    }
}

/// A registered schema node.
#[derive(Debug, Clone)]
pub struct SchemaNode<K> {
    /// Schema path without key predicates, e.g. `/isis/instance/area-address`.
    pub path: String,
    /// Caller-defined node kind used to dispatch callbacks.
    pub kind: K,
    /// Execution priority, lower first.
    pub priority: u32,
    /// Implemented callbacks.
    pub callbacks: CallbackSet,
}
