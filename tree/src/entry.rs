//! Bound runtime entities.
//!
//! Configuration handlers bind the runtime object they create to the
//! tree node that created it. Later handlers resolve the object by
//! walking from their own node up to the nearest binding of the kind
//! they need.

use std::collections::BTreeMap;
use std::fmt;

use isisnb_core::{AreaId, CircuitId, InterfaceId};

use crate::error::{TreeError, TreeResult};
use crate::path::DataPath;

/// A runtime entity bound to a configuration node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entry {
    Area(AreaId),
    Circuit(CircuitId),
    Interface(InterfaceId),
}

/// The category of a bound entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Area,
    Circuit,
    Interface,
}

impl Entry {
    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::Area(_) => EntryKind::Area,
            Entry::Circuit(_) => EntryKind::Circuit,
            Entry::Interface(_) => EntryKind::Interface,
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Area(id) => write!(f, "area {}", id),
            Entry::Circuit(id) => write!(f, "circuit {}", id),
            Entry::Interface(id) => write!(f, "interface {}", id),
        }
    }
}

/// Side table of node bindings, keyed by data path.
#[derive(Debug, Clone, Default)]
pub struct EntryTable {
    entries: BTreeMap<DataPath, Entry>,
}

impl EntryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bind an entity to a node. A node is bound once; rebinding the
    /// same entity is accepted, binding a different one is not.
    pub fn set(&mut self, path: &DataPath, entry: Entry) -> TreeResult<()> {
        match self.entries.get(path) {
            Some(existing) if *existing == entry => Ok(()),
            Some(existing) => Err(TreeError::EntryAlreadySet {
                path: path.to_string(),
                existing: existing.to_string(),
            }),
            None => {
                self.entries.insert(path.clone(), entry);
                Ok(())
            }
        }
    }

    /// The binding exactly at a node.
    pub fn get(&self, path: &DataPath) -> Option<Entry> {
        self.entries.get(path).copied()
    }

    /// Walk from the node up to the nearest binding of the given kind.
    pub fn lookup(&self, path: &DataPath, kind: EntryKind) -> Option<Entry> {
        path.ancestors_inclusive()
            .filter_map(|p| self.entries.get(&p).copied())
            .find(|e| e.kind() == kind)
    }

    /// Nearest Area binding.
    pub fn area(&self, path: &DataPath) -> Option<AreaId> {
        match self.lookup(path, EntryKind::Area) {
            Some(Entry::Area(id)) => Some(id),
            _ => None,
        }
    }

    /// Nearest Circuit binding.
    pub fn circuit(&self, path: &DataPath) -> Option<CircuitId> {
        match self.lookup(path, EntryKind::Circuit) {
            Some(Entry::Circuit(id)) => Some(id),
            _ => None,
        }
    }

    /// Nearest Interface binding.
    pub fn interface(&self, path: &DataPath) -> Option<InterfaceId> {
        match self.lookup(path, EntryKind::Interface) {
            Some(Entry::Interface(id)) => Some(id),
            _ => None,
        }
    }

    /// Remove every binding at or beneath a node.
    pub fn remove_subtree(&mut self, path: &DataPath) -> usize {
        let doomed: Vec<DataPath> = self
            .entries
            .keys()
            .filter(|p| p.starts_with(path))
            .cloned()
            .collect();
        for p in &doomed {
            self.entries.remove(p);
        }
        doomed.len()
    }

    /// Iterate all bindings.
    pub fn iter(&self) -> impl Iterator<Item = (&DataPath, &Entry)> {
        self.entries.iter()
    }
}
