//! Per-node changes between two configuration trees.

use std::cmp::Ordering;

use isisnb_registry::{Operation, Registry};
use isisnb_tree::{ConfigTree, DataPath};

/// One node-level edit of a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change<K> {
    pub op: Operation,
    pub path: DataPath,
    pub kind: K,
    pub priority: u32,
}

impl<K> Change<K> {
    /// Execution order: priority first, then path order so that
    /// parents precede their descendants.
    pub fn order(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.path.cmp(&other.path))
    }
}

/// Compute the ordered changes that turn `running` into `candidate`.
///
/// - a new node yields a create, or a modify when its schema node only
///   handles modify;
/// - a leaf whose value changed yields a modify;
/// - a removed subtree yields one delete at its top-most node with a
///   delete callback, descending into children otherwise.
///
/// Nodes without a registered schema node are skipped.
pub fn diff<K: Copy>(
    running: &ConfigTree,
    candidate: &ConfigTree,
    registry: &Registry<K>,
) -> Vec<Change<K>> {
    let mut changes = Vec::new();

    for (path, value) in candidate.iter() {
        let Some(node) = registry.get(&path.schema_path()) else {
            continue;
        };
        let op = if !running.exists(path) {
            if node.callbacks.create {
                Operation::Create
            } else if node.callbacks.modify {
                Operation::Modify
            } else {
                continue;
            }
        } else if node.callbacks.modify && running.value(path) != value {
            Operation::Modify
        } else {
            continue;
        };
        changes.push(Change {
            op,
            path: path.clone(),
            kind: node.kind,
            priority: node.priority,
        });
    }

    for (path, _) in running.iter() {
        if candidate.exists(path) {
            continue;
        }
        let Some(node) = registry.get(&path.schema_path()) else {
            continue;
        };
        if !node.callbacks.delete {
            continue;
        }
        let covered = path.ancestors_inclusive().skip(1).any(|ancestor| {
            !candidate.exists(&ancestor)
                && registry
                    .get(&ancestor.schema_path())
                    .is_some_and(|n| n.callbacks.delete)
        });
        if covered {
            continue;
        }
        changes.push(Change {
            op: Operation::Delete,
            path: path.clone(),
            kind: node.kind,
            priority: node.priority,
        });
    }

    changes.sort_by(Change::order);
    changes
}
