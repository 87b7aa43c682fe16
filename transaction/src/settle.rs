//! Deferred settlement.
//!
//! Some fields span several sibling leaves (a password's type, secret
//! and SNP policy). The leaves apply as no-ops and their parent node
//! registers an `apply_finish` callback. After every change of a
//! transaction was applied, each such parent above a changed node is
//! settled exactly once, reading the final values of all its leaves.

use std::collections::BTreeMap;

use isisnb_registry::{Operation, Registry};
use isisnb_tree::{ConfigTree, DataPath};

use crate::change::Change;

/// The nodes to settle after `changes` were applied, in execution
/// order (priority, then path).
///
/// The walk starts at the changed node itself, or at its parent for a
/// delete. Nodes no longer present in the candidate are skipped.
pub fn finish_set<K: Copy>(
    changes: &[Change<K>],
    candidate: &ConfigTree,
    registry: &Registry<K>,
) -> Vec<(DataPath, K)> {
    let mut pending: BTreeMap<DataPath, (u32, K)> = BTreeMap::new();

    for change in changes {
        let start = match change.op {
            Operation::Delete => match change.path.parent() {
                Some(parent) => parent,
                None => continue,
            },
            _ => change.path.clone(),
        };

        for ancestor in start.ancestors_inclusive() {
            if pending.contains_key(&ancestor) {
                continue;
            }
            let Some(node) = registry.get(&ancestor.schema_path()) else {
                continue;
            };
            if node.callbacks.apply_finish && candidate.exists(&ancestor) {
                pending.insert(ancestor, (node.priority, node.kind));
            }
        }
    }

    let mut ordered: Vec<(u32, DataPath, K)> = pending
        .into_iter()
        .map(|(path, (priority, kind))| (priority, path, kind))
        .collect();
    ordered.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
    ordered
        .into_iter()
        .map(|(_, path, kind)| (path, kind))
        .collect()
}
