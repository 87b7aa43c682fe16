//! Transaction manager driving the four-phase commit.

use std::fmt;

use isisnb_registry::{Operation, Registry};
use isisnb_tree::{ConfigTree, DataNode, EntryTable};

use crate::buffer::ResourceBuffer;
use crate::callbacks::{CallbackArgs, NodeCallbacks};
use crate::change::{diff, Change};
use crate::error::{ApplyFailure, TransactionError, TransactionResult};
use crate::settle::finish_set;

/// Commit phases, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Validate,
    Prepare,
    Abort,
    Apply,
    Finish,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Validate => "validate",
            Phase::Prepare => "prepare",
            Phase::Abort => "abort",
            Phase::Apply => "apply",
            Phase::Finish => "apply-finish",
        };
        f.write_str(name)
    }
}

/// Outcome of a successful commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitReport {
    pub txn_id: u64,
    /// Number of node changes applied.
    pub changes: usize,
    /// Number of nodes settled after apply.
    pub settled: usize,
}

/// Drives configuration transactions through validate, prepare and
/// apply, one at a time.
///
/// If any node fails to validate, nothing is prepared. If a node fails
/// to prepare, every node prepared before it is aborted in reverse
/// order and nothing is applied. Once apply starts, every node is
/// applied; inconsistencies are collected and reported at the end.
pub struct TransactionManager<'r, K> {
    registry: &'r Registry<K>,
    next_txn_id: u64,
}

impl<'r, K: Copy> TransactionManager<'r, K> {
    pub fn new(registry: &'r Registry<K>) -> Self {
        Self {
            registry,
            next_txn_id: 1,
        }
    }

    /// Continue numbering after transactions committed by an earlier manager.
    pub fn with_first_txn_id(mut self, txn_id: u64) -> Self {
        self.next_txn_id = txn_id;
        self
    }

    pub fn registry(&self) -> &'r Registry<K> {
        self.registry
    }

    /// The id the next transaction will get.
    pub fn next_txn_id(&self) -> u64 {
        self.next_txn_id
    }

    /// Commit the difference between `running` and `candidate`.
    pub fn commit<C>(
        &mut self,
        ctx: &mut C,
        entries: &mut EntryTable,
        running: &ConfigTree,
        candidate: &ConfigTree,
    ) -> TransactionResult<CommitReport>
    where
        K: NodeCallbacks<C>,
    {
        let changes = diff(running, candidate, self.registry);
        self.commit_changes(ctx, entries, running, candidate, &changes)
    }

    /// Commit an already computed, ordered list of changes.
    pub fn commit_changes<C>(
        &mut self,
        ctx: &mut C,
        entries: &mut EntryTable,
        running: &ConfigTree,
        candidate: &ConfigTree,
        changes: &[Change<K>],
    ) -> TransactionResult<CommitReport>
    where
        K: NodeCallbacks<C>,
    {
        if changes.is_empty() {
            return Err(TransactionError::NoChanges);
        }
        let txn_id = self.next_txn_id;
        self.next_txn_id += 1;

        let all_args: Vec<CallbackArgs<'_>> = changes
            .iter()
            .map(|change| {
                let tree = match change.op {
                    Operation::Delete => running,
                    _ => candidate,
                };
                CallbackArgs {
                    op: change.op,
                    dnode: DataNode::new(tree, change.path.clone()),
                    candidate,
                }
            })
            .collect();

        // ========== Validate ==========

        for (change, args) in changes.iter().zip(&all_args) {
            tracing::debug!(txn_id, phase = %Phase::Validate, op = %change.op, path = %change.path);
            if let Err(e) = change.kind.validate(ctx, args) {
                tracing::warn!(txn_id, path = %change.path, error = %e, "transaction rejected");
                return Err(TransactionError::Validation {
                    path: change.path.to_string(),
                    source: e,
                });
            }
        }

        // ========== Prepare ==========

        let mut buffer = ResourceBuffer::new(changes.len());
        for (index, (change, args)) in changes.iter().zip(&all_args).enumerate() {
            if change.op == Operation::Delete {
                continue;
            }
            tracing::debug!(txn_id, phase = %Phase::Prepare, op = %change.op, path = %change.path);
            match change.kind.prepare(ctx, args) {
                Ok(resource) => buffer.stage(index, resource),
                Err(e) => {
                    let aborted = self.abort(txn_id, ctx, changes, &all_args, &mut buffer);
                    tracing::warn!(
                        txn_id,
                        path = %change.path,
                        error = %e,
                        aborted,
                        "transaction aborted"
                    );
                    return Err(TransactionError::Prepare {
                        path: change.path.to_string(),
                        source: e,
                        aborted,
                    });
                }
            }
        }

        // ========== Apply ==========

        let mut errors = Vec::new();
        for (index, (change, args)) in changes.iter().zip(&all_args).enumerate() {
            tracing::debug!(txn_id, phase = %Phase::Apply, op = %change.op, path = %change.path);
            let resource = buffer.take(index);
            if let Err(e) = change.kind.apply(ctx, entries, args, resource) {
                tracing::error!(txn_id, path = %change.path, error = %e, "apply failed");
                errors.push(ApplyFailure {
                    path: change.path.to_string(),
                    error: e,
                });
            }
            if change.op == Operation::Delete {
                entries.remove_subtree(&change.path);
            }
        }

        // ========== Settle ==========

        let settle = finish_set(changes, candidate, self.registry);
        for (path, kind) in &settle {
            tracing::debug!(txn_id, phase = %Phase::Finish, path = %path);
            kind.apply_finish(ctx, entries, &DataNode::new(candidate, path.clone()));
        }

        if !errors.is_empty() {
            return Err(TransactionError::Apply { errors });
        }

        tracing::info!(
            txn_id,
            changes = changes.len(),
            settled = settle.len(),
            "transaction committed"
        );
        Ok(CommitReport {
            txn_id,
            changes: changes.len(),
            settled: settle.len(),
        })
    }

    /// Release every prepared resource, most recent first.
    fn abort<C>(
        &self,
        txn_id: u64,
        ctx: &C,
        changes: &[Change<K>],
        args: &[CallbackArgs<'_>],
        buffer: &mut ResourceBuffer<<K as NodeCallbacks<C>>::Resource>,
    ) -> usize
    where
        K: NodeCallbacks<C>,
    {
        let drained = buffer.drain_reverse();
        let count = drained.len();
        for (index, resource) in drained {
            tracing::debug!(txn_id, phase = %Phase::Abort, path = %changes[index].path);
            if let Some(resource) = resource {
                changes[index].kind.abort(ctx, &args[index], resource);
            }
        }
        count
    }
}
