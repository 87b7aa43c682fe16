//! Per-node callbacks.

use isisnb_registry::Operation;
use isisnb_tree::{ConfigTree, DataNode, EntryTable};

use crate::error::NbResult;

/// What a callback sees of the change it handles.
#[derive(Debug, Clone)]
pub struct CallbackArgs<'a> {
    pub op: Operation,
    /// The changed node. Deleted nodes are read from the running tree,
    /// everything else from the candidate.
    pub dnode: DataNode<'a>,
    /// The whole candidate configuration.
    pub candidate: &'a ConfigTree,
}

/// The phases of one schema node kind.
///
/// `C` is the runtime context the callbacks act on. Every phase
/// defaults to a successful no-op, so a kind only implements the
/// phases it takes part in.
pub trait NodeCallbacks<C> {
    /// Whatever prepare acquires and apply consumes.
    type Resource;

    /// Read-only checks against the proposed value and the committed
    /// runtime state.
    fn validate(&self, _ctx: &C, _args: &CallbackArgs<'_>) -> NbResult<()> {
        Ok(())
    }

    /// Acquire resources without touching shared state. Never called
    /// for deletes.
    fn prepare(&self, _ctx: &C, _args: &CallbackArgs<'_>) -> NbResult<Option<Self::Resource>> {
        Ok(None)
    }

    /// Release what prepare acquired.
    fn abort(&self, _ctx: &C, _args: &CallbackArgs<'_>, _resource: Self::Resource) {}

    /// Mutate the runtime state. Errors signal inconsistencies only.
    fn apply(
        &self,
        _ctx: &mut C,
        _entries: &mut EntryTable,
        _args: &CallbackArgs<'_>,
        _resource: Option<Self::Resource>,
    ) -> NbResult<()> {
        Ok(())
    }

    /// Settle a node once after every change beneath it was applied.
    /// Reads the final candidate values and cannot fail.
    fn apply_finish(&self, _ctx: &mut C, _entries: &EntryTable, _dnode: &DataNode<'_>) {}
}
