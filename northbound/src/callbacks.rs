//! Phase dispatch for every node kind.

use isisnb_core::{AreaId, CircuitId, IsType, MetricStyle, NetworkType, PasswordType, SnpAuth};
use isisnb_constraint::{check_password, Violations};
use isisnb_registry::Operation;
use isisnb_store::{RouterContext, StoreError};
use isisnb_transaction::{CallbackArgs, NbError, NbResult, NodeCallbacks};
use isisnb_tree::{ConfigTree, DataNode, DataPath, EntryTable};

use crate::instance::{self, StagedAddress};
use crate::interface;
use crate::kind::NodeKind;

impl NodeCallbacks<RouterContext> for NodeKind {
    /// Only area addresses stage anything.
    type Resource = StagedAddress;

    fn validate(&self, ctx: &RouterContext, args: &CallbackArgs<'_>) -> NbResult<()> {
        if args.op == Operation::Delete {
            return validate_removal(*self, ctx, args);
        }
        check_leaf_type(*self, &args.dnode)?;
        match self {
            NodeKind::AreaAddress => instance::validate_area_address(ctx, args),
            NodeKind::LspRefreshInterval(level) | NodeKind::LspMaxLifetime(level) => {
                instance::validate_lsp_timers(ctx, args, *level)
            }
            NodeKind::AreaPassword(_) | NodeKind::CircuitPassword => {
                check_password_leaves(args.candidate, args.dnode.path())
            }
            NodeKind::PasswordSecret => {
                validate_password(args)?;
                check_enclosing_password(args)
            }
            NodeKind::PasswordOption => check_enclosing_password(args),
            NodeKind::Circuit | NodeKind::AreaTag => interface::validate_area_tag(ctx, args),
            NodeKind::CircuitType => interface::validate_circuit_type(ctx, args),
            NodeKind::Metric(_) | NodeKind::Priority(_) => interface::validate_range(*self, args),
            _ => Ok(()),
        }
    }

    fn prepare(
        &self,
        _ctx: &RouterContext,
        args: &CallbackArgs<'_>,
    ) -> NbResult<Option<StagedAddress>> {
        match self {
            NodeKind::AreaAddress => instance::prepare_area_address(args).map(Some),
            _ => Ok(None),
        }
    }

    fn abort(&self, _ctx: &RouterContext, args: &CallbackArgs<'_>, resource: StagedAddress) {
        tracing::debug!(
            path = %args.dnode.path(),
            address = %resource.prefix,
            "released staged area address"
        );
    }

    fn apply(
        &self,
        ctx: &mut RouterContext,
        entries: &mut EntryTable,
        args: &CallbackArgs<'_>,
        resource: Option<StagedAddress>,
    ) -> NbResult<()> {
        if self.is_area_scoped() {
            instance::apply(*self, ctx, entries, args, resource)
        } else {
            interface::apply(*self, ctx, entries, args)
        }
    }

    fn apply_finish(&self, ctx: &mut RouterContext, entries: &EntryTable, dnode: &DataNode<'_>) {
        let result = match self {
            NodeKind::SpfBackoff => instance::finish_spf_backoff(ctx, entries, dnode),
            NodeKind::AreaPassword(level) => {
                instance::finish_area_password(ctx, entries, dnode, *level)
            }
            NodeKind::CircuitPassword => interface::finish_password(ctx, entries, dnode),
            _ => Ok(()),
        };
        if let Err(e) = result {
            tracing::error!(path = %dnode.path(), error = %e, "settlement failed");
        }
    }
}

/// Decode a typed leaf the way apply will read it.
fn check_leaf_type(kind: NodeKind, dnode: &DataNode<'_>) -> NbResult<()> {
    let decoded = match kind {
        NodeKind::IsType | NodeKind::CircuitType => dnode.get_enum::<IsType>(".").map(drop),
        NodeKind::MetricStyle => dnode.get_enum::<MetricStyle>(".").map(drop),
        NodeKind::NetworkType => dnode.get_enum::<NetworkType>(".").map(drop),
        NodeKind::PasswordOption => match dnode.path().last().map(|s| s.name.as_str()) {
            Some("authenticate-snp") => dnode.get_enum::<SnpAuth>(".").map(drop),
            _ => dnode.get_enum::<PasswordType>(".").map(drop),
        },
        NodeKind::DynamicHostname | NodeKind::HelloPadding => dnode.get_bool(".").map(drop),
        NodeKind::LspMtu
        | NodeKind::LspRefreshInterval(_)
        | NodeKind::LspMaxLifetime(_)
        | NodeKind::LspGenerationInterval(_)
        | NodeKind::SpfMinimumInterval(_)
        | NodeKind::SpfBackoffDelay
        | NodeKind::CsnpInterval(_)
        | NodeKind::PsnpInterval(_)
        | NodeKind::HelloMultiplier(_)
        | NodeKind::Priority(_) => dnode.get_u16(".").map(drop),
        NodeKind::HelloInterval(_) | NodeKind::Metric(_) => dnode.get_u32(".").map(drop),
        NodeKind::AreaTag | NodeKind::PasswordSecret => dnode.get_string(".").map(drop),
        _ => Ok(()),
    };
    decoded.map_err(|e| NbError::validation(e.to_string()))
}

/// A removed node carries its running value, which was accepted. What
/// can break is the node it leaves behind.
fn validate_removal(kind: NodeKind, ctx: &RouterContext, args: &CallbackArgs<'_>) -> NbResult<()> {
    let Some(parent) = args.dnode.path().parent() else {
        return Ok(());
    };
    match kind {
        NodeKind::LspRefreshInterval(level) | NodeKind::LspMaxLifetime(level) => {
            instance::validate_lsp_timers(ctx, args, level)
        }
        NodeKind::PasswordSecret | NodeKind::PasswordOption if args.candidate.exists(&parent) => {
            check_password_leaves(args.candidate, &parent)
        }
        NodeKind::AreaTag if args.candidate.exists(&parent) => {
            Err(NbError::validation("area-tag is mandatory"))
        }
        _ => Ok(()),
    }
}

fn validate_password(args: &CallbackArgs<'_>) -> NbResult<()> {
    let secret = args.dnode.get_string(".")?;
    rejected(check_password(&secret))
}

/// A password is only complete with its secret and its type.
fn check_password_leaves(candidate: &ConfigTree, container: &DataPath) -> NbResult<()> {
    for leaf in ["password", "password-type"] {
        if !candidate.exists(&container.child(leaf)) {
            return Err(NbError::validation(format!(
                "{} is mandatory in {}",
                leaf, container
            )));
        }
    }
    Ok(())
}

fn check_enclosing_password(args: &CallbackArgs<'_>) -> NbResult<()> {
    match args.dnode.path().parent() {
        Some(container) => check_password_leaves(args.candidate, &container),
        None => Ok(()),
    }
}

// ========== Helpers ==========

/// The area bound at or above the changed node.
pub(crate) fn bound_area(entries: &EntryTable, dnode: &DataNode<'_>) -> NbResult<AreaId> {
    entries
        .area(dnode.path())
        .ok_or_else(|| NbError::inconsistency(format!("no area bound at {}", dnode.path())))
}

/// The circuit bound at or above the changed node.
pub(crate) fn bound_circuit(entries: &EntryTable, dnode: &DataNode<'_>) -> NbResult<CircuitId> {
    entries
        .circuit(dnode.path())
        .ok_or_else(|| NbError::inconsistency(format!("no circuit bound at {}", dnode.path())))
}

/// Store errors during apply mean validation missed something.
pub(crate) fn inconsistent(e: StoreError) -> NbError {
    NbError::inconsistency(e.to_string())
}

/// Turn hard violations into a validation error. Warnings pass.
pub(crate) fn rejected(violations: Violations) -> NbResult<()> {
    violations
        .into_result()
        .map_err(|v| NbError::validation(v.message))
}
