//! Area-level handlers: `/isis/instance[area-tag]` and everything beneath.

use isisnb_constraint::{check_lsp_timers, InvariantChecker};
use isisnb_core::{AreaAddress, IsType, Level, MetricStyle, NetAddress, SystemId, Value};
use isisnb_registry::Operation;
use isisnb_store::{RouterContext, SpfBackoff};
use isisnb_transaction::{CallbackArgs, NbError, NbResult};
use isisnb_tree::{ConfigTree, DataNode, DataPath, Entry, EntryTable};

use crate::callbacks::{bound_area, inconsistent, rejected};
use crate::kind::NodeKind;
use crate::password::read_password;

// ========== Validate / prepare ==========

fn parse_net(dnode: &DataNode<'_>) -> NbResult<NetAddress> {
    let text = dnode.get_string(".")?;
    NetAddress::parse(&text).map_err(|e| NbError::validation(e.to_string()))
}

pub(crate) fn validate_area_address(ctx: &RouterContext, args: &CallbackArgs<'_>) -> NbResult<()> {
    let net = parse_net(&args.dnode)?;
    rejected(InvariantChecker::new(ctx).check_area_address(&net))
}

/// An area address allocated by prepare and linked in by apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedAddress {
    /// The area prefix with system ID and NSEL stripped.
    pub prefix: AreaAddress,
    pub system_id: SystemId,
}

/// Build the runtime prefix into the transaction's slot.
pub(crate) fn prepare_area_address(args: &CallbackArgs<'_>) -> NbResult<StagedAddress> {
    let net = parse_net(&args.dnode).map_err(|e| NbError::resource(e.message()))?;
    Ok(StagedAddress {
        prefix: net.area_prefix(),
        system_id: net.system_id(),
    })
}

fn leaf_u16(tree: &ConfigTree, path: &DataPath) -> Option<u16> {
    tree.value(path).and_then(Value::as_u16)
}

/// The refresh interval and maximum lifetime of one level as the
/// candidate leaves them. An absent leaf stands for its default.
pub(crate) fn validate_lsp_timers(
    ctx: &RouterContext,
    args: &CallbackArgs<'_>,
    level: Level,
) -> NbResult<()> {
    let path = args.dnode.path();
    let Some(lsp) = path.parent().and_then(|p| p.parent()) else {
        return Ok(());
    };
    let refresh = leaf_u16(
        args.candidate,
        &lsp.child("refresh-interval").child(level.to_string()),
    )
    .unwrap_or(ctx.area_defaults().lsp_refresh_interval);

    let max_lifetime = leaf_u16(
        args.candidate,
        &lsp.child("maximum-lifetime").child(level.to_string()),
    )
    .unwrap_or(ctx.area_defaults().lsp_max_lifetime);

    rejected(check_lsp_timers(refresh, max_lifetime))
}

// ========== Apply ==========

pub(crate) fn apply(
    kind: NodeKind,
    ctx: &mut RouterContext,
    entries: &mut EntryTable,
    args: &CallbackArgs<'_>,
    resource: Option<StagedAddress>,
) -> NbResult<()> {
    let dnode = &args.dnode;
    let present = args.op != Operation::Delete;
    // A removed leaf falls back to its default.
    let u16_or = |default: u16| -> NbResult<u16> {
        if present {
            Ok(dnode.get_u16(".")?)
        } else {
            Ok(default)
        }
    };

    match kind {
        NodeKind::Instance if present => create_area(ctx, entries, dnode),
        NodeKind::Instance => {
            let tag = dnode.get_string("./area-tag")?;
            ctx.area_destroy(&tag).map_err(inconsistent)
        }
        NodeKind::AreaAddress if present => add_area_address(ctx, entries, dnode, resource),
        NodeKind::AreaAddress => {
            let area = bound_area(entries, dnode)?;
            let net = parse_net(dnode)?;
            ctx.area_address_remove(area, &net).map_err(inconsistent)
        }
        NodeKind::IsType => {
            let area = bound_area(entries, dnode)?;
            let is_type = if present {
                dnode.get_enum::<IsType>(".")?
            } else {
                ctx.area_defaults().is_type
            };
            ctx.area_is_type_set(area, is_type).map_err(inconsistent)
        }
        NodeKind::DynamicHostname => {
            let area = bound_area(entries, dnode)?;
            let enabled = if present {
                dnode.get_bool(".")?
            } else {
                ctx.area_defaults().dynamic_hostname
            };
            ctx.area_dynhostname_set(area, enabled).map_err(inconsistent)
        }
        NodeKind::Attached => {
            let area = bound_area(entries, dnode)?;
            ctx.area_attached_bit_set(area, present).map_err(inconsistent)
        }
        NodeKind::Overload => {
            let area = bound_area(entries, dnode)?;
            ctx.area_overload_bit_set(area, present).map_err(inconsistent)
        }
        NodeKind::MetricStyle => {
            let area = bound_area(entries, dnode)?;
            let style = if present {
                dnode.get_enum::<MetricStyle>(".")?
            } else {
                ctx.area_defaults().metric_style
            };
            ctx.area_metric_style_set(area, style).map_err(inconsistent)
        }
        NodeKind::PurgeOriginator => {
            let area = bound_area(entries, dnode)?;
            ctx.area_mut(area).map_err(inconsistent)?.purge_originator = present;
            Ok(())
        }
        NodeKind::LogAdjacencyChanges => {
            let area = bound_area(entries, dnode)?;
            ctx.area_mut(area).map_err(inconsistent)?.log_adjacency_changes = present;
            Ok(())
        }
        NodeKind::LspMtu => {
            let area = bound_area(entries, dnode)?;
            let mtu = u16_or(ctx.area_defaults().lsp_mtu)?;
            ctx.area_mut(area).map_err(inconsistent)?.lsp_mtu = mtu;
            Ok(())
        }
        NodeKind::LspRefreshInterval(level) => {
            let area = bound_area(entries, dnode)?;
            let interval = u16_or(ctx.area_defaults().lsp_refresh_interval)?;
            ctx.area_lsp_refresh_set(area, level, interval)
                .map_err(inconsistent)
        }
        NodeKind::LspMaxLifetime(level) => {
            let area = bound_area(entries, dnode)?;
            let lifetime = u16_or(ctx.area_defaults().lsp_max_lifetime)?;
            ctx.area_max_lsp_lifetime_set(area, level, lifetime)
                .map_err(inconsistent)
        }
        NodeKind::LspGenerationInterval(level) => {
            let area = bound_area(entries, dnode)?;
            let interval = u16_or(ctx.area_defaults().lsp_gen_interval)?;
            ctx.area_mut(area).map_err(inconsistent)?.lsp_gen_interval[level.index()] = interval;
            Ok(())
        }
        NodeKind::SpfMinimumInterval(level) => {
            let area = bound_area(entries, dnode)?;
            let interval = u16_or(ctx.area_defaults().spf_min_interval)?;
            ctx.area_mut(area).map_err(inconsistent)?.spf_min_interval[level.index()] = interval;
            Ok(())
        }
        NodeKind::SpfBackoff if !present => {
            let area = bound_area(entries, dnode)?;
            ctx.area_spf_backoff_set(area, None).map_err(inconsistent)
        }
        NodeKind::AreaPassword(level) if !present => {
            let area = bound_area(entries, dnode)?;
            ctx.area_passwd_unset(area, level).map_err(inconsistent)
        }
        // Settled once the whole container was applied.
        NodeKind::SpfBackoff | NodeKind::SpfBackoffDelay | NodeKind::AreaPassword(_) => Ok(()),
        _ => Ok(()),
    }
}

fn create_area(
    ctx: &mut RouterContext,
    entries: &mut EntryTable,
    dnode: &DataNode<'_>,
) -> NbResult<()> {
    let tag = dnode.get_string("./area-tag")?;
    if let Err(v) = InvariantChecker::new(ctx).check_area_tag_unique(&tag).into_result() {
        return Err(NbError::inconsistency(v.message));
    }
    let id = ctx.area_create(&tag).map_err(inconsistent)?;
    entries.set(dnode.path(), Entry::Area(id))?;
    Ok(())
}

fn add_area_address(
    ctx: &mut RouterContext,
    entries: &EntryTable,
    dnode: &DataNode<'_>,
    resource: Option<StagedAddress>,
) -> NbResult<()> {
    let area = bound_area(entries, dnode)?;
    let staged = resource.ok_or_else(|| {
        NbError::inconsistency(format!("area address {} was not prepared", dnode.path()))
    })?;

    let duplicate = InvariantChecker::new(ctx).check_duplicate_address(area, &staged.prefix);
    if duplicate.has_only_warnings() {
        for warning in duplicate.warnings() {
            tracing::debug!(address = %staged.prefix, "{}", warning);
        }
        return Ok(());
    }

    ctx.area_address_link(area, staged.system_id, staged.prefix)
        .map_err(inconsistent)?;
    Ok(())
}

// ========== Settlement ==========

pub(crate) fn finish_spf_backoff(
    ctx: &mut RouterContext,
    entries: &EntryTable,
    dnode: &DataNode<'_>,
) -> NbResult<()> {
    let area = bound_area(entries, dnode)?;
    let defaults = SpfBackoff::default();
    let read = |rel: &str, default: u16| -> NbResult<u16> {
        if dnode.exists(rel) {
            Ok(dnode.get_u16(rel)?)
        } else {
            Ok(default)
        }
    };
    let backoff = SpfBackoff {
        init_delay: read("./init-delay", defaults.init_delay)?,
        short_delay: read("./short-delay", defaults.short_delay)?,
        long_delay: read("./long-delay", defaults.long_delay)?,
        hold_down: read("./hold-down", defaults.hold_down)?,
        time_to_learn: read("./time-to-learn", defaults.time_to_learn)?,
    };
    ctx.area_spf_backoff_set(area, Some(backoff))
        .map_err(inconsistent)
}

pub(crate) fn finish_area_password(
    ctx: &mut RouterContext,
    entries: &EntryTable,
    dnode: &DataNode<'_>,
    level: Level,
) -> NbResult<()> {
    let area = bound_area(entries, dnode)?;
    let passwd = read_password(dnode)?;
    ctx.area_passwd_set(area, level, passwd).map_err(inconsistent)
}
