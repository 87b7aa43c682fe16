//! Interface-level handlers: `/interface[name]` and its `isis` container.

use isisnb_constraint::InvariantChecker;
use isisnb_core::{IsType, NetworkType};
use isisnb_csm::CircuitState;
use isisnb_registry::Operation;
use isisnb_store::{Circuit, RouterContext};
use isisnb_transaction::{CallbackArgs, NbError, NbResult};
use isisnb_tree::{DataNode, Entry, EntryTable};

use crate::callbacks::{bound_circuit, inconsistent, rejected};
use crate::kind::NodeKind;
use crate::password::read_password;

/// Largest wide metric.
pub const MAX_WIDE_METRIC: u32 = 16_777_215;
/// Largest DIS election priority.
pub const MAX_PRIORITY: u16 = 127;

fn ifname<'a>(dnode: &'a DataNode<'_>) -> NbResult<&'a str> {
    dnode
        .path()
        .key_value("name")
        .ok_or_else(|| NbError::inconsistency(format!("{} is not under an interface", dnode.path())))
}

// ========== Validate ==========

/// Creating the container or changing its area tag: the area must be
/// configured and an attached circuit cannot move.
pub(crate) fn validate_area_tag(ctx: &RouterContext, args: &CallbackArgs<'_>) -> NbResult<()> {
    let rel = match args.op {
        Operation::Create => "./area-tag",
        Operation::Modify => ".",
        Operation::Delete => return Ok(()),
    };
    let tag = args
        .dnode
        .get_string(rel)
        .map_err(|_| NbError::validation("area-tag is mandatory"))?;
    let name = ifname(&args.dnode)?;

    let checker = InvariantChecker::new(ctx);
    let mut violations = checker.check_circuit_area_tag(name, &tag);
    violations.merge(checker.check_area_configured(args.candidate, &tag));
    rejected(violations)
}

pub(crate) fn validate_circuit_type(ctx: &RouterContext, args: &CallbackArgs<'_>) -> NbResult<()> {
    let circuit_type = args
        .dnode
        .get_enum::<IsType>(".")
        .map_err(|e| NbError::validation(e.to_string()))?;
    rejected(InvariantChecker::new(ctx).check_circuit_type(ifname(&args.dnode)?, circuit_type))
}

pub(crate) fn validate_range(kind: NodeKind, args: &CallbackArgs<'_>) -> NbResult<()> {
    match kind {
        NodeKind::Metric(level) => {
            let metric = args.dnode.get_u32(".")?;
            if metric > MAX_WIDE_METRIC {
                return Err(NbError::validation(format!(
                    "{} metric {} exceeds {}",
                    level, metric, MAX_WIDE_METRIC
                )));
            }
        }
        NodeKind::Priority(level) => {
            let priority = args.dnode.get_u16(".")?;
            if priority > MAX_PRIORITY {
                return Err(NbError::validation(format!(
                    "{} priority {} exceeds {}",
                    level, priority, MAX_PRIORITY
                )));
            }
        }
        _ => {}
    }
    Ok(())
}

// ========== Apply ==========

pub(crate) fn apply(
    kind: NodeKind,
    ctx: &mut RouterContext,
    entries: &mut EntryTable,
    args: &CallbackArgs<'_>,
) -> NbResult<()> {
    let dnode = &args.dnode;
    let present = args.op != Operation::Delete;
    // A removed leaf falls back to the circuit default.
    let u16_or = |default: u16| -> NbResult<u16> {
        if present {
            Ok(dnode.get_u16(".")?)
        } else {
            Ok(default)
        }
    };
    let u32_or = |default: u32| -> NbResult<u32> {
        if present {
            Ok(dnode.get_u32(".")?)
        } else {
            Ok(default)
        }
    };

    match kind {
        NodeKind::Interface if present => {
            let name = dnode.get_string("./name")?;
            let id = ctx.interface_configure(&name);
            entries.set(dnode.path(), Entry::Interface(id))?;
            Ok(())
        }
        NodeKind::Interface => {
            let id = match entries.interface(dnode.path()) {
                Some(id) => id,
                None => ctx
                    .interface_lookup(ifname(dnode)?)
                    .map(|i| i.id)
                    .ok_or_else(|| NbError::inconsistency("interface was never configured"))?,
            };
            ctx.interface_unconfigure(id).map_err(inconsistent)
        }
        NodeKind::Circuit if present => create_circuit(ctx, entries, dnode),
        NodeKind::Circuit => {
            let id = bound_circuit(entries, dnode)?;
            ctx.circuit_teardown(id).map_err(inconsistent)
        }
        NodeKind::CircuitType => {
            let id = bound_circuit(entries, dnode)?;
            let circuit_type = if present {
                dnode.get_enum::<IsType>(".")?
            } else {
                ctx.circuit_defaults().circuit_type
            };
            ctx.circuit_is_type_set(id, circuit_type)
                .map_err(inconsistent)
        }
        NodeKind::Ipv4Routing | NodeKind::Ipv6Routing => {
            set_address_families(kind, ctx, entries, args)
        }
        NodeKind::CsnpInterval(level) => {
            let value = u16_or(ctx.circuit_defaults().csnp_interval)?;
            circuit(ctx, entries, dnode)?.csnp_interval[level.index()] = value;
            Ok(())
        }
        NodeKind::PsnpInterval(level) => {
            let value = u16_or(ctx.circuit_defaults().psnp_interval)?;
            circuit(ctx, entries, dnode)?.psnp_interval[level.index()] = value;
            Ok(())
        }
        NodeKind::HelloPadding => {
            let value = if present {
                dnode.get_bool(".")?
            } else {
                ctx.circuit_defaults().hello_padding
            };
            circuit(ctx, entries, dnode)?.hello_padding = value;
            Ok(())
        }
        NodeKind::HelloInterval(level) => {
            let value = u32_or(ctx.circuit_defaults().hello_interval)?;
            circuit(ctx, entries, dnode)?.hello_interval[level.index()] = value;
            Ok(())
        }
        NodeKind::HelloMultiplier(level) => {
            let value = u16_or(ctx.circuit_defaults().hello_multiplier)?;
            circuit(ctx, entries, dnode)?.hello_multiplier[level.index()] = value;
            Ok(())
        }
        NodeKind::Metric(level) => {
            let value = u32_or(ctx.circuit_defaults().metric)?;
            circuit(ctx, entries, dnode)?.metric[level.index()] = value;
            Ok(())
        }
        NodeKind::Priority(level) => {
            let value = u8::try_from(u16_or(u16::from(ctx.circuit_defaults().priority))?)
                .map_err(|e| NbError::inconsistency(e.to_string()))?;
            circuit(ctx, entries, dnode)?.priority[level.index()] = value;
            Ok(())
        }
        NodeKind::NetworkType => {
            let value = if present {
                dnode.get_enum::<NetworkType>(".")?
            } else {
                ctx.circuit_defaults().network_type
            };
            circuit(ctx, entries, dnode)?.network_type = value;
            Ok(())
        }
        NodeKind::Passive => {
            circuit(ctx, entries, dnode)?.passive = present;
            Ok(())
        }
        NodeKind::DisableThreeWayHandshake => {
            circuit(ctx, entries, dnode)?.three_way_handshake = !present;
            Ok(())
        }
        NodeKind::CircuitPassword if !present => {
            let id = bound_circuit(entries, dnode)?;
            ctx.circuit_passwd_set(id, None).map_err(inconsistent)
        }
        _ => Ok(()),
    }
}

fn circuit<'c>(
    ctx: &'c mut RouterContext,
    entries: &EntryTable,
    dnode: &DataNode<'_>,
) -> NbResult<&'c mut Circuit> {
    let id = bound_circuit(entries, dnode)?;
    ctx.circuit_mut(id).map_err(inconsistent)
}

/// Enable the protocol on the interface inside its area.
///
/// The area's creation is ordered first and validation checked the
/// candidate holds it, so a missing area is a broken invariant.
fn create_circuit(
    ctx: &mut RouterContext,
    entries: &mut EntryTable,
    dnode: &DataNode<'_>,
) -> NbResult<()> {
    let tag = dnode.get_string("./area-tag")?;
    let Some(area) = ctx.area_lookup(&tag).map(|a| a.id) else {
        tracing::error!(
            area = %tag,
            "attempt to create circuit for area {} before the area has been created",
            tag
        );
        panic!("circuit created before area {}", tag);
    };

    let iface = match entries.interface(dnode.path()) {
        Some(id) => id,
        None => ctx.interface_configure(ifname(dnode)?),
    };
    let id = ctx.circuit_create(area, iface).map_err(inconsistent)?;
    debug_assert!(matches!(
        ctx.circuit(id).map(|c| c.state),
        Some(CircuitState::Configured | CircuitState::Up)
    ));
    entries.set(dnode.path(), Entry::Circuit(id))?;
    Ok(())
}

/// Recompute the address families from both routing leaves as the
/// candidate leaves them.
fn set_address_families(
    kind: NodeKind,
    ctx: &mut RouterContext,
    entries: &EntryTable,
    args: &CallbackArgs<'_>,
) -> NbResult<()> {
    let dnode = &args.dnode;
    let id = bound_circuit(entries, dnode)?;
    let present = args.op != Operation::Delete;
    let sibling = |name: &str| {
        dnode
            .path()
            .parent()
            .is_some_and(|isis| args.candidate.exists(&isis.child(name)))
    };

    if !present && ctx.circuit(id).and_then(|c| c.area).is_none() {
        return Ok(());
    }
    let (ipv4, ipv6) = match kind {
        NodeKind::Ipv4Routing => (present, sibling("ipv6-routing")),
        _ => (sibling("ipv4-routing"), present),
    };
    ctx.circuit_af_set(id, ipv4, ipv6).map_err(inconsistent)
}

// ========== Settlement ==========

pub(crate) fn finish_password(
    ctx: &mut RouterContext,
    entries: &EntryTable,
    dnode: &DataNode<'_>,
) -> NbResult<()> {
    let id = bound_circuit(entries, dnode)?;
    let passwd = read_password(dnode)?;
    ctx.circuit_passwd_set(id, Some(passwd)).map_err(inconsistent)
}
