//! The schema table: every configuration path the daemon handles.

use isisnb_core::Level;
use isisnb_registry::{Registry, RegistryBuilder, RegistryError, DEFAULT_PRIORITY};

use crate::kind::NodeKind;

/// Area creation runs before everything that references an area.
pub const INSTANCE_PRIORITY: u32 = DEFAULT_PRIORITY - 1;

const INSTANCE: &str = "/isis/instance";
const CIRCUIT: &str = "/interface/isis";

/// Build the registry of all handled schema nodes.
///
/// Registration order is rendering order.
pub fn build_registry() -> Result<Registry<NodeKind>, RegistryError> {
    let mut b = RegistryBuilder::new();

    // ========== Area ==========
    b.add_node(INSTANCE, NodeKind::Instance)
        .create()
        .delete()
        .cli_show()
        .priority(INSTANCE_PRIORITY)
        .done()?;
    b.add_node(format!("{INSTANCE}/is-type"), NodeKind::IsType)
        .modify()
        .delete()
        .cli_show()
        .done()?;
    b.add_node(format!("{INSTANCE}/area-address"), NodeKind::AreaAddress)
        .create()
        .delete()
        .cli_show()
        .done()?;
    b.add_node(format!("{INSTANCE}/dynamic-hostname"), NodeKind::DynamicHostname)
        .modify()
        .delete()
        .cli_show()
        .done()?;
    for (name, kind) in [
        ("attached", NodeKind::Attached),
        ("overload", NodeKind::Overload),
    ] {
        b.add_node(format!("{INSTANCE}/{name}"), kind)
            .create()
            .delete()
            .cli_show()
            .done()?;
    }
    b.add_node(format!("{INSTANCE}/metric-style"), NodeKind::MetricStyle)
        .modify()
        .delete()
        .cli_show()
        .done()?;
    for (name, kind) in [
        ("purge-originator", NodeKind::PurgeOriginator),
        ("log-adjacency-changes", NodeKind::LogAdjacencyChanges),
    ] {
        b.add_node(format!("{INSTANCE}/{name}"), kind)
            .create()
            .delete()
            .cli_show()
            .done()?;
    }

    b.add_node(format!("{INSTANCE}/lsp/mtu"), NodeKind::LspMtu)
        .modify()
        .delete()
        .cli_show()
        .done()?;
    b.add_node(format!("{INSTANCE}/lsp/refresh-interval"), NodeKind::LspRefreshIntervals)
        .cli_show()
        .done()?;
    for level in [Level::L1, Level::L2] {
        b.add_node(
            format!("{INSTANCE}/lsp/refresh-interval/{level}"),
            NodeKind::LspRefreshInterval(level),
        )
        .modify()
        .delete()
        .done()?;
    }
    for level in [Level::L1, Level::L2] {
        b.add_node(
            format!("{INSTANCE}/lsp/maximum-lifetime/{level}"),
            NodeKind::LspMaxLifetime(level),
        )
        .modify()
        .delete()
        .cli_show()
        .done()?;
    }
    b.add_node(
        format!("{INSTANCE}/lsp/generation-interval"),
        NodeKind::LspGenerationIntervals,
    )
    .cli_show()
    .done()?;
    for level in [Level::L1, Level::L2] {
        b.add_node(
            format!("{INSTANCE}/lsp/generation-interval/{level}"),
            NodeKind::LspGenerationInterval(level),
        )
        .modify()
        .delete()
        .done()?;
    }

    for level in [Level::L1, Level::L2] {
        b.add_node(
            format!("{INSTANCE}/spf/minimum-interval/{level}"),
            NodeKind::SpfMinimumInterval(level),
        )
        .modify()
        .delete()
        .cli_show()
        .done()?;
    }
    b.add_node(format!("{INSTANCE}/spf/ietf-backoff-delay"), NodeKind::SpfBackoff)
        .create()
        .delete()
        .apply_finish()
        .cli_show()
        .done()?;
    for leaf in ["init-delay", "short-delay", "long-delay", "hold-down", "time-to-learn"] {
        b.add_node(
            format!("{INSTANCE}/spf/ietf-backoff-delay/{leaf}"),
            NodeKind::SpfBackoffDelay,
        )
        .modify()
        .delete()
        .done()?;
    }

    for (container, level) in [("area-password", Level::L1), ("domain-password", Level::L2)] {
        let base = format!("{INSTANCE}/{container}");
        b.add_node(base.clone(), NodeKind::AreaPassword(level))
            .create()
            .delete()
            .apply_finish()
            .cli_show()
            .done()?;
        b.add_node(format!("{base}/password"), NodeKind::PasswordSecret)
            .modify()
            .delete()
            .done()?;
        for leaf in ["password-type", "authenticate-snp"] {
            b.add_node(format!("{base}/{leaf}"), NodeKind::PasswordOption)
                .modify()
                .delete()
                .done()?;
        }
    }

    // ========== Interface ==========
    b.add_node("/interface", NodeKind::Interface)
        .create()
        .delete()
        .cli_show()
        .done()?;
    b.add_node(CIRCUIT, NodeKind::Circuit).create().delete().done()?;
    b.add_node(format!("{CIRCUIT}/area-tag"), NodeKind::AreaTag)
        .modify()
        .delete()
        .done()?;
    for (name, kind) in [
        ("ipv4-routing", NodeKind::Ipv4Routing),
        ("ipv6-routing", NodeKind::Ipv6Routing),
    ] {
        b.add_node(format!("{CIRCUIT}/{name}"), kind)
            .create()
            .delete()
            .cli_show()
            .done()?;
    }
    b.add_node(format!("{CIRCUIT}/circuit-type"), NodeKind::CircuitType)
        .modify()
        .delete()
        .cli_show()
        .done()?;

    for level in [Level::L1, Level::L2] {
        for (leaf, kind) in [
            ("csnp-interval", NodeKind::CsnpInterval(level)),
            ("psnp-interval", NodeKind::PsnpInterval(level)),
            ("hello/interval", NodeKind::HelloInterval(level)),
            ("hello/multiplier", NodeKind::HelloMultiplier(level)),
            ("metric", NodeKind::Metric(level)),
            ("priority", NodeKind::Priority(level)),
        ] {
            b.add_node(format!("{CIRCUIT}/{leaf}/{level}"), kind)
                .modify()
                .delete()
                .cli_show()
                .done()?;
        }
    }
    b.add_node(format!("{CIRCUIT}/hello/padding"), NodeKind::HelloPadding)
        .modify()
        .delete()
        .cli_show()
        .done()?;
    b.add_node(format!("{CIRCUIT}/network-type"), NodeKind::NetworkType)
        .modify()
       .delete()
        .delete()
        .cli_show()
        .done()?;
    for (name, kind) in [
        ("passive", NodeKind::Passive),
        ("disable-three-way-handshake", NodeKind::DisableThreeWayHandshake),
    ] {
        b.add_node(format!("{CIRCUIT}/{name}"), kind)
            .create()
            .delete()
            .cli_show()
            .done()?;
    }

    b.add_node(format!("{CIRCUIT}/password"), NodeKind::CircuitPassword)
        .create()
        .delete()
        .apply_finish()
        .cli_show()
        .done()?;
    b.add_node(format!("{CIRCUIT}/password/password"), NodeKind::PasswordSecret)
        .modify()
        .delete()
        .done()?;
    b.add_node(format!("{CIRCUIT}/password/password-type"), NodeKind::PasswordOption)
        .modify()
        .delete()
        .done()?;

    b.build()
}
