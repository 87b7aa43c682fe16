//! Running-configuration rendering.
//!
//! Areas and interfaces render as blocks. Inside a block every
//! schema node with a renderer contributes its lines in registration
//! order.

use isisnb_core::{Level, SnpAuth};
use isisnb_registry::Registry;
use isisnb_store::SpfBackoff;
use isisnb_tree::{ConfigTree, DataNode, DataPath};

use crate::kind::NodeKind;
use crate::password::read_password;

/// Render a configuration tree as configuration text.
pub fn show_running(tree: &ConfigTree, registry: &Registry<NodeKind>) -> String {
    let mut out = String::new();
    let root = DataPath::root();

    let blocks = registry
        .iter()
        .filter(|n| matches!(n.kind, NodeKind::Instance | NodeKind::Interface));
    for block in blocks {
        let prefix = format!("{}/", block.path);
        for path in matching(tree, &root, &block.path) {
            push_lines(&mut out, block.kind, &DataNode::new(tree, path.clone()));

            let members = registry
                .iter()
                .filter(|n| n.callbacks.cli_show && n.path.starts_with(&prefix));
            for node in members {
                for member in matching(tree, path, &node.path) {
                    push_lines(&mut out, node.kind, &DataNode::new(tree, member.clone()));
                }
            }
            out.push_str("!\n");
        }
    }
    out
}

fn matching<'t>(
    tree: &'t ConfigTree,
    within: &'t DataPath,
    schema_path: &'t str,
) -> impl Iterator<Item = &'t DataPath> + 't {
    tree.subtree(within)
        .map(|(p, _)| p)
        .filter(move |p| p.schema_path() == schema_path)
}

fn push_lines(out: &mut String, kind: NodeKind, dnode: &DataNode<'_>) {
    for line in cli_show(kind, dnode) {
        out.push_str(&line);
        out.push('\n');
    }
}

fn cli_show(kind: NodeKind, dnode: &DataNode<'_>) -> Vec<String> {
    let value = dnode.value().map(ToString::to_string).unwrap_or_default();
    let key = |name: &str| dnode.path().key_value(name).unwrap_or_default().to_string();
    let area_tag = || dnode.get_string("../area-tag").unwrap_or_default();

    let line = match kind {
        NodeKind::Instance => format!("router isis {}", key("area-tag")),
        NodeKind::Interface => format!("interface {}", key("name")),

        NodeKind::IsType => format!(" is-type {}", value),
        NodeKind::AreaAddress => format!(" net {}", value),
        NodeKind::DynamicHostname => match dnode.get_bool(".") {
            Ok(false) => " no hostname dynamic".to_string(),
            _ => return Vec::new(),
        },
        NodeKind::Attached => " set-attached-bit".to_string(),
        NodeKind::Overload => " set-overload-bit".to_string(),
        NodeKind::MetricStyle => format!(" metric-style {}", value),
        NodeKind::PurgeOriginator => " purge-originator".to_string(),
        NodeKind::LogAdjacencyChanges => " log-adjacency-changes".to_string(),
        NodeKind::LspMtu => format!(" lsp-mtu {}", value),
        NodeKind::LspRefreshIntervals => return per_level(dnode, " lsp-refresh-interval"),
        NodeKind::LspGenerationIntervals => return per_level(dnode, " lsp-gen-interval"),
        NodeKind::LspMaxLifetime(level) => format!(" max-lsp-lifetime {} {}", level, value),
        NodeKind::SpfMinimumInterval(level) => format!(" spf-interval {} {}", level, value),
        NodeKind::SpfBackoff => spf_delay(dnode),
        NodeKind::AreaPassword(level) => {
            let command = match level {
                Level::L1 => " area-password",
                Level::L2 => " domain-password",
            };
            return password(dnode, command);
        }

        NodeKind::Ipv4Routing => format!(" ip router isis {}", area_tag()),
        NodeKind::Ipv6Routing => format!(" ipv6 router isis {}", area_tag()),
        NodeKind::CircuitType => format!(" isis circuit-type {}", value),
        NodeKind::CsnpInterval(level) => format!(" isis csnp-interval {} {}", value, level),
        NodeKind::PsnpInterval(level) => format!(" isis psnp-interval {} {}", value, level),
        NodeKind::HelloInterval(level) => format!(" isis hello-interval {} {}", value, level),
        NodeKind::HelloMultiplier(level) => {
            format!(" isis hello-multiplier {} {}", value, level)
        }
        NodeKind::Metric(level) => format!(" isis metric {} {}", value, level),
        NodeKind::Priority(level) => format!(" isis priority {} {}", value, level),
        NodeKind::HelloPadding => match dnode.get_bool(".") {
            Ok(false) => " no isis hello padding".to_string(),
            _ => return Vec::new(),
        },
        NodeKind::NetworkType if value == "point-to-point" => {
            " isis network point-to-point".to_string()
        }
        NodeKind::Passive => " isis passive".to_string(),
        NodeKind::DisableThreeWayHandshake => " no isis three-way-handshake".to_string(),
        NodeKind::CircuitPassword => return password(dnode, " isis password"),
        _ => return Vec::new(),
    };
    vec![line]
}

/// One line when both levels agree, one line per level otherwise.
fn per_level(dnode: &DataNode<'_>, command: &str) -> Vec<String> {
    let l1 = dnode.get_u16("./level-1").ok();
    let l2 = dnode.get_u16("./level-2").ok();
    match (l1, l2) {
        (Some(a), Some(b)) if a == b => vec![format!("{} {}", command, a)],
        _ => [(Level::L1, l1), (Level::L2, l2)]
            .into_iter()
            .filter_map(|(level, v)| v.map(|v| format!("{} {} {}", command, level, v)))
            .collect(),
    }
}

fn spf_delay(dnode: &DataNode<'_>) -> String {
    let defaults = SpfBackoff::default();
    let read = |rel: &str, default: u16| dnode.get_u16(rel).unwrap_or(default);
    format!(
        " spf-delay-ietf init-delay {} short-delay {} long-delay {} holddown {} time-to-learn {}",
        read("./init-delay", defaults.init_delay),
        read("./short-delay", defaults.short_delay),
        read("./long-delay", defaults.long_delay),
        read("./hold-down", defaults.hold_down),
        read("./time-to-learn", defaults.time_to_learn),
    )
}

fn password(dnode: &DataNode<'_>, command: &str) -> Vec<String> {
    let Ok(passwd) = read_password(dnode) else {
        return Vec::new();
    };
    let mut line = format!("{} {} {}", command, passwd.kind, passwd.secret);
    if passwd.snp_auth != SnpAuth::None {
        line.push_str(&format!(" authenticate snp {}", passwd.snp_auth));
    }
    vec![line]
}
