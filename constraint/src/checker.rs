//! Invariant checking.

use isisnb_core::{AreaAddress, AreaId, IsType, NetAddress, MAX_PASSWORD_LEN};
use isisnb_csm::CircuitState;
use isisnb_store::RouterContext;
use isisnb_tree::{ConfigTree, DataPath};

use crate::violation::{Rule, Violation, Violations};

/// How far below the maximum lifetime the refresh interval must stay, in seconds.
pub const MIN_LIFETIME_MARGIN: u16 = 300;

/// Checks configuration changes against the committed runtime state.
pub struct InvariantChecker<'c> {
    ctx: &'c RouterContext,
}

impl<'c> InvariantChecker<'c> {
    pub fn new(ctx: &'c RouterContext) -> Self {
        Self { ctx }
    }

    /// A new area address must end in a zero NSEL and carry the
    /// router's system ID once one is established.
    pub fn check_area_address(&self, net: &NetAddress) -> Violations {
        let mut violations = Violations::new();

        if net.nsel() != 0 {
            violations.push(Violation::error(
                Rule::NselNonZero,
                "nsel byte (last byte) in area address must be 0",
            ));
        }
        if self.ctx.sysid_set() && self.ctx.system_id() != net.system_id() {
            violations.push(Violation::error(
                Rule::SystemIdMismatch,
                "System ID must not change when defining additional area addresses",
            ));
        }

        violations
    }

    /// Area tags are unique. Only authoritative at apply time.
    pub fn check_area_tag_unique(&self, tag: &str) -> Violations {
        match self.ctx.area_lookup(tag) {
            Some(_) => Violation::error(Rule::AreaTagExists, format!("area {} already exists", tag))
                .into(),
            None => Violations::new(),
        }
    }

    /// Re-adding a prefix the area already lists is accepted as a no-op.
    pub fn check_duplicate_address(&self, area: AreaId, prefix: &AreaAddress) -> Violations {
        match self.ctx.area(area) {
            Some(a) if a.has_address(prefix) => Violation::warning(
                Rule::DuplicateAreaAddress,
                format!("area {} already has address {}", a.tag, prefix),
            )
            .into(),
            _ => Violations::new(),
        }
    }

    /// A circuit attached to one area cannot move to another.
    pub fn check_circuit_area_tag(&self, ifname: &str, tag: &str) -> Violations {
        let current = self
            .ctx
            .circuit_by_interface(ifname)
            .and_then(|c| c.area)
            .and_then(|a| self.ctx.area(a));
        match current {
            Some(area) if area.tag != tag => Violation::error(
                Rule::CircuitReassignment,
                format!("ISIS circuit is already defined on {}", area.tag),
            )
            .into(),
            _ => Violations::new(),
        }
    }

    /// An operational circuit in a single-level area must keep that level.
    pub fn check_circuit_type(&self, ifname: &str, circuit_type: IsType) -> Violations {
        let Some(circuit) = self.ctx.circuit_by_interface(ifname) else {
            return Violations::new();
        };
        if circuit.state != CircuitState::Up {
            return Violations::new();
        }
        match circuit.area.and_then(|a| self.ctx.area(a)) {
            Some(area) if area.is_type != IsType::Level1And2 && area.is_type != circuit_type => {
                Violation::error(
                    Rule::CircuitLevelMismatch,
                    format!("Invalid circuit level for area {}", area.tag),
                )
                .into()
            }
            _ => Violations::new(),
        }
    }

    /// The area an interface names must be part of the candidate
    /// configuration, so its creation is ordered before the circuit's.
    pub fn check_area_configured(&self, candidate: &ConfigTree, tag: &str) -> Violations {
        let instance = DataPath::root()
            .child("isis")
            .entry("instance", "area-tag", tag);
        if candidate.exists(&instance) {
            return Violations::new();
        }
        Violation::error(
            Rule::UnknownArea,
            format!("area {} is not configured", tag),
        )
        .into()
    }
}

/// The refresh interval must stay at least [`MIN_LIFETIME_MARGIN`]
/// seconds below the maximum lifetime.
pub fn check_lsp_timers(refresh: u16, max_lifetime: u16) -> Violations {
    if u32::from(refresh) + u32::from(MIN_LIFETIME_MARGIN) <= u32::from(max_lifetime) {
        return Violations::new();
    }
    Violation::error(
        Rule::LspLifetime,
        format!(
            "LSP refresh interval {}s must be at least {}s below the maximum lifetime {}s",
            refresh, MIN_LIFETIME_MARGIN, max_lifetime
        ),
    )
    .into()
}

/// Passwords are 1 to [`MAX_PASSWORD_LEN`] bytes long.
pub fn check_password(secret: &str) -> Violations {
    if (1..=MAX_PASSWORD_LEN).contains(&secret.len()) {
        return Violations::new();
    }
    Violation::error(
        Rule::PasswordLength,
        format!("password must be 1 to {} characters long", MAX_PASSWORD_LEN),
    )
    .into()
}
