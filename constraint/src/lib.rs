//! isisnb Constraint
//!
//! Cross-cutting rules the configuration handlers enforce while a
//! transaction validates or applies.
//!
//! Responsibilities:
//! - Check new area addresses against the router's system ID
//! - Check circuit reassignment and level compatibility
//! - Check area tag uniqueness and address duplication at apply time
//! - Distinguish hard (reject) vs soft (ignore) outcomes

mod checker;
mod violation;

pub use checker::{check_lsp_timers, check_password, InvariantChecker, MIN_LIFETIME_MARGIN};
pub use violation::{Rule, Violation, ViolationSeverity, Violations};
