//! isisnb Integration Test Framework
//!
//! Drives a daemon through scripted configuration steps and checks the
//! runtime state after each one.
//!
//! # Structure
//!
//! - **scripts** - configuration edits and interface events grouped
//!   under `--# step_name` markers, inline or from `scenarios/*.isis`
//! - **scenarios** - Rust: script + per-step assertions
//!
//! # Example
//!
//! ```ignore
//! use isisnb_tests::prelude::*;
//!
//! Scenario::new("single_area")
//!     .operations_source(r#"
//! --# create_area
//! set /isis/instance[area-tag='core-1']
//! set /isis/instance[area-tag='core-1']/area-address[.='49.0001.1921.6800.1001.00']
//! "#)
//!     .unwrap()
//!     .step("create_area", |a| a.committed().areas(1).system_id("1921.6800.1001"))
//!     .run()
//!     .unwrap();
//! ```

mod error;
mod loader;
mod runner;
mod scenario;

pub use assertion::{Assertion, AssertionBuilder};
pub use error::{ScenarioError, ScenarioResult};
pub use loader::{Command, Operations};
pub use runner::StepOutcome;
pub use scenario::{Scenario, Step};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::assertion::{Assertion, AssertionBuilder};
    pub use crate::error::{ScenarioError, ScenarioResult};
    pub use crate::scenario::Scenario;
    pub use isisnb_csm::CircuitState;
    pub use isisnb_daemon::{DaemonConfig, LogConfig};
}
