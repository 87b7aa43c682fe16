//! isisnb Daemon
//!
//! The protocol daemon as seen from configuration management.
//!
//! Responsibilities:
//! - Hold the running configuration and the runtime state it produced
//! - Commit candidate configurations as transactions
//! - Feed interface events into the circuit state machine
//! - Answer status queries and render the running configuration

mod config;
mod daemon;
mod error;
mod logging;

pub use config::{DaemonConfig, LogConfig};
pub use daemon::Daemon;
pub use error::{DaemonError, DaemonResult};
pub use logging::init_logging;
