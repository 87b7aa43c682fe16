//! Log subscriber installation.

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::{DaemonError, DaemonResult};

/// Install the global log subscriber.
///
/// `RUST_LOG` overrides the configured directive. Returns `false` when
/// a subscriber was already installed.
pub fn init_logging(config: &LogConfig) -> DaemonResult<bool> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.directive))
        .map_err(|e| DaemonError::logging(e.to_string()))?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.with_target)
        .try_init()
        .is_ok();
    Ok(installed)
}
