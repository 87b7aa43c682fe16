//! Daemon configuration.

use isisnb_store::{AreaDefaults, CircuitDefaults};

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub directive: String,
    /// Print the event target with every line.
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            directive: "info".to_string(),
            with_target: false,
        }
    }
}

impl LogConfig {
    pub fn with_directive(mut self, directive: impl Into<String>) -> Self {
        self.directive = directive.into();
        self
    }

    pub fn with_target(mut self, enabled: bool) -> Self {
        self.with_target = enabled;
        self
    }
}

/// Everything a daemon is started with.
#[derive(Debug, Clone, Default)]
pub struct DaemonConfig {
    pub log: LogConfig,
    /// Applied to every newly created area.
    pub area_defaults: AreaDefaults,
    /// Applied to every newly created circuit.
    pub circuit_defaults: CircuitDefaults,
    /// Log every routing trigger as it is queued.
    pub debug_events: bool,
}

impl DaemonConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_log(mut self, log: LogConfig) -> Self {
        self.log = log;
        self
    }

    pub fn with_area_defaults(mut self, defaults: AreaDefaults) -> Self {
        self.area_defaults = defaults;
        self
    }

    pub fn with_circuit_defaults(mut self, defaults: CircuitDefaults) -> Self {
        self.circuit_defaults = defaults;
        self
    }

    pub fn with_debug_events(mut self, enabled: bool) -> Self {
        self.debug_events = enabled;
        self
    }
}
