//! Scenario definition and builder.

use std::path::{Path, PathBuf};

use isisnb_daemon::{DaemonConfig, LogConfig};

use crate::assertion::{Assertion, AssertionBuilder};
use crate::error::{ScenarioError, ScenarioResult};
use crate::loader::Operations;
use crate::runner::Runner;

/// A step in a scenario with its assertion.
#[derive(Debug)]
pub struct Step {
    /// Step name (matches `--# name` in the script).
    pub name: String,
    /// Assertion to verify the result.
    pub assertion: Assertion,
}

/// A complete test scenario.
pub struct Scenario {
    /// Scenario name (for reporting).
    name: String,
    /// Path to the script file.
    operations_path: Option<PathBuf>,
    /// Parsed script (if loaded inline).
    operations: Option<Operations>,
    /// Daemon configuration.
    config: DaemonConfig,
    /// Steps with assertions.
    steps: Vec<Step>,
    /// Base path for resolving relative paths.
    base_path: PathBuf,
}

impl Scenario {
    /// Create a new scenario with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            operations_path: None,
            operations: None,
            config: DaemonConfig::default()
                .with_log(LogConfig::default().with_directive("warn")),
            steps: Vec::new(),
            base_path: scenarios_root(),
        }
    }

    /// Set the base path for resolving relative paths.
    pub fn base_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.base_path = path.into();
        self
    }

    /// Set the script path (relative to `scenarios/`).
    pub fn operations(mut self, path: impl Into<PathBuf>) -> Self {
        self.operations_path = Some(path.into());
        self
    }

    /// Load the script from a string.
    pub fn operations_source(mut self, source: &str) -> ScenarioResult<Self> {
        self.operations = Some(Operations::parse(source)?);
        Ok(self)
    }

    /// Start the daemon with another configuration.
    pub fn config(mut self, config: DaemonConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a step with an assertion.
    ///
    /// The step name must match a `--# name` marker in the script.
    pub fn step<F>(mut self, name: impl Into<String>, assertion_fn: F) -> Self
    where
        F: FnOnce(AssertionBuilder) -> AssertionBuilder,
    {
        let name = name.into();
        let assertion = assertion_fn(AssertionBuilder::new()).build();
        self.steps.push(Step { name, assertion });
        self
    }

    /// Run the scenario and return the result.
    pub fn run(&self) -> ScenarioResult<()> {
        let runner = Runner::new(self)?;
        runner.run()
    }

    /// Get the scenario name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the daemon configuration.
    pub fn daemon_config(&self) -> &DaemonConfig {
        &self.config
    }

    /// Get the script, loading from file if needed.
    pub fn load_operations(&self) -> ScenarioResult<Operations> {
        if let Some(ref ops) = self.operations {
            return Ok(ops.clone());
        }
        match &self.operations_path {
            Some(p) => Operations::load(&self.resolve_path(p)),
            None => Err(ScenarioError::missing_operations(&self.name)),
        }
    }

    /// Get the steps.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Resolve a path relative to the base path.
    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_path.join(path)
        }
    }
}

/// The `scenarios/` directory of this crate.
fn scenarios_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_builder() {
        let scenario = Scenario::new("test")
            .operations("single_area.isis")
            .step("create", |a| a.committed())
            .step("query", |a| a.areas(1));

        assert_eq!(scenario.name(), "test");
        assert_eq!(scenario.steps().len(), 2);
        assert_eq!(scenario.daemon_config().log.directive, "warn");
    }

    #[test]
    fn test_missing_script() {
        let scenario = Scenario::new("nothing");

        let result = scenario.load_operations();

        assert!(matches!(result, Err(ScenarioError::MissingOperations { .. })));
    }
}
