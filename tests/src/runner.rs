//! Scenario runner.

use std::fmt;

use isisnb_daemon::{Daemon, DaemonError};
use isisnb_store::RoutingEvent;
use isisnb_transaction::{CommitReport, TransactionError};

use crate::error::{ScenarioError, ScenarioResult};
use crate::loader::{Command, Operations};
use crate::scenario::Scenario;

/// What happened to a step's configuration edits.
#[derive(Debug, Clone, Default)]
pub enum CommitOutcome {
    /// The step edited nothing.
    #[default]
    Skipped,
    Committed(CommitReport),
    /// Rejected; the running configuration is unchanged.
    Failed(String),
    /// Applied, but some nodes reported inconsistencies.
    ApplyFailed(String),
}

impl fmt::Display for CommitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommitOutcome::Skipped => write!(f, "no commit"),
            CommitOutcome::Committed(report) => {
                write!(f, "committed transaction {}", report.txn_id)
            }
            CommitOutcome::Failed(msg) => write!(f, "rejected: {}", msg),
            CommitOutcome::ApplyFailed(msg) => write!(f, "applied with errors: {}", msg),
        }
    }
}

/// Everything a step produced.
#[derive(Debug, Clone, Default)]
pub struct StepOutcome {
    pub commit: CommitOutcome,
    /// The first interface event that failed.
    pub event_error: Option<String>,
    /// Routing triggers queued by the step.
    pub routing_events: Vec<RoutingEvent>,
}

/// Runs a scenario against a fresh daemon.
pub struct Runner<'s> {
    scenario: &'s Scenario,
    operations: Operations,
}

impl<'s> Runner<'s> {
    /// Create a new runner for a scenario.
    pub fn new(scenario: &'s Scenario) -> ScenarioResult<Self> {
        let operations = scenario.load_operations()?;
        Ok(Self {
            scenario,
            operations,
        })
    }

    /// Run the scenario.
    pub fn run(&self) -> ScenarioResult<()> {
        let mut daemon = Daemon::new(self.scenario.daemon_config().clone())?;
        daemon.start()?;

        for step in self.scenario.steps() {
            let commands = self
                .operations
                .get_step(&step.name)
                .ok_or_else(|| ScenarioError::step_not_found(&step.name))?;

            let outcome = execute(&mut daemon, commands);
            step.assertion.verify(&step.name, &outcome, &daemon)?;
        }

        daemon.shutdown();
        Ok(())
    }
}

/// Commit the step's edits as one transaction, then replay its
/// interface events in order.
pub(crate) fn execute(daemon: &mut Daemon, commands: &[Command]) -> StepOutcome {
    let mut outcome = StepOutcome::default();

    if commands.iter().any(Command::is_edit) {
        outcome.commit = commit(daemon, commands);
    }

    for command in commands {
        let result = match command {
            Command::IfUp(name) => daemon.interface_up(name),
            Command::IfDown(name) => daemon.interface_down(name),
            _ => continue,
        };
        if let Err(e) = result {
            outcome.event_error = Some(e.to_string());
            break;
        }
    }

    outcome.routing_events = daemon.take_routing_events();
    outcome
}

fn commit(daemon: &mut Daemon, commands: &[Command]) -> CommitOutcome {
    let mut candidate = daemon.candidate();
    for command in commands {
        match command {
            Command::Set {
                path,
                value: Some(value),
            } => candidate.set(path, value.clone()),
            Command::Set { path, value: None } => candidate.create(path),
            Command::Delete { path } => {
                if let Err(e) = candidate.delete(path) {
                    return CommitOutcome::Failed(e.to_string());
                }
            }
            _ => {}
        }
    }

    match daemon.commit(candidate) {
        Ok(report) => CommitOutcome::Committed(report),
        Err(e @ DaemonError::Transaction(TransactionError::Apply { .. })) => {
            CommitOutcome::ApplyFailed(e.to_string())
        }
        Err(e) => CommitOutcome::Failed(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isisnb_daemon::DaemonConfig;

    #[test]
    fn test_execute_commits_before_events() {
        // GIVEN
        let mut daemon = Daemon::new(DaemonConfig::default()).unwrap();
        daemon.start().unwrap();
        let ops = Operations::parse(
            r#"
--# enable
if-up eth0
set /isis/instance[area-tag='a']
set /interface[name='eth0']/isis/area-tag a
"#,
        )
        .unwrap();

        // WHEN
        let outcome = execute(&mut daemon, ops.get_step("enable").unwrap());

        // THEN
        assert!(matches!(outcome.commit, CommitOutcome::Committed(_)));
        assert!(outcome.event_error.is_none());
        assert_eq!(
            daemon.circuit("eth0").map(|c| c.state),
            Some(isisnb_csm::CircuitState::Up)
        );
    }

    #[test]
    fn test_deleting_missing_node_fails_step() {
        let mut daemon = Daemon::new(DaemonConfig::default()).unwrap();
        daemon.start().unwrap();
        let ops = Operations::parse("--# drop\ndelete /isis/instance[area-tag='x']\n").unwrap();

        let outcome = execute(&mut daemon, ops.get_step("drop").unwrap());

        assert!(matches!(outcome.commit, CommitOutcome::Failed(_)));
    }
}
