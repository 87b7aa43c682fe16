//! The daemon facade.

use isisnb_core::{CircuitId, SystemId};
use isisnb_northbound::{build_registry, show_running, NodeKind};
use isisnb_registry::Registry;
use isisnb_store::{Area, Circuit, RouterContext, RoutingEvent};
use isisnb_transaction::{CommitReport, TransactionError, TransactionManager};
use isisnb_tree::{ConfigTree, EntryTable};

use crate::config::DaemonConfig;
use crate::error::{DaemonError, DaemonResult};
use crate::logging::init_logging;

/// A protocol daemon with its running configuration.
pub struct Daemon {
    config: DaemonConfig,
    registry: Registry<NodeKind>,
    ctx: RouterContext,
    entries: EntryTable,
    running: ConfigTree,
    next_txn_id: u64,
    started: bool,
}

impl Daemon {
    pub fn new(config: DaemonConfig) -> DaemonResult<Self> {
        let registry = build_registry()?;
        let ctx = RouterContext::new(
            config.area_defaults.clone(),
            config.circuit_defaults.clone(),
        )
        .with_debug_events(config.debug_events);
        Ok(Self {
            config,
            registry,
            ctx,
            entries: EntryTable::new(),
            running: ConfigTree::new(),
            next_txn_id: 1,
            started: false,
        })
    }

    /// Install logging and accept configuration.
    pub fn start(&mut self) -> DaemonResult<()> {
        init_logging(&self.config.log)?;
        self.started = true;
        tracing::info!(schema_nodes = self.registry.len(), "daemon started");
        Ok(())
    }

    /// Destroy every area and forget the running configuration.
    pub fn shutdown(&mut self) {
        let tags: Vec<String> = self.ctx.areas().map(|a| a.tag.clone()).collect();
        for tag in &tags {
            if let Err(e) = self.ctx.area_destroy(tag) {
                tracing::error!(area = %tag, error = %e, "failed to destroy area");
            }
        }
        self.entries = EntryTable::new();
        self.running = ConfigTree::new();
        self.started = false;
        tracing::info!(areas = tags.len(), "daemon stopped");
    }

    pub fn is_running(&self) -> bool {
        self.started
    }

    pub fn config(&self) -> &DaemonConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry<NodeKind> {
        &self.registry
    }

    // ========== Configuration ==========

    pub fn running(&self) -> &ConfigTree {
        &self.running
    }

    /// A copy of the running configuration to edit.
    pub fn candidate(&self) -> ConfigTree {
        self.running.clone()
    }

    /// Commit a candidate configuration.
    ///
    /// Once apply started the candidate becomes the running
    /// configuration, even if some nodes reported inconsistencies.
    pub fn commit(&mut self, candidate: ConfigTree) -> DaemonResult<CommitReport> {
        if !self.started {
            return Err(DaemonError::NotRunning);
        }
        let mut manager =
            TransactionManager::new(&self.registry).with_first_txn_id(self.next_txn_id);
        let result = manager.commit(&mut self.ctx, &mut self.entries, &self.running, &candidate);
        self.next_txn_id = manager.next_txn_id();

        match result {
            Ok(report) => {
                self.running = candidate;
                Ok(report)
            }
            Err(e @ TransactionError::Apply { .. }) => {
                tracing::error!(error = %e, "running configuration diverged from runtime state");
                self.running = candidate;
                Err(e.into())
            }
            Err(e) => Err(e.into()),
        }
    }

    // ========== Network events ==========

    pub fn interface_up(&mut self, name: &str) -> DaemonResult<Option<CircuitId>> {
        Ok(self.ctx.interface_up(name)?)
    }

    pub fn interface_down(&mut self, name: &str) -> DaemonResult<Option<CircuitId>> {
        Ok(self.ctx.interface_down(name)?)
    }

    // ========== Status ==========

    pub fn context(&self) -> &RouterContext {
        &self.ctx
    }

    /// The router's system ID, once an area address set it.
    pub fn system_id(&self) -> Option<SystemId> {
        self.ctx.sysid_set().then(|| self.ctx.system_id())
    }

    pub fn area(&self, tag: &str) -> Option<&Area> {
        self.ctx.area_lookup(tag)
    }

    pub fn areas(&self) -> impl Iterator<Item = &Area> {
        self.ctx.areas()
    }

    pub fn circuit(&self, ifname: &str) -> Option<&Circuit> {
        self.ctx.circuit_by_interface(ifname)
    }

    pub fn show_running(&self) -> String {
        show_running(&self.running, &self.registry)
    }

    /// Drain the routing triggers queued since the last call.
    pub fn take_routing_events(&mut self) -> Vec<RoutingEvent> {
        self.ctx.take_routing_events()
    }
}
