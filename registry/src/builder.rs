//! RegistryBuilder for constructing an immutable Registry.

use std::collections::HashSet;

use thiserror::Error;

use crate::registry::Registry;
use crate::types::{CallbackSet, SchemaNode, DEFAULT_PRIORITY};

/// Errors that can occur during registry construction.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Duplicate schema path: {0}")]
    DuplicatePath(String),

    #[error("Invalid schema path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("Schema node {0} registers no callbacks")]
    NoCallbacks(String),

    #[error("Schema node {0} registers both create and modify")]
    CreateAndModify(String),
}

/// Builder for constructing an immutable Registry.
#[derive(Debug)]
pub struct RegistryBuilder<K> {
    /// Nodes being built.
    nodes: Vec<SchemaNode<K>>,
    /// Paths already registered.
    paths: HashSet<String>,
}

impl<K> Default for RegistryBuilder<K> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            paths: HashSet::new(),
        }
    }
}

impl<K> RegistryBuilder<K> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a schema node.
    pub fn add_node(&mut self, path: impl Into<String>, kind: K) -> NodeBuilder<'_, K> {
        NodeBuilder {
            builder: self,
            path: path.into(),
            kind,
            priority: DEFAULT_PRIORITY,
            callbacks: CallbackSet::default(),
        }
    }

    /// Build the registry.
    pub fn build(self) -> Result<Registry<K>, RegistryError> {
        Ok(Registry::new(self.nodes))
    }

    fn register(&mut self, node: SchemaNode<K>) -> Result<(), RegistryError> {
        if !node.path.starts_with('/') || node.path.len() < 2 {
            return Err(RegistryError::InvalidPath {
                path: node.path,
                reason: "schema path must be absolute".to_string(),
            });
        }
        if node.path.contains('[') {
            return Err(RegistryError::InvalidPath {
                path: node.path,
                reason: "schema path must not carry key predicates".to_string(),
            });
        }
        if node.callbacks.is_empty() {
            return Err(RegistryError::NoCallbacks(node.path));
        }
        if node.callbacks.create && node.callbacks.modify {
            return Err(RegistryError::CreateAndModify(node.path));
        }
        if !self.paths.insert(node.path.clone()) {
            return Err(RegistryError::DuplicatePath(node.path));
        }
        self.nodes.push(node);
        Ok(())
    }
}

/// Builder for a single schema node.
pub struct NodeBuilder<'a, K> {
    builder: &'a mut RegistryBuilder<K>,
    path: String,
    kind: K,
    priority: u32,
    callbacks: CallbackSet,
}

impl<'a, K> NodeBuilder<'a, K> {
    /// Handle node creation (containers, presence leaves, list entries).
    pub fn create(mut self) -> Self {
        self.callbacks.create = true;
        self
    }

    /// Handle value changes of a leaf.
    pub fn modify(mut self) -> Self {
        self.callbacks.modify = true;
        self
    }

    /// Handle node deletion.
    pub fn delete(mut self) -> Self {
        self.callbacks.delete = true;
        self
    }

    /// Settle the node once after all changes beneath it were applied.
    pub fn apply_finish(mut self) -> Self {
        self.callbacks.apply_finish = true;
        self
    }

    /// Render the node in the running configuration.
    pub fn cli_show(mut self) -> Self {
        self.callbacks.cli_show = true;
        self
    }

    /// Set the execution priority (lower runs first).
    pub fn priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    /// Finish building this node.
    pub fn done(self) -> Result<&'a mut RegistryBuilder<K>, RegistryError> {
        let node = SchemaNode {
            path: self.path,
            kind: self.kind,
            priority: self.priority,
            callbacks: self.callbacks,
        };
        self.builder.register(node)?;
        Ok(self.builder)
    }
}
