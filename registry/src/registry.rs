//! The Registry - immutable schema lookup.

use std::collections::HashMap;

use crate::types::SchemaNode;

/// The Registry provides runtime lookup of schema nodes.
/// It is immutable after construction.
#[derive(Debug)]
pub struct Registry<K> {
    /// Schema nodes in registration order.
    nodes: Vec<SchemaNode<K>>,
    /// Node index by schema path.
    by_path: HashMap<String, usize>,
}

impl<K> Registry<K> {
    /// Create a registry (use RegistryBuilder for construction).
    pub(crate) fn new(nodes: Vec<SchemaNode<K>>) -> Self {
        let by_path = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.path.clone(), i))
            .collect();
        Self { nodes, by_path }
    }

    // ==================== Lookups ====================

    /// Get a schema node by its schema path.
    pub fn get(&self, schema_path: &str) -> Option<&SchemaNode<K>> {
        self.by_path.get(schema_path).map(|&i| &self.nodes[i])
    }

    /// Returns true if the schema path is registered.
    pub fn contains(&self, schema_path: &str) -> bool {
        self.by_path.contains_key(schema_path)
    }

    /// Iterate all nodes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &SchemaNode<K>> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
