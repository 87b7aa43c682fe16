//! Configuration tree storage and typed node access.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::str::FromStr;

use isisnb_core::{CoreError, Value};

use crate::error::{TreeError, TreeResult};
use crate::path::{DataPath, LEAF_LIST_KEY};

/// An in-memory configuration tree.
///
/// Every node is stored under its full path. Containers and list
/// entries carry no value; leaves carry one. Keyed list entries own an
/// implicit key leaf, so `./area-tag` under an instance entry resolves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigTree {
    nodes: BTreeMap<DataPath, Option<Value>>,
}

impl ConfigTree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ==================== Edits ====================

    /// Set a leaf value, creating every missing ancestor.
    pub fn set(&mut self, path: &DataPath, value: impl Into<Value>) {
        self.ensure_ancestors(path);
        self.insert_node(path, Some(value.into()));
    }

    /// Create a container, list entry or leaf-list entry without a value.
    ///
    /// Leaf-list entries take their key as value.
    pub fn create(&mut self, path: &DataPath) {
        self.ensure_ancestors(path);
        if !self.nodes.contains_key(path) {
            self.insert_node(path, None);
        }
    }

    /// Parse a path and set a leaf value.
    pub fn set_str(&mut self, path: &str, value: impl Into<Value>) -> TreeResult<()> {
        let path = DataPath::parse(path)?;
        self.set(&path, value);
        Ok(())
    }

    /// Parse a path and create a valueless node.
    pub fn create_str(&mut self, path: &str) -> TreeResult<()> {
        let path = DataPath::parse(path)?;
        self.create(&path);
        Ok(())
    }

    /// Delete a node and its whole subtree, returning the number of removed nodes.
    pub fn delete(&mut self, path: &DataPath) -> TreeResult<usize> {
        if !self.nodes.contains_key(path) {
            return Err(TreeError::node_not_found(path));
        }
        let doomed: Vec<DataPath> = self.subtree(path).map(|(p, _)| p.clone()).collect();
        for p in &doomed {
            self.nodes.remove(p);
        }
        Ok(doomed.len())
    }

    /// Parse a path and delete its subtree.
    pub fn delete_str(&mut self, path: &str) -> TreeResult<usize> {
        let path = DataPath::parse(path)?;
        self.delete(&path)
    }

    fn ensure_ancestors(&mut self, path: &DataPath) {
        let mut current = DataPath::root();
        let segments = path.segments();
        for seg in &segments[..segments.len().saturating_sub(1)] {
            current = match &seg.key {
                Some(k) => current.entry(seg.name.clone(), k.name.clone(), k.value.clone()),
                None => current.child(seg.name.clone()),
            };
            if !self.nodes.contains_key(&current) {
                self.insert_node(&current, None);
            }
        }
    }

    fn insert_node(&mut self, path: &DataPath, value: Option<Value>) {
        let value = match (path.last(), value) {
            (Some(seg), None) if seg.is_leaf_list_entry() => seg
                .key
                .as_ref()
                .map(|k| Value::String(k.value.clone())),
            (_, v) => v,
        };
        self.nodes.insert(path.clone(), value);

        if let Some(key) = path.last().and_then(|s| s.key.as_ref()) {
            if key.name != LEAF_LIST_KEY {
                self.nodes
                    .insert(path.child(key.name.clone()), Some(Value::String(key.value.clone())));
            }
        }
    }

    // ==================== Reads ====================

    /// Check whether a node exists.
    pub fn exists(&self, path: &DataPath) -> bool {
        self.nodes.contains_key(path)
    }

    /// Get the value stored at a node.
    pub fn value(&self, path: &DataPath) -> Option<&Value> {
        self.nodes.get(path).and_then(|v| v.as_ref())
    }

    /// Get a node handle for typed access.
    pub fn node(&self, path: &DataPath) -> Option<DataNode<'_>> {
        self.nodes.contains_key(path).then(|| DataNode {
            tree: self,
            path: path.clone(),
        })
    }

    /// Iterate a node and all of its descendants in path order.
    pub fn subtree<'a>(
        &'a self,
        path: &'a DataPath,
    ) -> impl Iterator<Item = (&'a DataPath, Option<&'a Value>)> + 'a {
        self.nodes
            .range((Bound::Included(path), Bound::Unbounded))
            .take_while(move |(p, _)| p.starts_with(path))
            .map(|(p, v)| (p, v.as_ref()))
    }

    /// Iterate the direct children of a node.
    pub fn children<'a>(&'a self, path: &'a DataPath) -> impl Iterator<Item = &'a DataPath> + 'a {
        let depth = path.depth() + 1;
        self.subtree(path)
            .map(|(p, _)| p)
            .filter(move |p| p.depth() == depth)
    }

    /// Iterate all nodes in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&DataPath, Option<&Value>)> {
        self.nodes.iter().map(|(p, v)| (p, v.as_ref()))
    }
}

/// A handle to one node of a tree, used by configuration handlers.
#[derive(Debug, Clone)]
pub struct DataNode<'t> {
    tree: &'t ConfigTree,
    path: DataPath,
}

impl<'t> DataNode<'t> {
    /// Build a handle without checking existence (deleted nodes are read this way).
    pub fn new(tree: &'t ConfigTree, path: DataPath) -> Self {
        Self { tree, path }
    }

    pub fn path(&self) -> &DataPath {
        &self.path
    }

    pub fn tree(&self) -> &'t ConfigTree {
        self.tree
    }

    /// Value stored at this node itself.
    pub fn value(&self) -> Option<&'t Value> {
        self.tree.value(&self.path)
    }

    /// Navigate to the parent node.
    pub fn parent(&self) -> Option<DataNode<'t>> {
        self.path.parent().map(|path| DataNode {
            tree: self.tree,
            path,
        })
    }

    /// Check whether a node exists at a relative path.
    pub fn exists(&self, rel: &str) -> bool {
        self.path
            .resolve(rel)
            .map(|p| self.tree.exists(&p))
            .unwrap_or(false)
    }

    fn lookup(&self, rel: &str) -> TreeResult<(DataPath, &'t Value)> {
        let path = self.path.resolve(rel)?;
        match self.tree.value(&path) {
            Some(v) => Ok((path, v)),
            None => Err(TreeError::node_not_found(&path)),
        }
    }

    /// Read a string leaf.
    pub fn get_string(&self, rel: &str) -> TreeResult<String> {
        let (path, v) = self.lookup(rel)?;
        v.as_str()
            .map(str::to_string)
            .ok_or_else(|| TreeError::type_mismatch(&path, "string", v.type_name()))
    }

    /// Read a boolean leaf.
    pub fn get_bool(&self, rel: &str) -> TreeResult<bool> {
        let (path, v) = self.lookup(rel)?;
        v.as_bool()
            .ok_or_else(|| TreeError::type_mismatch(&path, "boolean", v.type_name()))
    }

    /// Read an integer leaf as u16.
    pub fn get_u16(&self, rel: &str) -> TreeResult<u16> {
        let (path, v) = self.lookup(rel)?;
        v.as_u16()
            .ok_or_else(|| TreeError::type_mismatch(&path, "uint16", v.type_name()))
    }

    /// Read an integer leaf as u32.
    pub fn get_u32(&self, rel: &str) -> TreeResult<u32> {
        let (path, v) = self.lookup(rel)?;
        v.as_u32()
            .ok_or_else(|| TreeError::type_mismatch(&path, "uint32", v.type_name()))
    }

    /// Read an enumeration leaf and decode it.
    pub fn get_enum<T>(&self, rel: &str) -> TreeResult<T>
    where
        T: FromStr<Err = CoreError>,
    {
        let (path, v) = self.lookup(rel)?;
        let name = v
            .as_enum()
            .ok_or_else(|| TreeError::type_mismatch(&path, "enumeration", v.type_name()))?;
        name.parse::<T>()
            .map_err(|e| TreeError::invalid_value(&path, e))
    }
}
