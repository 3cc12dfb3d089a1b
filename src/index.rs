//! Directory Node Index
//!
//! `DirnodeIndex` pairs the node store with its child index and is the only
//! place either is mutated, so `child_index[parent_id][name] == id` holds for
//! every record after each write.

use crate::config::IndexSettings;
use crate::error::IndexError;
use crate::store::{ChildIndex, NodeStore};
use crate::types::{NodeId, NodeRecord, ROOT_ID};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Bidirectional id <-> (name, parent_id) index over a forest rooted at `ROOT_ID`
#[derive(Clone, Default)]
pub struct DirnodeIndex {
    pub(crate) nodes: NodeStore,
    pub(crate) children: ChildIndex,
}

impl DirnodeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(settings: &IndexSettings) -> Self {
        DirnodeIndex {
            nodes: NodeStore::with_capacity(settings.initial_capacity),
            children: ChildIndex::with_capacity(settings.initial_capacity),
        }
    }

    pub fn nodes(&self) -> &NodeStore {
        &self.nodes
    }

    pub fn children(&self) -> &ChildIndex {
        &self.children
    }

    pub fn get(&self, id: NodeId) -> Result<&NodeRecord, IndexError> {
        self.nodes.get(id)
    }

    pub fn get_name(&self, id: NodeId) -> Result<&str, IndexError> {
        self.nodes.get(id).map(NodeRecord::name)
    }

    pub fn get_parent_id(&self, id: NodeId) -> Result<NodeId, IndexError> {
        self.nodes.get(id).map(|record| record.parent_id)
    }

    pub fn resolve_child(&self, parent_id: NodeId, name: &str) -> Result<NodeId, IndexError> {
        self.children.resolve_child(parent_id, name)
    }

    pub fn get_child_id(&self, parent_id: NodeId, name: &str) -> Result<NodeId, IndexError> {
        self.resolve_child(parent_id, name)
    }

    /// Direct children of `parent_id` as `(name, child_id)` pairs, unordered
    pub fn children_of(&self, parent_id: NodeId) -> impl Iterator<Item = (&str, NodeId)> + '_ {
        self.children.children_of(parent_id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &NodeRecord)> + '_ {
        self.nodes.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().map(|(id, _)| id)
    }

    /// Insert or replace the record for `id`, returning the previous record.
    ///
    /// A stale reverse entry left by the previous `(name, parent_id)` is
    /// removed. If another id already holds `name` under `parent_id`, the new
    /// id wins and the displaced record is evicted; its own children are kept.
    pub fn set(
        &mut self,
        id: NodeId,
        name: impl Into<Arc<str>>,
        parent_id: NodeId,
    ) -> Result<Option<NodeRecord>, IndexError> {
        if id == ROOT_ID {
            return Err(IndexError::ReservedRoot);
        }
        let record = NodeRecord::new(name, parent_id);
        let name = Arc::clone(&record.name);
        let previous = self.nodes.insert(id, record);

        if let Some(prev) = &previous {
            if prev.parent_id != parent_id || prev.name != name {
                self.children
                    .remove_if_points_to(prev.parent_id, &prev.name, id);
            }
        }

        if let Some(displaced) = self.children.insert(parent_id, Arc::clone(&name), id) {
            self.nodes.remove(displaced);
            debug!(
                id,
                displaced,
                parent_id,
                name = %name,
                "Evicted sibling with the same name"
            );
        }

        trace!(id, parent_id, name = %name, "Set node record");
        Ok(previous)
    }

    /// Remove the record for `id` and the reverse entry pointing at it.
    ///
    /// Descendants are left in place; use `clear` to erase a subtree.
    pub fn remove(&mut self, id: NodeId) -> Option<NodeRecord> {
        let record = self.nodes.remove(id)?;
        self.children
            .remove_if_points_to(record.parent_id, &record.name, id);
        Some(record)
    }

    pub fn delete(&mut self, id: NodeId) -> Result<NodeRecord, IndexError> {
        self.remove(id).ok_or(IndexError::NotFound(id))
    }
}

impl fmt::Debug for DirnodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.nodes
                    .iter()
                    .map(|(id, record)| (id, (record.name(), record.parent_id))),
            )
            .finish()
    }
}

impl<S: Into<Arc<str>>> Extend<(NodeId, (S, NodeId))> for DirnodeIndex {
    fn extend<I: IntoIterator<Item = (NodeId, (S, NodeId))>>(&mut self, iter: I) {
        for (id, (name, parent_id)) in iter {
            if let Err(e) = self.set(id, name, parent_id) {
                warn!(id, parent_id, "Skipped entry during bulk insert: {}", e);
            }
        }
    }
}

impl<S: Into<Arc<str>>> FromIterator<(NodeId, (S, NodeId))> for DirnodeIndex {
    fn from_iter<I: IntoIterator<Item = (NodeId, (S, NodeId))>>(iter: I) -> Self {
        let mut index = DirnodeIndex::new();
        index.extend(iter);
        index
    }
}
