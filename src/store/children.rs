//! Child Index
//!
//! Reverse store: parent_id -> (name -> child_id). Derived from the node
//! store and kept consistent with it by `DirnodeIndex` on every mutation.

use crate::error::IndexError;
use crate::types::NodeId;
use std::collections::HashMap;
use std::sync::Arc;

/// Children of one parent, keyed by the shared name handle
pub type ChildBucket = HashMap<Arc<str>, NodeId>;

#[derive(Debug, Clone, Default)]
pub struct ChildIndex {
    buckets: HashMap<NodeId, ChildBucket>,
}

impl ChildIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        ChildIndex {
            buckets: HashMap::with_capacity(capacity),
        }
    }

    /// Direct children of `parent_id` as `(name, child_id)`; empty for an unknown parent.
    pub fn children_of(&self, parent_id: NodeId) -> impl Iterator<Item = (&str, NodeId)> + '_ {
        self.buckets
            .get(&parent_id)
            .into_iter()
            .flat_map(|bucket| bucket.iter().map(|(name, id)| (name.as_ref(), *id)))
    }

    pub fn child_count(&self, parent_id: NodeId) -> usize {
        self.buckets.get(&parent_id).map_or(0, HashMap::len)
    }

    pub fn resolve_child(&self, parent_id: NodeId, name: &str) -> Result<NodeId, IndexError> {
        self.buckets
            .get(&parent_id)
            .and_then(|bucket| bucket.get(name))
            .copied()
            .ok_or_else(|| IndexError::ChildNotFound {
                parent_id,
                name: name.to_string(),
            })
    }

    pub(crate) fn bucket(&self, parent_id: NodeId) -> Option<&ChildBucket> {
        self.buckets.get(&parent_id)
    }

    /// Iterate every `(parent_id, name, child_id)` entry
    pub fn entries(&self) -> impl Iterator<Item = (NodeId, &str, NodeId)> + '_ {
        self.buckets.iter().flat_map(|(parent_id, bucket)| {
            bucket
                .iter()
                .map(move |(name, id)| (*parent_id, name.as_ref(), *id))
        })
    }

    /// Register `name -> id` under `parent_id`, returning a displaced sibling id.
    ///
    /// The bucket is created lazily on first insertion.
    pub(crate) fn insert(&mut self, parent_id: NodeId, name: Arc<str>, id: NodeId) -> Option<NodeId> {
        self.buckets
            .entry(parent_id)
            .or_default()
            .insert(name, id)
            .filter(|displaced| *displaced != id)
    }

    /// Remove `(parent_id, name)` only if it still resolves to `id`.
    pub(crate) fn remove_if_points_to(&mut self, parent_id: NodeId, name: &str, id: NodeId) -> bool {
        match self.buckets.get_mut(&parent_id) {
            Some(bucket) if bucket.get(name) == Some(&id) => {
                bucket.remove(name);
                true
            }
            _ => false,
        }
    }

    /// Detach and return the whole bucket for `parent_id`.
    pub(crate) fn take_bucket(&mut self, parent_id: NodeId) -> Option<ChildBucket> {
        self.buckets.remove(&parent_id)
    }

    pub(crate) fn clear(&mut self) {
        self.buckets.clear();
    }
}
