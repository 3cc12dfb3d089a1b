//! NodeRecord Store
//!
//! Primary storage for node records: id -> (name, parent_id). Owns the name
//! text for each id; the child index only holds shared handles to it.

pub mod children;

pub use children::ChildIndex;

use crate::error::IndexError;
use crate::types::{NodeId, NodeRecord};
use std::collections::HashMap;

/// Forward store keyed by node id
#[derive(Debug, Clone, Default)]
pub struct NodeStore {
    records: HashMap<NodeId, NodeRecord>,
}

impl NodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        NodeStore {
            records: HashMap::with_capacity(capacity),
        }
    }

    pub fn get(&self, id: NodeId) -> Result<&NodeRecord, IndexError> {
        self.records.get(&id).ok_or(IndexError::NotFound(id))
    }

    /// Never fails; the root sentinel is never a key.
    pub fn contains(&self, id: NodeId) -> bool {
        self.records.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate `(id, record)` pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &NodeRecord)> + '_ {
        self.records.iter().map(|(id, record)| (*id, record))
    }

    pub(crate) fn insert(&mut self, id: NodeId, record: NodeRecord) -> Option<NodeRecord> {
        self.records.insert(id, record)
    }

    pub(crate) fn remove(&mut self, id: NodeId) -> Option<NodeRecord> {
        self.records.remove(&id)
    }

    pub(crate) fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_is_not_found() {
        let store = NodeStore::new();
        assert_eq!(store.get(7), Err(IndexError::NotFound(7)));
        assert!(!store.contains(7));
        assert!(!store.contains(0));
    }

    #[test]
    fn test_insert_replaces_record() {
        let mut store = NodeStore::with_capacity(4);
        assert!(store.insert(1, NodeRecord::new("a", 0)).is_none());
        let old = store.insert(1, NodeRecord::new("b", 0)).unwrap();
        assert_eq!(old.name(), "a");
        assert_eq!(store.get(1).unwrap().name(), "b");
        assert_eq!(store.len(), 1);
    }
}
