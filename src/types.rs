//! Core types for the directory node index.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// NodeId: opaque numeric identifier of a remote filesystem node
pub type NodeId = u64;

/// Sentinel id for the forest root. Never stored as a key, valid as a parent.
pub const ROOT_ID: NodeId = 0;

/// NodeRecord: the `(name, parent_id)` pair stored for one non-root id
///
/// The name is held behind an `Arc<str>` so the child index can share the
/// text instead of copying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub name: Arc<str>,
    pub parent_id: NodeId,
}

impl NodeRecord {
    pub fn new(name: impl Into<Arc<str>>, parent_id: NodeId) -> Self {
        Self {
            name: name.into(),
            parent_id,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Read-only `{id, parent_id, name}` projection produced by traversals
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AncestorDescriptor {
    pub id: NodeId,
    pub parent_id: NodeId,
    pub name: String,
}

impl AncestorDescriptor {
    /// Descriptor of the forest root: `{ id: 0, parent_id: 0, name: "" }`
    pub fn root() -> Self {
        Self {
            id: ROOT_ID,
            parent_id: ROOT_ID,
            name: String::new(),
        }
    }

    pub(crate) fn from_record(id: NodeId, record: &NodeRecord) -> Self {
        Self {
            id,
            parent_id: record.parent_id,
            name: record.name.to_string(),
        }
    }
}
