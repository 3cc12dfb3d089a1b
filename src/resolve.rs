//! Path Resolution
//!
//! Read-only algorithms over the index: path segments to id, id to path,
//! ancestor chains, and child/descendant enumeration.

use crate::error::IndexError;
use crate::index::DirnodeIndex;
use crate::store::children::ChildBucket;
use crate::types::{AncestorDescriptor, NodeId, NodeRecord, ROOT_ID};
use std::collections::hash_map;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::warn;

impl DirnodeIndex {
    /// Resolve path segments to an id, starting from the root.
    pub fn get_id<S: AsRef<str>>(&self, patht: &[S]) -> Result<NodeId, IndexError> {
        self.get_id_from(patht, ROOT_ID)
    }

    /// Resolve path segments to an id, starting from `parent_id`.
    ///
    /// An empty first segment restarts at the root. Other empty segments are
    /// skipped. Empty input returns `parent_id` unchanged.
    pub fn get_id_from<S: AsRef<str>>(
        &self,
        patht: &[S],
        parent_id: NodeId,
    ) -> Result<NodeId, IndexError> {
        let mut current = match patht.first() {
            None => return Ok(parent_id),
            Some(first) if first.as_ref().is_empty() => ROOT_ID,
            Some(_) => parent_id,
        };
        for name in patht.iter().map(AsRef::as_ref) {
            if !name.is_empty() {
                current = self.children.resolve_child(current, name)?;
            }
        }
        Ok(current)
    }

    /// Resolve a `/`-separated path. A leading `/` makes it absolute.
    pub fn get_id_by_path(&self, path: &str, parent_id: NodeId) -> Result<NodeId, IndexError> {
        let patht: Vec<&str> = path.split('/').collect();
        self.get_id_from(&patht, parent_id)
    }

    pub fn get_ancestor(&self, id: NodeId) -> Result<AncestorDescriptor, IndexError> {
        if id == ROOT_ID {
            return Ok(AncestorDescriptor::root());
        }
        let record = self.nodes.get(id)?;
        Ok(AncestorDescriptor::from_record(id, record))
    }

    /// Descriptors from the root down to `id`, root first.
    pub fn get_ancestors(&self, id: NodeId) -> Result<Vec<AncestorDescriptor>, IndexError> {
        let chain = self.ancestor_chain(id)?;
        let mut ancestors = Vec::with_capacity(chain.len() + 1);
        ancestors.push(AncestorDescriptor::root());
        ancestors.extend(
            chain
                .iter()
                .rev()
                .map(|(id, record)| AncestorDescriptor::from_record(*id, record)),
        );
        Ok(ancestors)
    }

    /// Names from the root down to `id`; the first element is always `""`.
    pub fn get_patht(&self, id: NodeId) -> Result<Vec<String>, IndexError> {
        let chain = self.ancestor_chain(id)?;
        let mut patht = Vec::with_capacity(chain.len() + 1);
        patht.push(String::new());
        patht.extend(chain.iter().rev().map(|(_, record)| record.name.to_string()));
        Ok(patht)
    }

    /// `/`-joined form of `get_patht`; the root renders as `/`.
    pub fn get_path(&self, id: NodeId) -> Result<String, IndexError> {
        let patht = self.get_patht(id)?;
        if patht.len() == 1 {
            return Ok("/".to_string());
        }
        Ok(patht.join("/"))
    }

    pub fn iter_children(&self, parent_id: NodeId) -> Children<'_> {
        Children {
            parent_id,
            inner: self.children.bucket(parent_id).map(ChildBucket::iter),
        }
    }

    /// Pre-order depth-first traversal below `top_id` (exclusive).
    pub fn iter_descendants(&self, top_id: NodeId) -> Descendants<'_> {
        Descendants {
            index: self,
            stack: vec![self.iter_children(top_id)],
            visited: HashSet::from([top_id]),
        }
    }

    /// Walk from `id` up to the root, leaf first, excluding the root itself.
    fn ancestor_chain(&self, id: NodeId) -> Result<Vec<(NodeId, &NodeRecord)>, IndexError> {
        let mut chain: Vec<(NodeId, &NodeRecord)> = Vec::new();
        let mut current = id;
        while current != ROOT_ID {
            let record = match (self.nodes.get(current), chain.last()) {
                (Ok(record), _) => record,
                (Err(e), None) => return Err(e),
                (Err(_), Some((child, _))) => {
                    return Err(IndexError::DanglingAncestor {
                        id: *child,
                        parent_id: current,
                    })
                }
            };
            // A chain longer than the store can only revisit a node
            if chain.len() >= self.nodes.len() {
                warn!(id, at = current, "Cycle detected while walking ancestors");
                return Err(IndexError::Cycle(current));
            }
            chain.push((current, record));
            current = record.parent_id;
        }
        Ok(chain)
    }
}

/// One level of children under a parent, as descriptors
pub struct Children<'a> {
    parent_id: NodeId,
    inner: Option<hash_map::Iter<'a, Arc<str>, NodeId>>,
}

impl Iterator for Children<'_> {
    type Item = AncestorDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        let (name, id) = self.inner.as_mut()?.next()?;
        Some(AncestorDescriptor {
            id: *id,
            parent_id: self.parent_id,
            name: name.to_string(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner
            .as_ref()
            .map_or((0, Some(0)), |inner| inner.size_hint())
    }
}

/// Pre-order traversal of a subtree; never yields the same id twice
pub struct Descendants<'a> {
    index: &'a DirnodeIndex,
    stack: Vec<Children<'a>>,
    visited: HashSet<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = AncestorDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let level = self.stack.last_mut()?;
            match level.next() {
                Some(descriptor) => {
                    if !self.visited.insert(descriptor.id) {
                        warn!(id = descriptor.id, "Cycle detected while walking descendants");
                        continue;
                    }
                    self.stack.push(self.index.iter_children(descriptor.id));
                    return Some(descriptor);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
