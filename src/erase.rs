//! Subtree Erasure
//!
//! Cascading removal of a node and all of its transitive descendants.

use crate::index::DirnodeIndex;
use crate::types::{NodeId, ROOT_ID};
use tracing::debug;

impl DirnodeIndex {
    /// Erase `top_id` and every descendant, returning the number of records removed.
    ///
    /// `ROOT_ID` discards the whole index. An unknown id with no children is a
    /// no-op. Each child bucket is detached before its members are visited, so
    /// the walk terminates even on a cyclic structure.
    pub fn clear(&mut self, top_id: NodeId) -> usize {
        if top_id == ROOT_ID {
            let removed = self.nodes.len();
            self.nodes.clear();
            self.children.clear();
            debug!(removed, "Cleared index");
            return removed;
        }

        let mut removed = 0;
        if let Some(record) = self.nodes.remove(top_id) {
            self.children
                .remove_if_points_to(record.parent_id, &record.name, top_id);
            removed += 1;
        }

        let mut pending = vec![top_id];
        while let Some(parent_id) = pending.pop() {
            let Some(bucket) = self.children.take_bucket(parent_id) else {
                continue;
            };
            for child_id in bucket.into_values() {
                if self.nodes.remove(child_id).is_some() {
                    removed += 1;
                }
                pending.push(child_id);
            }
        }

        debug!(top_id, removed, "Erased subtree");
        removed
    }
}
