//! Error types for the directory node index.

use crate::types::NodeId;
use thiserror::Error;

/// Lookup failures raised by the index itself
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    #[error("Node not found: {0}")]
    NotFound(NodeId),

    #[error("No child named {name:?} under node {parent_id}")]
    ChildNotFound { parent_id: NodeId, name: String },

    /// A record in an ancestor chain points at a parent that has no record.
    #[error("Node {id} references missing parent {parent_id}")]
    DanglingAncestor { id: NodeId, parent_id: NodeId },

    #[error("Cycle detected in ancestor chain at node {0}")]
    Cycle(NodeId),

    #[error("Node id 0 is reserved for the root")]
    ReservedRoot,
}

impl IndexError {
    /// True for every flavour of missing-node error, including a dangling ancestor.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            IndexError::NotFound(_)
                | IndexError::ChildNotFound { .. }
                | IndexError::DanglingAncestor { .. }
        )
    }
}

/// Errors from the ambient layer: configuration and logging setup
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dangling_ancestor_counts_as_not_found() {
        let err = IndexError::DanglingAncestor {
            id: 2,
            parent_id: 9,
        };
        assert!(err.is_not_found());
        assert!(!IndexError::Cycle(1).is_not_found());
        assert_eq!(err.to_string(), "Node 2 references missing parent 9");
    }

    #[test]
    fn config_errors_become_api_errors() {
        let err: ApiError = config::ConfigError::NotFound("index.initial_capacity".to_string()).into();
        assert!(matches!(err, ApiError::ConfigError(msg) if msg.contains("index.initial_capacity")));
    }
}
