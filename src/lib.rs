//! Dirnode: Identifier-to-Directory-Node Index
//!
//! An in-memory bidirectional mapping between numeric node ids and their
//! `(name, parent_id)` pairs, for remote-storage clients that translate
//! between opaque ids and human-readable paths.

pub mod concurrency;
pub mod config;
pub mod erase;
pub mod error;
pub mod index;
pub mod logging;
pub mod resolve;
pub mod store;
pub mod types;

pub use crate::concurrency::SharedIndex;
pub use crate::config::{ConfigLoader, DirnodeConfig, IndexSettings};
pub use crate::error::{ApiError, IndexError};
pub use crate::index::DirnodeIndex;
pub use crate::resolve::{Children, Descendants};
pub use crate::types::{AncestorDescriptor, NodeId, NodeRecord, ROOT_ID};
