//! Shared access to a directory node index
//!
//! The index itself has no internal synchronization. `SharedIndex` is the
//! caller-side discipline: a single reader-writer lock around the whole index,
//! so traversals never observe a half-applied mutation.

use crate::index::DirnodeIndex;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// Cloneable handle to one index guarded by a single `RwLock`
#[derive(Clone, Default)]
pub struct SharedIndex {
    inner: Arc<RwLock<DirnodeIndex>>,
}

impl SharedIndex {
    pub fn new(index: DirnodeIndex) -> Self {
        Self {
            inner: Arc::new(RwLock::new(index)),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, DirnodeIndex> {
        self.inner.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, DirnodeIndex> {
        self.inner.write()
    }

    /// Run `f` under the read lock
    pub fn with_read<R>(&self, f: impl FnOnce(&DirnodeIndex) -> R) -> R {
        let guard = self.inner.read();
        f(&*guard)
    }

    /// Run `f` under the write lock
    pub fn with_write<R>(&self, f: impl FnOnce(&mut DirnodeIndex) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut *guard)
    }

    /// Copy the current state out of the lock for a stable view
    pub fn snapshot(&self) -> DirnodeIndex {
        self.inner.read().clone()
    }
}

impl From<DirnodeIndex> for SharedIndex {
    fn from(index: DirnodeIndex) -> Self {
        Self::new(index)
    }
}
