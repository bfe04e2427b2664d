//! In-memory progress storage for testing.
//!
//! This module provides a thread-safe in-memory implementation of the
//! ProgressStore trait, primarily for use in unit tests. A `fail_writes`
//! switch simulates a full or unavailable persistence medium so tests can
//! exercise the fail-open write path.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use crate::core::ProgressRecord;
use crate::error::{DojoError, Result};
use crate::store::ProgressStore;

/// In-memory progress store for testing.
#[derive(Debug, Default)]
pub struct MemoryProgressStore {
    /// The persisted record, if any.
    record: RwLock<Option<ProgressRecord>>,
    /// When set, `save` fails as if the medium were unavailable.
    fail_writes: AtomicBool,
}

impl MemoryProgressStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with a record.
    pub fn with_record(record: ProgressRecord) -> Self {
        Self {
            record: RwLock::new(Some(record)),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Simulate write failures (quota exceeded, medium unavailable).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Snapshot the currently persisted record, if any.
    pub fn snapshot(&self) -> Option<ProgressRecord> {
        self.record.read().unwrap().clone()
    }

    /// Check whether nothing has been persisted yet.
    pub fn is_empty(&self) -> bool {
        self.record.read().unwrap().is_none()
    }
}

impl ProgressStore for MemoryProgressStore {
    fn load(&self) -> Result<Option<ProgressRecord>> {
        Ok(self.record.read().unwrap().clone())
    }

    fn save(&self, record: &ProgressRecord) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DojoError::storage(
                "memory",
                io::Error::new(io::ErrorKind::Other, "simulated write failure"),
            ));
        }
        *self.record.write().unwrap() = Some(record.clone());
        Ok(())
    }
}
