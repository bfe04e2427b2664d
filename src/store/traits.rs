//! Progress storage traits for dojo.
//!
//! This module defines the `ProgressStore` trait for progress persistence.
//! Stores are strict: they report read and write failures as errors. The
//! fail-open recovery policy (default record on bad reads, swallowed write
//! failures) lives one level up, in `ProgressTracker`, so every store
//! implementation stays honest about what actually happened.

use std::sync::Arc;

use crate::core::ProgressRecord;
use crate::error::Result;

/// Trait for progress storage backends.
///
/// A store holds at most one record: the single persisted aggregate of
/// learner state.
pub trait ProgressStore: Send + Sync {
    /// Load the persisted record.
    ///
    /// Returns `Ok(None)` if nothing has been persisted yet.
    fn load(&self) -> Result<Option<ProgressRecord>>;

    /// Persist the record, overwriting any prior state.
    fn save(&self, record: &ProgressRecord) -> Result<()>;
}

/// Blanket implementation of ProgressStore for Arc-wrapped stores.
///
/// This allows using `Arc<T>` where `T: ProgressStore` is expected,
/// which is useful for sharing stores between tests and commands.
impl<T: ProgressStore + ?Sized> ProgressStore for Arc<T> {
    fn load(&self) -> Result<Option<ProgressRecord>> {
        (**self).load()
    }

    fn save(&self, record: &ProgressRecord) -> Result<()> {
        (**self).save(record)
    }
}

/// Blanket implementation of ProgressStore for store references.
impl<T: ProgressStore + ?Sized> ProgressStore for &T {
    fn load(&self) -> Result<Option<ProgressRecord>> {
        (**self).load()
    }

    fn save(&self, record: &ProgressRecord) -> Result<()> {
        (**self).save(record)
    }
}
