//! Identifier source for newly added tasks.

use crate::task::domain::TaskId;
use std::sync::Arc;

/// Mints task identifiers.
///
/// Implementations must never return the same identifier twice over their
/// lifetime.
pub trait TaskIdGenerator: Send + Sync {
    /// Returns a fresh identifier.
    fn next_id(&self) -> TaskId;
}

impl<G: TaskIdGenerator + ?Sized> TaskIdGenerator for Arc<G> {
    fn next_id(&self) -> TaskId {
        (**self).next_id()
    }
}

impl<G: TaskIdGenerator + ?Sized> TaskIdGenerator for Box<G> {
    fn next_id(&self) -> TaskId {
        (**self).next_id()
    }
}
