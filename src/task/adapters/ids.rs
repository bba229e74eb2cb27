//! Identifier generators.

use crate::task::{domain::TaskId, ports::TaskIdGenerator};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Issues random version 4 UUID strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidTaskIdGenerator;

impl TaskIdGenerator for UuidTaskIdGenerator {
    fn next_id(&self) -> TaskId {
        TaskId::from_string(Uuid::new_v4().to_string())
    }
}

/// Issues `<prefix><n>` identifiers with `n` counting up from 1.
#[derive(Debug)]
pub struct SequentialTaskIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialTaskIdGenerator {
    /// Creates a generator whose first identifier is `<prefix>1`.
    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }

    /// Returns the prefix prepended to every identifier.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for SequentialTaskIdGenerator {
    fn default() -> Self {
        Self::with_prefix("task-")
    }
}

impl TaskIdGenerator for SequentialTaskIdGenerator {
    fn next_id(&self) -> TaskId {
        let value = self.next.fetch_add(1, Ordering::Relaxed);
        TaskId::from_string(format!("{}{value}", self.prefix))
    }
}
