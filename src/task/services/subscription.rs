//! Read-side handle that observes published task collections.

use crate::task::domain::TaskList;
use thiserror::Error;
use tokio::sync::watch;

/// Returned once every handle to the store has been dropped.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("task store has been dropped")]
pub struct StoreClosed;

/// Subscriber to a [`TaskStore`](super::TaskStore).
///
/// Every collection published after a command is visible to every
/// subscriber as soon as the command returns. A subscriber that falls behind
/// only sees the latest collection, never the intermediate ones.
#[derive(Debug, Clone)]
pub struct TaskSubscription {
    receiver: watch::Receiver<TaskList>,
}

impl TaskSubscription {
    pub(crate) const fn new(receiver: watch::Receiver<TaskList>) -> Self {
        Self { receiver }
    }

    /// Returns the current collection without marking it as seen.
    #[must_use]
    pub fn current(&self) -> TaskList {
        self.receiver.borrow().clone()
    }

    /// Returns the current collection and marks it as seen.
    pub fn latest(&mut self) -> TaskList {
        self.receiver.borrow_and_update().clone()
    }

    /// Reports whether a collection newer than the last seen one exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreClosed`] when the store has been dropped.
    pub fn has_changed(&self) -> Result<bool, StoreClosed> {
        self.receiver.has_changed().map_err(|_| StoreClosed)
    }

    /// Waits for the next published collection and returns it.
    ///
    /// Resolves immediately when a collection has been published since the
    /// last call to [`latest`](Self::latest) or `changed`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreClosed`] when the store is dropped before another
    /// collection is published.
    pub async fn changed(&mut self) -> Result<TaskList, StoreClosed> {
        self.receiver.changed().await.map_err(|_| StoreClosed)?;
        Ok(self.latest())
    }
}
