//! Commands accepted by the task store.

use super::{NewTask, TaskId, TaskPatch};
use serde::{Deserialize, Serialize};

/// A request to transform the task collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TaskCommand {
    /// Append a new task.
    Add(NewTask),
    /// Merge a partial update over an existing task.
    Update {
        /// Target task.
        id: TaskId,
        /// Fields to overwrite.
        patch: TaskPatch,
    },
    /// Remove a task.
    Delete {
        /// Target task.
        id: TaskId,
    },
}

impl TaskCommand {
    /// Returns a short name for log output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Add(_) => "add",
            Self::Update { .. } => "update",
            Self::Delete { .. } => "delete",
        }
    }
}

/// Result of applying a single command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A task was appended with the given identifier.
    Added(TaskId),
    /// The identified task was replaced by its patched copy.
    Updated(TaskId),
    /// The identified task was removed.
    Deleted(TaskId),
    /// No task had the identifier; the collection is unchanged.
    Ignored(TaskId),
}

impl CommandOutcome {
    /// Returns the identifier the command acted on.
    #[must_use]
    pub const fn task_id(&self) -> &TaskId {
        match self {
            Self::Added(id) | Self::Updated(id) | Self::Deleted(id) | Self::Ignored(id) => id,
        }
    }

    /// Returns `true` when the command found its target.
    ///
    /// An update whose patch matches the current values is still applied,
    /// even though the collection is unchanged.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        !matches!(self, Self::Ignored(_))
    }
}
