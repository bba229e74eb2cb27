//! Task entity and the payloads used to create and modify it.

use super::{Priority, TaskId, TaskText, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A tracked unit of work.
///
/// `id` and `created_at` are fixed when the task is created; every other
/// field changes only through [`Task::patched`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    text: TaskText,
    priority: Priority,
    completed: bool,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task from an add payload, stamping it with the clock's
    /// current time.
    #[must_use]
    pub fn new(id: TaskId, input: NewTask, clock: &impl Clock) -> Self {
        Self::with_created_at(id, input, clock.utc())
    }

    /// Creates a task with an explicit creation timestamp.
    #[must_use]
    pub fn with_created_at(id: TaskId, input: NewTask, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: input.title,
            text: input.text,
            priority: input.priority,
            completed: input.completed,
            created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub const fn text(&self) -> &TaskText {
        &self.text
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns whether the task is complete.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns a copy of this task with `patch` merged over it.
    ///
    /// The identifier and creation timestamp are carried over unchanged.
    #[must_use]
    pub fn patched(&self, patch: TaskPatch) -> Self {
        Self {
            id: self.id.clone(),
            title: patch.title.unwrap_or_else(|| self.title.clone()),
            text: patch.text.unwrap_or_else(|| self.text.clone()),
            priority: patch.priority.unwrap_or(self.priority),
            completed: patch.completed.unwrap_or(self.completed),
            created_at: self.created_at,
        }
    }
}

/// Payload for adding a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    title: TaskTitle,
    text: TaskText,
    #[serde(default)]
    priority: Priority,
    #[serde(default)]
    completed: bool,
}

impl NewTask {
    /// Creates an add payload for an incomplete task.
    #[must_use]
    pub const fn new(title: TaskTitle, text: TaskText, priority: Priority) -> Self {
        Self {
            title,
            text,
            priority,
            completed: false,
        }
    }

    /// Sets the initial completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Returns the initial completion flag.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }
}

/// Partial update applied to an existing task.
///
/// Only the mutable fields can be expressed. Deserialized payloads that
/// carry `id` or `createdAt` keys have those keys dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<TaskTitle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<TaskText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    completed: Option<bool>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Patch that only sets the completion flag.
    #[must_use]
    pub fn completed(completed: bool) -> Self {
        Self::new().with_completed(completed)
    }

    /// Patch that only replaces the description.
    #[must_use]
    pub fn text(text: TaskText) -> Self {
        Self::new().with_text(text)
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: TaskTitle) -> Self {
        self.title = Some(title);
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_text(mut self, text: TaskText) -> Self {
        self.text = Some(text);
        self
    }

    /// Replaces the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Returns `true` when the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.text.is_none()
            && self.priority.is_none()
            && self.completed.is_none()
    }
}
