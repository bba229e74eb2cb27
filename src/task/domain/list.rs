//! Ordered, read-only task collection.

use super::{Task, TaskId, TaskPatch};
use serde::Serialize;

/// Insertion-ordered snapshot of every task in a store.
///
/// Each identifier appears at most once. The mutating primitives return a
/// new list and leave `self` untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the list holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterates tasks in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Returns the identifiers in insertion order.
    #[must_use]
    pub fn ids(&self) -> Vec<TaskId> {
        self.tasks.iter().map(|task| task.id().clone()).collect()
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns the position of a task by identifier.
    #[must_use]
    pub fn position(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }

    /// Returns the number of completed tasks.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_completed()).count()
    }

    /// Returns a list with `task` appended at the end.
    #[must_use]
    pub fn appended(&self, task: Task) -> Self {
        let mut tasks = Vec::with_capacity(self.tasks.len() + 1);
        tasks.extend(self.tasks.iter().cloned());
        tasks.push(task);
        Self { tasks }
    }

    /// Returns a list with the identified task patched in place, or `None`
    /// when no task has the identifier.
    #[must_use]
    pub fn updated(&self, id: &TaskId, patch: TaskPatch) -> Option<Self> {
        let target = self.position(id)?;
        let mut pending = Some(patch);
        let tasks = self
            .tasks
            .iter()
            .enumerate()
            .map(|(index, task)| match pending.take_if(|_| index == target) {
                Some(fields) => task.patched(fields),
                None => task.clone(),
            })
            .collect();
        Some(Self { tasks })
    }

    /// Returns a list without the identified task, or `None` when no task has
    /// the identifier.
    #[must_use]
    pub fn without(&self, id: &TaskId) -> Option<Self> {
        self.position(id)?;
        let tasks = self
            .tasks
            .iter()
            .filter(|task| task.id() != id)
            .cloned()
            .collect();
        Some(Self { tasks })
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
