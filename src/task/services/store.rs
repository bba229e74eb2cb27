//! The authoritative task store.

use super::{TaskSubscription, transition};
use crate::task::{
    adapters::UuidTaskIdGenerator,
    domain::{CommandOutcome, NewTask, Task, TaskCommand, TaskId, TaskList, TaskPatch},
    ports::TaskIdGenerator,
};
use mockable::{Clock, DefaultClock};
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::watch;

/// Shared, ordered collection of tasks and the only place it is mutated.
///
/// Construct one store when the application starts and hand clones of it to
/// every consumer; all clones share the same collection. Commands are
/// applied one at a time: the read of the current collection, the transition
/// and the publication of the result happen under a single writer lock, so
/// concurrent callers observe a strict sequence of whole-collection
/// replacements. Publication goes through `watch::Sender::send_if_modified`
/// and skips collections equal to the current one.
pub struct TaskStore<G = UuidTaskIdGenerator, C = DefaultClock>
where
    G: TaskIdGenerator,
    C: Clock + Send + Sync,
{
    shared: Arc<Shared>,
    ids: Arc<G>,
    clock: Arc<C>,
}

struct Shared {
    writer: Mutex<()>,
    state: watch::Sender<TaskList>,
}

impl<G, C> TaskStore<G, C>
where
    G: TaskIdGenerator,
    C: Clock + Send + Sync,
{
    /// Creates an empty store.
    #[must_use]
    pub fn new(ids: Arc<G>, clock: Arc<C>) -> Self {
        let (state, _) = watch::channel(TaskList::new());
        Self {
            shared: Arc::new(Shared {
                writer: Mutex::new(()),
                state,
            }),
            ids,
            clock,
        }
    }

    /// Appends a new task and returns its identifier.
    pub fn add(&self, input: NewTask) -> TaskId {
        self.dispatch(TaskCommand::Add(input)).task_id().clone()
    }

    /// Merges `patch` over the identified task.
    ///
    /// Returns [`CommandOutcome::Ignored`] and leaves the collection
    /// untouched when no task has the identifier.
    pub fn update(&self, id: &TaskId, patch: TaskPatch) -> CommandOutcome {
        self.dispatch(TaskCommand::Update {
            id: id.clone(),
            patch,
        })
    }

    /// Removes the identified task.
    ///
    /// Returns [`CommandOutcome::Ignored`] and leaves the collection
    /// untouched when no task has the identifier.
    pub fn delete(&self, id: &TaskId) -> CommandOutcome {
        self.dispatch(TaskCommand::Delete { id: id.clone() })
    }

    /// Applies a command and publishes the resulting collection.
    ///
    /// Subscribers are notified only when the collection changed; an update
    /// that rewrites a task with its current values is not published.
    pub fn dispatch(&self, command: TaskCommand) -> CommandOutcome {
        let kind = command.kind();
        let _writer = self
            .shared
            .writer
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let step = transition(
            &self.shared.state.borrow(),
            command,
            &*self.ids,
            &*self.clock,
        );

        let Some(next) = step.next else {
            tracing::trace!(
                command = kind,
                task_id = %step.outcome.task_id(),
                "task command ignored for unknown id"
            );
            return step.outcome;
        };

        let len = next.len();
        let published = self.shared.state.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            *current = next;
            true
        });
        tracing::debug!(
            command = kind,
            task_id = %step.outcome.task_id(),
            tasks = len,
            published,
            "task command applied"
        );
        step.outcome
    }

    /// Returns a copy of the current collection.
    #[must_use]
    pub fn snapshot(&self) -> TaskList {
        self.shared.state.borrow().clone()
    }

    /// Returns a copy of the identified task.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<Task> {
        self.shared.state.borrow().get(id).cloned()
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shared.state.borrow().len()
    }

    /// Returns `true` when the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shared.state.borrow().is_empty()
    }

    /// Subscribes to published collections.
    ///
    /// The current collection counts as already seen.
    #[must_use]
    pub fn subscribe(&self) -> TaskSubscription {
        TaskSubscription::new(self.shared.state.subscribe())
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new(Arc::new(UuidTaskIdGenerator), Arc::new(DefaultClock))
    }
}

impl<G, C> Clone for TaskStore<G, C>
where
    G: TaskIdGenerator,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            ids: Arc::clone(&self.ids),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<G, C> fmt::Debug for TaskStore<G, C>
where
    G: TaskIdGenerator,
    C: Clock + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskStore")
            .field("tasks", &self.len())
            .finish_non_exhaustive()
    }
}
