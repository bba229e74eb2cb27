//! The pure state transition applied for every store command.

use crate::task::{
    domain::{CommandOutcome, Task, TaskCommand, TaskList},
    ports::TaskIdGenerator,
};
use mockable::Clock;

/// Result of applying one command to a task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// What the command did.
    pub outcome: CommandOutcome,
    /// The next collection, or `None` when the command left it unchanged.
    pub next: Option<TaskList>,
}

impl Transition {
    fn applied(outcome: CommandOutcome, next: TaskList) -> Self {
        Self {
            outcome,
            next: Some(next),
        }
    }

    const fn ignored(outcome: CommandOutcome) -> Self {
        Self {
            outcome,
            next: None,
        }
    }
}

/// Computes the collection that follows `current` once `command` is applied.
///
/// The identifier generator and clock are consulted only for
/// [`TaskCommand::Add`]. Update and delete on an unknown identifier yield
/// [`CommandOutcome::Ignored`] and no next collection.
pub fn transition<G, C>(
    current: &TaskList,
    command: TaskCommand,
    ids: &G,
    clock: &C,
) -> Transition
where
    G: TaskIdGenerator + ?Sized,
    C: Clock + ?Sized,
{
    match command {
        TaskCommand::Add(input) => {
            let id = ids.next_id();
            let task = Task::with_created_at(id.clone(), input, clock.utc());
            Transition::applied(CommandOutcome::Added(id), current.appended(task))
        }
        TaskCommand::Update { id, patch } => match current.updated(&id, patch) {
            Some(next) => Transition::applied(CommandOutcome::Updated(id), next),
            None => Transition::ignored(CommandOutcome::Ignored(id)),
        },
        TaskCommand::Delete { id } => match current.without(&id) {
            Some(next) => Transition::applied(CommandOutcome::Deleted(id), next),
            None => Transition::ignored(CommandOutcome::Ignored(id)),
        },
    }
}
