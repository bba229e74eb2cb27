//! Domain model for the task tracker.
//!
//! Tasks, their validated fields, the add and update payloads, and the
//! command set that the store applies. Nothing here performs I/O; the only
//! external inputs are the identifier and clock passed in at creation.

mod command;
mod error;
mod ids;
mod list;
mod priority;
mod task;

pub use command::{CommandOutcome, TaskCommand};
pub use error::{ParsePriorityError, TaskDomainError};
pub use ids::{TaskId, TaskText, TaskTitle};
pub use list::TaskList;
pub use priority::Priority;
pub use task::{NewTask, Task, TaskPatch};
