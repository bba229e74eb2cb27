//! Application services: the task store and its command transition.

mod store;
mod subscription;
mod transition;

pub use store::TaskStore;
pub use subscription::{StoreClosed, TaskSubscription};
pub use transition::{Transition, transition};
