//! Taskboard: a single-user task tracker.
//!
//! The crate centres on an in-memory task store that holds the ordered
//! collection of tasks and applies the add, update, and delete commands
//! issued by views.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task values and commands with no infrastructure
//!   dependencies
//! - **Ports**: Trait interfaces for identifier generation (the clock port is
//!   `mockable::Clock`)
//! - **Adapters**: Concrete identifier generators
//! - **Services**: The store, its transition function, and subscriptions
//!
//! # Modules
//!
//! - [`task`]: Task model and store
//! - [`shell`]: Command-line splitting for the interactive shell

pub mod shell;
pub mod task;
