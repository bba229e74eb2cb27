//! Task tracking for a single user.
//!
//! A [`services::TaskStore`] owns the ordered collection of tasks and
//! applies the three commands (add, update, delete) that every view goes
//! through. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The store and its transition function in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
