//! Port contracts for the task store.
//!
//! The store draws identifiers from a [`TaskIdGenerator`] and timestamps
//! from a `mockable::Clock`, so both can be swapped for deterministic ones.

pub mod id_generator;

pub use id_generator::TaskIdGenerator;
