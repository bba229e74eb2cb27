//! Adapter implementations for task store ports.

pub mod ids;

pub use ids::{SequentialTaskIdGenerator, UuidTaskIdGenerator};
