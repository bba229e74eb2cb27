//! Step definitions for task store scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
