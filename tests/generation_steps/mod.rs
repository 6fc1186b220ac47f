//! Step definitions for component generation scenarios.

pub mod given;
pub mod then;
pub mod when;
