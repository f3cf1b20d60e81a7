//! Step definitions for status tag registry scenarios.

pub mod given;
pub mod when;
pub mod world;
