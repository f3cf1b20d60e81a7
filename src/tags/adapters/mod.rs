//! Adapter implementations of the tag ports.

pub mod memory;
