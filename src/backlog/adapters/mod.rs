//! Adapter implementations of the backlog ports.

pub mod memory;
