//! Adapter implementations of the status ports.

pub mod memory;
