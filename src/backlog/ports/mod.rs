//! Port contracts for backlog persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by backlog services.

pub mod repository;

pub use repository::{BacklogRepository, BacklogRepositoryError, BacklogRepositoryResult};
