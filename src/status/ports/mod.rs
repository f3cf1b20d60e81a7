//! Port contracts for status tag persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by status services.

pub mod repository;

pub use repository::{StatusTagRepository, StatusTagRepositoryError, StatusTagRepositoryResult};
