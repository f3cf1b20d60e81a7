//! Port contracts for project tag persistence.

pub mod repository;

pub use repository::{TagRepository, TagRepositoryError, TagRepositoryResult};
