//! Error types for backlog domain validation.

use thiserror::Error;

/// Errors returned while constructing backlog items and tasks.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BacklogDomainError {
    /// The backlog item name is empty after trimming.
    #[error("backlog item name must not be empty")]
    EmptyItemName,

    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyTaskName,
}
