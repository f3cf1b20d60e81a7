//! Error types for status tag validation.

use super::StatusTagId;
use thiserror::Error;

/// Errors returned when a status tag mutation breaks a registry rule.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StatusValidationError {
    /// The status name is empty after trimming.
    #[error("status name must not be empty")]
    EmptyName,

    /// The status name is reserved by the system.
    #[error("status name '{0}' is reserved")]
    ReservedName(String),

    /// Another active status in the project already uses the name.
    #[error("a status named '{0}' already exists")]
    DuplicateName(String),

    /// The status bears a protected name and cannot be changed or deleted.
    #[error("status '{0}' is not modifiable")]
    NotModifiable(String),

    /// The reorder list does not name every active status exactly once.
    #[error("malformed reorder: expected {expected} active statuses, received {received}")]
    MalformedReorder {
        /// Number of active statuses in the project.
        expected: usize,
        /// Number of distinct active statuses named by the caller.
        received: usize,
    },

    /// Another active status already sits at the board position.
    #[error("board position {0} is taken by another status")]
    OrderIndexTaken(u32),

    /// No active status has the given identifier.
    #[error("unknown status: {0}")]
    UnknownStatus(StatusTagId),
}
