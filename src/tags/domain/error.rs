//! Validation errors for project tags.

use super::TagId;
use thiserror::Error;

/// Errors returned when a tag mutation breaks a collection rule.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TagValidationError {
    /// The name is empty after trimming.
    #[error("tag name must not be empty")]
    EmptyName,

    /// A live tag of the same kind already bears the name.
    #[error("a tag named '{0}' already exists")]
    DuplicateName(String),

    /// No live tag of the collection has the identifier.
    #[error("unknown tag: {0}")]
    UnknownTag(TagId),
}
