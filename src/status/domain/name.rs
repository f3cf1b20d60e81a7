//! Validated status name type.

use super::StatusValidationError;
use crate::naming;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trimmed, non-empty status name.
///
/// The display form keeps the caller's casing. Comparisons between names go
/// through [`StatusName::normalized`], which is the trimmed, lowercased form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StatusName(String);

impl StatusName {
    /// Creates a validated status name.
    ///
    /// # Errors
    ///
    /// Returns [`StatusValidationError::EmptyName`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, StatusValidationError> {
        let raw = value.into();
        let name = naming::trimmed(&raw).ok_or(StatusValidationError::EmptyName)?;
        Ok(Self(name.to_owned()))
    }

    /// Returns the status name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the lowercased form used for uniqueness and reserved-name
    /// checks.
    #[must_use]
    pub fn normalized(&self) -> String {
        naming::normalize(&self.0)
    }

    /// Returns `true` when `other` names the same status, ignoring case and
    /// surrounding whitespace.
    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        self.normalized() == naming::normalize(other)
    }
}

impl TryFrom<String> for StatusName {
    type Error = StatusValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StatusName> for String {
    fn from(value: StatusName) -> Self {
        value.0
    }
}

impl AsRef<str> for StatusName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for StatusName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
