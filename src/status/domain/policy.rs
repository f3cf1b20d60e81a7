//! Protected-name policy for status tags.

use crate::naming::normalize;
use serde::{Deserialize, Serialize};

/// Name of the status given to items that have not been started.
pub const TODO_STATUS_NAME: &str = "Todo";
/// Name of the status given to items with work in progress.
pub const DOING_STATUS_NAME: &str = "Doing";
/// Name of the status given to finished items.
pub const DONE_STATUS_NAME: &str = "Done";
/// Name of the review status used by issues.
pub const AWAITS_REVIEW_STATUS_NAME: &str = "Awaits Review";

/// Status created for every new project, in board order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DefaultStatus {
    pub(crate) name: &'static str,
    pub(crate) color: &'static str,
    pub(crate) marks_task_as_done: bool,
}

const BASE_DEFAULTS: [DefaultStatus; 3] = [
    DefaultStatus {
        name: TODO_STATUS_NAME,
        color: "#0737E3",
        marks_task_as_done: false,
    },
    DefaultStatus {
        name: DOING_STATUS_NAME,
        color: "#AD7C00",
        marks_task_as_done: false,
    },
    DefaultStatus {
        name: DONE_STATUS_NAME,
        color: "#009719",
        marks_task_as_done: true,
    },
];

const AWAITS_REVIEW_DEFAULT: DefaultStatus = DefaultStatus {
    name: AWAITS_REVIEW_STATUS_NAME,
    color: "#FF4D00",
    marks_task_as_done: false,
};

/// Configuration of the status names reserved by the system.
///
/// Protected names can never be given to a new status, and a status that
/// currently bears one can be neither modified nor deleted.
///
/// # Examples
///
/// ```
/// use scrumboard::status::domain::StatusPolicy;
///
/// let policy = StatusPolicy::default();
/// assert!(policy.is_protected("  awaits review "));
///
/// let basic = StatusPolicy::without_review();
/// assert!(!basic.is_protected("Awaits Review"));
/// assert!(basic.is_protected("DONE"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusPolicy {
    /// Reserved status names, compared trimmed and case-insensitively.
    pub protected_names: Vec<String>,
}

impl Default for StatusPolicy {
    fn default() -> Self {
        Self {
            protected_names: vec![
                TODO_STATUS_NAME.to_owned(),
                DOING_STATUS_NAME.to_owned(),
                DONE_STATUS_NAME.to_owned(),
                AWAITS_REVIEW_STATUS_NAME.to_owned(),
            ],
        }
    }
}

impl StatusPolicy {
    /// Creates a policy reserving only Todo, Doing, and Done.
    ///
    /// Useful for boards that have no review column.
    #[must_use]
    pub fn without_review() -> Self {
        Self {
            protected_names: vec![
                TODO_STATUS_NAME.to_owned(),
                DOING_STATUS_NAME.to_owned(),
                DONE_STATUS_NAME.to_owned(),
            ],
        }
    }

    /// Parses a policy from its JSON representation.
    ///
    /// Missing fields fall back to [`StatusPolicy::default`].
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] when the document is not
    /// a valid policy.
    pub fn from_json(document: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(document)
    }

    /// Returns `true` when `name` is reserved by this policy.
    #[must_use]
    pub fn is_protected(&self, name: &str) -> bool {
        let candidate = normalize(name);
        self.protected_names
            .iter()
            .any(|protected| normalize(protected) == candidate)
    }

    /// Returns `true` when the review status is part of this policy.
    #[must_use]
    pub fn includes_awaits_review(&self) -> bool {
        self.is_protected(AWAITS_REVIEW_STATUS_NAME)
    }

    /// Returns the statuses seeded into a new project under this policy.
    pub(crate) fn default_statuses(&self) -> Vec<DefaultStatus> {
        let mut defaults = BASE_DEFAULTS.to_vec();
        if self.includes_awaits_review() {
            defaults.push(AWAITS_REVIEW_DEFAULT);
        }
        defaults
    }
}
