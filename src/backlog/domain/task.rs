//! Task entity: the child unit of work of a backlog item.

use super::{BacklogDomainError, BacklogItemId, TaskId};
use crate::status::domain::StatusTagId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Unit of work belonging to one backlog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    item_id: BacklogItemId,
    name: String,
    status_id: Option<StatusTagId>,
    deleted: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task without a status.
    ///
    /// # Errors
    ///
    /// Returns [`BacklogDomainError::EmptyTaskName`] when the name is empty
    /// after trimming.
    pub fn new(
        item_id: BacklogItemId,
        name: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, BacklogDomainError> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BacklogDomainError::EmptyTaskName);
        }
        let timestamp = clock.utc();
        Ok(Self {
            id: TaskId::new(),
            item_id,
            name: trimmed.to_owned(),
            status_id: None,
            deleted: false,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Returns the same task with the given status.
    #[must_use]
    pub const fn with_status(mut self, status_id: StatusTagId) -> Self {
        self.status_id = Some(status_id);
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning backlog item.
    #[must_use]
    pub const fn item_id(&self) -> BacklogItemId {
        self.item_id
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the task status, or `None` when unset.
    #[must_use]
    pub const fn status_id(&self) -> Option<StatusTagId> {
        self.status_id
    }

    /// Returns `true` when the task has been soft-deleted.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Sets or clears the task status.
    pub fn set_status(&mut self, status_id: Option<StatusTagId>, clock: &impl Clock) {
        self.status_id = status_id;
        self.touch(clock);
    }

    /// Soft-deletes the task.
    pub fn mark_deleted(&mut self, clock: &impl Clock) {
        self.deleted = true;
        self.touch(clock);
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
