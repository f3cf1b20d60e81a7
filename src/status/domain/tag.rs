//! Status tag aggregate root.

use super::{StatusName, StatusTagId};
use crate::project::ProjectId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Named, coloured, ordered workflow state of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTag {
    id: StatusTagId,
    project_id: ProjectId,
    name: StatusName,
    color: String,
    order_index: u32,
    marks_task_as_done: bool,
    deleted: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl StatusTag {
    /// Creates a new active status tag.
    #[must_use]
    pub fn new(
        project_id: ProjectId,
        name: StatusName,
        color: impl Into<String>,
        marks_task_as_done: bool,
        order_index: u32,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: StatusTagId::new(),
            project_id,
            name,
            color: color.into(),
            order_index,
            marks_task_as_done,
            deleted: false,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the status identifier.
    #[must_use]
    pub const fn id(&self) -> StatusTagId {
        self.id
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &StatusName {
        &self.name
    }

    /// Returns the display colour.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the board position.
    #[must_use]
    pub const fn order_index(&self) -> u32 {
        self.order_index
    }

    /// Returns `true` when tasks in this status count as resolved.
    #[must_use]
    pub const fn marks_task_as_done(&self) -> bool {
        self.marks_task_as_done
    }

    /// Returns `true` when the status has been soft-deleted.
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

    pub(crate) fn rename(&mut self, name: StatusName) {
        self.name = name;
    }

    pub(crate) fn recolor(&mut self, color: String) {
        self.color = color;
    }

    pub(crate) const fn set_marks_task_as_done(&mut self, marks_task_as_done: bool) {
        self.marks_task_as_done = marks_task_as_done;
    }

    pub(crate) const fn set_order_index(&mut self, order_index: u32) {
        self.order_index = order_index;
    }

    pub(crate) const fn mark_deleted(&mut self) {
        self.deleted = true;
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    pub(crate) fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
