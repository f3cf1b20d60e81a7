//! Backlog item aggregate: the parent of tasks.

use super::{AutomaticStatusResolver, BacklogDomainError, BacklogItemId, Task};
use crate::{
    project::ProjectId,
    status::domain::{StatusScope, StatusTag, StatusTagId},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Kind of backlog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// A user story.
    UserStory,
    /// An issue raised against the product.
    Issue,
    /// Any other backlog item.
    GenericItem,
}

impl ItemKind {
    /// Returns the set of statuses that applies to items of this kind.
    #[must_use]
    pub const fn status_scope(self) -> StatusScope {
        match self {
            Self::Issue => StatusScope::Issue,
            Self::UserStory | Self::GenericItem => StatusScope::Standard,
        }
    }
}

/// Status mode of a backlog item.
///
/// Serialized as the status identifier, with `null` standing for
/// [`ItemStatus::Automatic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<StatusTagId>", into = "Option<StatusTagId>")]
pub enum ItemStatus {
    /// The status is derived from the item's tasks.
    #[default]
    Automatic,
    /// The status was set explicitly by a user.
    Explicit(StatusTagId),
}

impl ItemStatus {
    /// Returns the explicit status identifier, if any.
    #[must_use]
    pub const fn explicit_id(self) -> Option<StatusTagId> {
        match self {
            Self::Automatic => None,
            Self::Explicit(id) => Some(id),
        }
    }

    /// Returns `true` when the status is derived from tasks.
    #[must_use]
    pub const fn is_automatic(self) -> bool {
        matches!(self, Self::Automatic)
    }
}

impl From<Option<StatusTagId>> for ItemStatus {
    fn from(value: Option<StatusTagId>) -> Self {
        value.map_or(Self::Automatic, Self::Explicit)
    }
}

impl From<ItemStatus> for Option<StatusTagId> {
    fn from(value: ItemStatus) -> Self {
        value.explicit_id()
    }
}

/// User story, issue, or generic item that owns tasks and carries a status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BacklogItem {
    id: BacklogItemId,
    project_id: ProjectId,
    kind: ItemKind,
    name: String,
    status: ItemStatus,
    deleted: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl BacklogItem {
    /// Creates a backlog item in automatic status mode.
    ///
    /// # Errors
    ///
    /// Returns [`BacklogDomainError::EmptyItemName`] when the name is empty
    /// after trimming.
    pub fn new(
        project_id: ProjectId,
        kind: ItemKind,
        name: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, BacklogDomainError> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BacklogDomainError::EmptyItemName);
        }
        let timestamp = clock.utc();
        Ok(Self {
            id: BacklogItemId::new(),
            project_id,
            kind,
            name: trimmed.to_owned(),
            status: ItemStatus::Automatic,
            deleted: false,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Returns the item identifier.
    #[must_use]
    pub const fn id(&self) -> BacklogItemId {
        self.id
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the item kind.
    #[must_use]
    pub const fn kind(&self) -> ItemKind {
        self.kind
    }

    /// Returns the item name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the status mode.
    #[must_use]
    pub const fn status(&self) -> ItemStatus {
        self.status
    }

    /// Returns `true` when the item has been soft-deleted.
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

    /// Returns the status the item shows: the explicit one if set, else the
    /// status derived from `tasks`.
    #[must_use]
    pub fn effective_status_id(
        &self,
        tasks: &[Task],
        status_tags: &[StatusTag],
    ) -> Option<StatusTagId> {
        match self.status {
            ItemStatus::Explicit(id) => Some(id),
            ItemStatus::Automatic => AutomaticStatusResolver::resolve(self.id, tasks, status_tags),
        }
    }

    /// Sets the status mode.
    pub fn set_status(&mut self, status: ItemStatus, clock: &impl Clock) {
        self.status = status;
        self.touch(clock);
    }

    /// Soft-deletes the item.
    pub fn mark_deleted(&mut self, clock: &impl Clock) {
        self.deleted = true;
        self.touch(clock);
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
