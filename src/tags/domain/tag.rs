//! Project tag aggregate.

use super::TagId;
use crate::project::ProjectId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Collection a tag belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagKind {
    /// Free-form label on backlog items.
    BacklogTag,
    /// Priority of a backlog item or requirement.
    Priority,
    /// Focus area of a requirement.
    RequirementFocus,
    /// Type of a requirement.
    RequirementType,
}

impl TagKind {
    /// Returns the stable storage label of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BacklogTag => "backlog_tag",
            Self::Priority => "priority",
            Self::RequirementFocus => "requirement_focus",
            Self::RequirementType => "requirement_type",
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named, coloured label of one project collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    id: TagId,
    project_id: ProjectId,
    kind: TagKind,
    name: String,
    color: String,
    deleted: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Tag {
    /// Creates a live tag. `name` must already be trimmed and validated.
    pub(crate) fn new(
        project_id: ProjectId,
        kind: TagKind,
        name: String,
        color: String,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TagId::new(),
            project_id,
            kind,
            name,
            color,
            deleted: false,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the tag identifier.
    #[must_use]
    pub const fn id(&self) -> TagId {
        self.id
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the collection of the tag.
    #[must_use]
    pub const fn kind(&self) -> TagKind {
        self.kind
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the display colour.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns `true` once the tag has been soft-deleted.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub(crate) fn rename(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn recolor(&mut self, color: String) {
        self.color = color;
    }

    pub(crate) const fn mark_deleted(&mut self) {
        self.deleted = true;
    }

    pub(crate) fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
