//! Collection rules applied to every tag mutation.

use super::{Tag, TagId, TagKind, TagValidationError};
use crate::{
    naming::{self, normalize},
    project::ProjectId,
};
use mockable::Clock;

/// Request payload for creating a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTagRequest {
    name: String,
    color: String,
}

impl CreateTagRequest {
    /// Creates a request with a name and colour.
    #[must_use]
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Partial update of a tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagPatch {
    name: Option<String>,
    color: Option<String>,
}

impl TagPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the new name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the new colour.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// The tags of one project and kind, with their uniqueness rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCollection {
    project_id: ProjectId,
    kind: TagKind,
    tags: Vec<Tag>,
}

impl TagCollection {
    /// Builds a collection from fetched tags.
    ///
    /// Tags of other projects or kinds are discarded.
    #[must_use]
    pub fn new(project_id: ProjectId, kind: TagKind, tags: Vec<Tag>) -> Self {
        Self {
            project_id,
            kind,
            tags: tags
                .into_iter()
                .filter(|tag| tag.project_id() == project_id && tag.kind() == kind)
                .collect(),
        }
    }

    /// Returns the live tags sorted by name, ignoring case.
    #[must_use]
    pub fn list_active(&self) -> Vec<Tag> {
        let mut active: Vec<Tag> = self.active().cloned().collect();
        active.sort_by_cached_key(|tag| normalize(tag.name()));
        active
    }

    /// Creates a tag.
    ///
    /// # Errors
    ///
    /// Returns [`TagValidationError::EmptyName`] or
    /// [`TagValidationError::DuplicateName`] when the name is rejected.
    pub fn create_tag(
        &mut self,
        request: CreateTagRequest,
        clock: &impl Clock,
    ) -> Result<Tag, TagValidationError> {
        let CreateTagRequest { name, color } = request;
        let valid_name = self.validate_name(&name, None)?;
        let tag = Tag::new(self.project_id, self.kind, valid_name, color, clock);
        self.tags.push(tag.clone());
        Ok(tag)
    }

    /// Applies a partial update to a live tag.
    ///
    /// # Errors
    ///
    /// Returns [`TagValidationError::UnknownTag`] when no live tag has the
    /// identifier, or a name error when the new name is rejected.
    pub fn modify_tag(
        &mut self,
        id: TagId,
        patch: TagPatch,
        clock: &impl Clock,
    ) -> Result<Tag, TagValidationError> {
        if self.active().all(|tag| tag.id() != id) {
            return Err(TagValidationError::UnknownTag(id));
        }
        let TagPatch { name, color } = patch;
        let new_name = name
            .map(|raw| self.validate_name(&raw, Some(id)))
            .transpose()?;
        let tag = self.active_mut(id)?;
        if let Some(valid) = new_name {
            tag.rename(valid);
        }
        if let Some(new_color) = color {
            tag.recolor(new_color);
        }
        tag.touch(clock);
        Ok(tag.clone())
    }

    /// Soft-deletes a live tag.
    ///
    /// # Errors
    ///
    /// Returns [`TagValidationError::UnknownTag`] when no live tag has the
    /// identifier.
    pub fn delete_tag(&mut self, id: TagId, clock: &impl Clock) -> Result<Tag, TagValidationError> {
        let tag = self.active_mut(id)?;
        tag.mark_deleted();
        tag.touch(clock);
        Ok(tag.clone())
    }

    fn active(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter().filter(|tag| !tag.is_deleted())
    }

    fn active_mut(&mut self, id: TagId) -> Result<&mut Tag, TagValidationError> {
        self.tags
            .iter_mut()
            .find(|tag| tag.id() == id && !tag.is_deleted())
            .ok_or(TagValidationError::UnknownTag(id))
    }

    fn validate_name(
        &self,
        raw: &str,
        exclude: Option<TagId>,
    ) -> Result<String, TagValidationError> {
        let trimmed = naming::trimmed(raw).ok_or(TagValidationError::EmptyName)?;
        let wanted = normalize(trimmed);
        let taken = self
            .active()
            .filter(|tag| Some(tag.id()) != exclude)
            .any(|tag| normalize(tag.name()) == wanted);
        if taken {
            return Err(TagValidationError::DuplicateName(trimmed.to_owned()));
        }
        Ok(trimmed.to_owned())
    }
}
