//! Registry rules applied to the status tags of one project.

use super::{
    StatusName, StatusPolicy, StatusTag, StatusTagId, StatusValidationError,
    policy::AWAITS_REVIEW_STATUS_NAME,
};
use crate::project::ProjectId;
use mockable::Clock;
use std::collections::HashSet;

/// Request payload for creating a status tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateStatusRequest {
    name: String,
    color: String,
    marks_task_as_done: bool,
}

impl CreateStatusRequest {
    /// Creates a request with all status fields.
    #[must_use]
    pub fn new(name: impl Into<String>, color: impl Into<String>, marks_task_as_done: bool) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            marks_task_as_done,
        }
    }
}

/// Partial update applied by [`StatusTagRegistry::modify_status`].
///
/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusPatch {
    name: Option<String>,
    color: Option<String>,
    marks_task_as_done: Option<bool>,
    order_index: Option<u32>,
}

impl StatusPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the new status name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the new display colour.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets whether tasks in this status count as resolved.
    #[must_use]
    pub const fn with_marks_task_as_done(mut self, marks_task_as_done: bool) -> Self {
        self.marks_task_as_done = Some(marks_task_as_done);
        self
    }

    /// Sets the new board position. The position must not be held by
    /// another active status.
    #[must_use]
    pub const fn with_order_index(mut self, order_index: u32) -> Self {
        self.order_index = Some(order_index);
        self
    }
}

/// Selects which statuses apply to a kind of backlog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusScope {
    /// User stories and generic items: the review status is hidden.
    Standard,
    /// Issues: every active status applies, including the review status.
    Issue,
}

/// The status tags of one project together with the rules guarding them.
///
/// The registry is built from tags the caller has already fetched, applies a
/// mutation in memory, and hands back the tags that must be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTagRegistry {
    project_id: ProjectId,
    policy: StatusPolicy,
    tags: Vec<StatusTag>,
}

impl StatusTagRegistry {
    /// Builds a registry over the given tags.
    ///
    /// Tags belonging to other projects are discarded.
    #[must_use]
    pub fn new(
        project_id: ProjectId,
        policy: StatusPolicy,
        tags: impl IntoIterator<Item = StatusTag>,
    ) -> Self {
        let owned = tags
            .into_iter()
            .filter(|tag| tag.project_id() == project_id)
            .collect();
        Self {
            project_id,
            policy,
            tags: owned,
        }
    }

    /// Returns the project the registry belongs to.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the protected-name policy in force.
    #[must_use]
    pub const fn policy(&self) -> &StatusPolicy {
        &self.policy
    }

    /// Returns the non-deleted tags sorted by order index, ties by name.
    #[must_use]
    pub fn list_active(&self) -> Vec<StatusTag> {
        let mut active: Vec<StatusTag> = self.active().cloned().collect();
        active.sort_by(|left, right| {
            left.order_index()
                .cmp(&right.order_index())
                .then_with(|| left.name().normalized().cmp(&right.name().normalized()))
        });
        active
    }

    /// Returns the active tags that apply to the given scope.
    #[must_use]
    pub fn active_for_scope(&self, scope: StatusScope) -> Vec<StatusTag> {
        self.list_active()
            .into_iter()
            .filter(|tag| {
                scope == StatusScope::Issue || !tag.name().matches(AWAITS_REVIEW_STATUS_NAME)
            })
            .collect()
    }

    /// Finds an active tag by identifier.
    #[must_use]
    pub fn find_active(&self, id: StatusTagId) -> Option<&StatusTag> {
        self.active().find(|tag| tag.id() == id)
    }

    /// Returns the identifiers of active tags that mark tasks as done, in
    /// board order.
    #[must_use]
    pub fn done_status_ids(&self) -> Vec<StatusTagId> {
        self.list_active()
            .iter()
            .filter(|tag| tag.marks_task_as_done())
            .map(StatusTag::id)
            .collect()
    }

    /// Creates a status tag at the end of the board.
    ///
    /// # Errors
    ///
    /// Returns [`StatusValidationError::EmptyName`],
    /// [`StatusValidationError::ReservedName`], or
    /// [`StatusValidationError::DuplicateName`] when the name is rejected.
    pub fn create_status(
        &mut self,
        request: CreateStatusRequest,
        clock: &impl Clock,
    ) -> Result<StatusTag, StatusValidationError> {
        let CreateStatusRequest {
            name,
            color,
            marks_task_as_done,
        } = request;

        let status_name = self.validate_name(&name, None)?;
        let tag = StatusTag::new(
            self.project_id,
            status_name,
            color,
            marks_task_as_done,
            self.next_order_index(),
            clock,
        );
        self.tags.push(tag.clone());
        Ok(tag)
    }

    /// Applies a partial update to an active, unprotected status tag.
    ///
    /// # Errors
    ///
    /// Returns [`StatusValidationError::UnknownStatus`] when no active tag has
    /// the identifier, [`StatusValidationError::NotModifiable`] when the tag
    /// bears a protected name, [`StatusValidationError::OrderIndexTaken`]
    /// when another active tag holds the new position, or a name error when
    /// the new name is rejected.
    pub fn modify_status(
        &mut self,
        id: StatusTagId,
        patch: StatusPatch,
        clock: &impl Clock,
    ) -> Result<StatusTag, StatusValidationError> {
        self.ensure_modifiable(id)?;
        let StatusPatch {
            name,
            color,
            marks_task_as_done,
            order_index,
        } = patch;
        let new_name = name
            .map(|raw| self.validate_name(&raw, Some(id)))
            .transpose()?;
        if let Some(position) = order_index {
            self.ensure_position_free(position, id)?;
        }

        let tag = self.active_mut(id)?;
        if let Some(status_name) = new_name {
            tag.rename(status_name);
        }
        if let Some(new_color) = color {
            tag.recolor(new_color);
        }
        if let Some(done) = marks_task_as_done {
            tag.set_marks_task_as_done(done);
        }
        if let Some(position) = order_index {
            tag.set_order_index(position);
        }
        tag.touch(clock);
        Ok(tag.clone())
    }

    /// Soft-deletes an active, unprotected status tag.
    ///
    /// The order indexes of the remaining tags are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StatusValidationError::UnknownStatus`] when no active tag has
    /// the identifier or [`StatusValidationError::NotModifiable`] when the tag
    /// bears a protected name.
    pub fn delete_status(
        &mut self,
        id: StatusTagId,
        clock: &impl Clock,
    ) -> Result<StatusTag, StatusValidationError> {
        self.ensure_modifiable(id)?;
        let tag = self.active_mut(id)?;
        tag.mark_deleted();
        tag.touch(clock);
        Ok(tag.clone())
    }

    /// Rewrites the order index of every active tag from the caller's order.
    ///
    /// Identifiers that name no active tag are ignored. The remaining list
    /// must name every active tag exactly once; each tag then takes its
    /// position in that list. Returns the reordered tags in their new order.
    ///
    /// # Errors
    ///
    /// Returns [`StatusValidationError::MalformedReorder`] when an active tag
    /// is missing or named twice.
    pub fn reorder_statuses(
        &mut self,
        ordered_ids: &[StatusTagId],
        clock: &impl Clock,
    ) -> Result<Vec<StatusTag>, StatusValidationError> {
        let active_ids: HashSet<StatusTagId> = self.active().map(StatusTag::id).collect();
        let mut seen = HashSet::with_capacity(active_ids.len());
        let mut retained = Vec::with_capacity(active_ids.len());
        let mut repeated = false;
        for id in ordered_ids.iter().filter(|id| active_ids.contains(*id)) {
            if seen.insert(*id) {
                retained.push(*id);
            } else {
                repeated = true;
            }
        }

        if repeated || retained.len() != active_ids.len() {
            return Err(StatusValidationError::MalformedReorder {
                expected: active_ids.len(),
                received: retained.len(),
            });
        }

        let mut reordered = Vec::with_capacity(retained.len());
        for (position, id) in retained.into_iter().enumerate() {
            let tag = self.active_mut(id)?;
            tag.set_order_index(u32::try_from(position).unwrap_or(u32::MAX));
            tag.touch(clock);
            reordered.push(tag.clone());
        }
        Ok(reordered)
    }

    /// Creates the system default statuses when the project has none.
    ///
    /// Defaults bear the protected names, so the reserved-name rule does not
    /// apply here. Returns the created tags; a project that already has
    /// active statuses is left unchanged and yields an empty list.
    pub fn seed_defaults(&mut self, clock: &impl Clock) -> Vec<StatusTag> {
        if self.active().next().is_some() {
            return Vec::new();
        }

        let mut created = Vec::new();
        for (position, default) in self.policy.default_statuses().into_iter().enumerate() {
            let Ok(name) = StatusName::new(default.name) else {
                continue;
            };
            let tag = StatusTag::new(
                self.project_id,
                name,
                default.color,
                default.marks_task_as_done,
                u32::try_from(position).unwrap_or(u32::MAX),
                clock,
            );
            self.tags.push(tag.clone());
            created.push(tag);
        }
        created
    }

    fn active(&self) -> impl Iterator<Item = &StatusTag> {
        self.tags.iter().filter(|tag| !tag.is_deleted())
    }

    fn active_mut(&mut self, id: StatusTagId) -> Result<&mut StatusTag, StatusValidationError> {
        self.tags
            .iter_mut()
            .find(|tag| tag.id() == id && !tag.is_deleted())
            .ok_or(StatusValidationError::UnknownStatus(id))
    }

    fn ensure_modifiable(&self, id: StatusTagId) -> Result<(), StatusValidationError> {
        let current = self
            .find_active(id)
            .ok_or(StatusValidationError::UnknownStatus(id))?;
        if self.policy.is_protected(current.name().as_str()) {
            return Err(StatusValidationError::NotModifiable(
                current.name().as_str().to_owned(),
            ));
        }
        Ok(())
    }

    fn ensure_position_free(
        &self,
        order_index: u32,
        exclude: StatusTagId,
    ) -> Result<(), StatusValidationError> {
        let taken = self
            .active()
            .any(|tag| tag.id() != exclude && tag.order_index() == order_index);
        if taken {
            return Err(StatusValidationError::OrderIndexTaken(order_index));
        }
        Ok(())
    }

    fn validate_name(
        &self,
        raw: &str,
        exclude: Option<StatusTagId>,
    ) -> Result<StatusName, StatusValidationError> {
        let name = StatusName::new(raw)?;
        if self.policy.is_protected(name.as_str()) {
            return Err(StatusValidationError::ReservedName(name.as_str().to_owned()));
        }

        let normalized = name.normalized();
        let taken = self
            .active()
            .filter(|tag| Some(tag.id()) != exclude)
            .any(|tag| tag.name().normalized() == normalized);
        if taken {
            return Err(StatusValidationError::DuplicateName(name.as_str().to_owned()));
        }
        Ok(name)
    }

    fn next_order_index(&self) -> u32 {
        self.active()
            .map(StatusTag::order_index)
            .max()
            .map_or(0, |highest| highest.saturating_add(1))
    }
}
