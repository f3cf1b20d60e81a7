//! Service layer for status tag management.
//!
//! Provides [`StatusRegistryService`] which loads the status tags of a
//! project, applies a [`StatusTagRegistry`] rule, and persists the result.

use crate::{
    project::ProjectId,
    status::{
        domain::{
            CreateStatusRequest, StatusPatch, StatusPolicy, StatusScope, StatusTag, StatusTagId,
            StatusTagRegistry, StatusValidationError,
        },
        ports::{StatusTagRepository, StatusTagRepositoryError},
    },
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Service-level errors for status tag operations.
#[derive(Debug, Error)]
pub enum StatusRegistryServiceError {
    /// A registry rule rejected the mutation.
    #[error(transparent)]
    Validation(#[from] StatusValidationError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] StatusTagRepositoryError),
}

/// Result type for status registry service operations.
pub type StatusRegistryServiceResult<T> = Result<T, StatusRegistryServiceError>;

/// Status tag management orchestration service.
#[derive(Clone)]
pub struct StatusRegistryService<R, C>
where
    R: StatusTagRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    policy: StatusPolicy,
}

impl<R, C> StatusRegistryService<R, C>
where
    R: StatusTagRepository,
    C: Clock + Send + Sync,
{
    /// Creates a service enforcing the default [`StatusPolicy`].
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self::with_policy(repository, clock, StatusPolicy::default())
    }

    /// Creates a service enforcing the given protected-name policy.
    #[must_use]
    pub const fn with_policy(repository: Arc<R>, clock: Arc<C>, policy: StatusPolicy) -> Self {
        Self {
            repository,
            clock,
            policy,
        }
    }

    /// Returns the protected-name policy in force.
    #[must_use]
    pub const fn policy(&self) -> &StatusPolicy {
        &self.policy
    }

    /// Loads the registry of a project.
    ///
    /// # Errors
    ///
    /// Returns [`StatusRegistryServiceError::Repository`] when the tags cannot
    /// be fetched.
    pub async fn registry(
        &self,
        project_id: ProjectId,
    ) -> StatusRegistryServiceResult<StatusTagRegistry> {
        let tags = self.repository.list_for_project(project_id).await?;
        Ok(StatusTagRegistry::new(project_id, self.policy.clone(), tags))
    }

    /// Creates a status tag at the end of the project's board.
    ///
    /// # Errors
    ///
    /// Returns [`StatusRegistryServiceError::Validation`] when the name is
    /// empty, reserved, or taken, and
    /// [`StatusRegistryServiceError::Repository`] when persistence fails.
    pub async fn create_status(
        &self,
        project_id: ProjectId,
        request: CreateStatusRequest,
    ) -> StatusRegistryServiceResult<StatusTag> {
        let mut registry = self.registry(project_id).await?;
        let tag = registry
            .create_status(request, &*self.clock)
            .inspect_err(|err| warn!(%project_id, error = %err, "status creation rejected"))?;
        self.repository.store(&tag).await?;
        info!(%project_id, status_id = %tag.id(), name = %tag.name(), "status created");
        Ok(tag)
    }

    /// Applies a partial update to a status tag.
    ///
    /// # Errors
    ///
    /// Returns [`StatusRegistryServiceError::Validation`] when the tag is
    /// unknown or protected, or the new name is rejected, and
    /// [`StatusRegistryServiceError::Repository`] when persistence fails.
    pub async fn modify_status(
        &self,
        project_id: ProjectId,
        status_id: StatusTagId,
        patch: StatusPatch,
    ) -> StatusRegistryServiceResult<StatusTag> {
        let mut registry = self.registry(project_id).await?;
        let tag = registry
            .modify_status(status_id, patch, &*self.clock)
            .inspect_err(|err| {
                warn!(%project_id, %status_id, error = %err, "status update rejected");
            })?;
        self.repository.update(&tag).await?;
        info!(%project_id, %status_id, name = %tag.name(), "status modified");
        Ok(tag)
    }

    /// Soft-deletes a status tag and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`StatusRegistryServiceError::Validation`] when the tag is
    /// unknown or protected, and [`StatusRegistryServiceError::Repository`]
    /// when persistence fails.
    pub async fn delete_status(
        &self,
        project_id: ProjectId,
        status_id: StatusTagId,
    ) -> StatusRegistryServiceResult<StatusTag> {
        let mut registry = self.registry(project_id).await?;
        let tag = registry
            .delete_status(status_id, &*self.clock)
            .inspect_err(|err| {
                warn!(%project_id, %status_id, error = %err, "status deletion rejected");
            })?;
        self.repository.update(&tag).await?;
        info!(%project_id, %status_id, "status deleted");
        Ok(tag)
    }

    /// Rewrites the board order of the project's active status tags.
    ///
    /// # Errors
    ///
    /// Returns [`StatusRegistryServiceError::Validation`] when the list does
    /// not name every active tag exactly once, and
    /// [`StatusRegistryServiceError::Repository`] when persistence fails.
    pub async fn reorder_statuses(
        &self,
        project_id: ProjectId,
        ordered_ids: &[StatusTagId],
    ) -> StatusRegistryServiceResult<Vec<StatusTag>> {
        let mut registry = self.registry(project_id).await?;
        let reordered = registry
            .reorder_statuses(ordered_ids, &*self.clock)
            .inspect_err(|err| warn!(%project_id, error = %err, "status reorder rejected"))?;
        self.repository.update_all(&reordered).await?;
        info!(%project_id, count = reordered.len(), "statuses reordered");
        Ok(reordered)
    }

    /// Seeds the system default statuses into a project without statuses.
    ///
    /// Returns the created tags, or an empty list when the project already
    /// has active statuses. The defaults are stored as one batch, so a failed
    /// seed leaves the project without statuses and can be retried.
    ///
    /// # Errors
    ///
    /// Returns [`StatusRegistryServiceError::Repository`] when persistence
    /// fails.
    pub async fn seed_defaults(
        &self,
        project_id: ProjectId,
    ) -> StatusRegistryServiceResult<Vec<StatusTag>> {
        let mut registry = self.registry(project_id).await?;
        let created = registry.seed_defaults(&*self.clock);
        if created.is_empty() {
            return Ok(created);
        }
        self.repository
            .store_all(&created)
            .await
            .inspect_err(|err| warn!(%project_id, error = %err, "default status seeding failed"))?;
        info!(%project_id, count = created.len(), "default statuses seeded");
        Ok(created)
    }

    /// Returns the active status tags of a project in board order.
    ///
    /// # Errors
    ///
    /// Returns [`StatusRegistryServiceError::Repository`] when the tags cannot
    /// be fetched.
    pub async fn list_active(
        &self,
        project_id: ProjectId,
    ) -> StatusRegistryServiceResult<Vec<StatusTag>> {
        Ok(self.registry(project_id).await?.list_active())
    }

    /// Returns the active status tags that apply to a scope, in board order.
    ///
    /// # Errors
    ///
    /// Returns [`StatusRegistryServiceError::Repository`] when the tags cannot
    /// be fetched.
    pub async fn list_for_scope(
        &self,
        project_id: ProjectId,
        scope: StatusScope,
    ) -> StatusRegistryServiceResult<Vec<StatusTag>> {
        Ok(self.registry(project_id).await?.active_for_scope(scope))
    }

    /// Finds a status tag by identifier, deleted or not.
    ///
    /// # Errors
    ///
    /// Returns [`StatusRegistryServiceError::Repository`] when persistence
    /// lookup fails.
    pub async fn find_by_id(
        &self,
        status_id: StatusTagId,
    ) -> StatusRegistryServiceResult<Option<StatusTag>> {
        Ok(self.repository.find_by_id(status_id).await?)
    }
}
