//! Service layer for project tag collections.

use crate::{
    project::ProjectId,
    tags::{
        domain::{
            CreateTagRequest, Tag, TagCollection, TagId, TagKind, TagPatch, TagValidationError,
        },
        ports::{TagRepository, TagRepositoryError},
    },
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Service-level errors for tag operations.
#[derive(Debug, Error)]
pub enum TagServiceError {
    /// A collection rule rejected the mutation.
    #[error(transparent)]
    Validation(#[from] TagValidationError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TagRepositoryError),
}

/// Result type for tag service operations.
pub type TagServiceResult<T> = Result<T, TagServiceError>;

/// Tag collection orchestration service.
#[derive(Clone)]
pub struct TagService<R, C>
where
    R: TagRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TagService<R, C>
where
    R: TagRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new tag service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a tag in one project collection.
    ///
    /// # Errors
    ///
    /// Returns [`TagServiceError::Validation`] when the name is empty or
    /// taken and [`TagServiceError::Repository`] when persistence fails.
    pub async fn create_tag(
        &self,
        project_id: ProjectId,
        kind: TagKind,
        request: CreateTagRequest,
    ) -> TagServiceResult<Tag> {
        let mut collection = self.collection(project_id, kind).await?;
        let tag = collection
            .create_tag(request, &*self.clock)
            .inspect_err(|err| warn!(%project_id, %kind, error = %err, "tag creation rejected"))?;
        self.repository.store(&tag).await?;
        info!(%project_id, %kind, tag_id = %tag.id(), "tag created");
        Ok(tag)
    }

    /// Applies a partial update to a tag.
    ///
    /// # Errors
    ///
    /// Returns [`TagServiceError::Validation`] when the tag is unknown or
    /// the new name is rejected, and [`TagServiceError::Repository`] when
    /// persistence fails.
    pub async fn modify_tag(&self, tag_id: TagId, patch: TagPatch) -> TagServiceResult<Tag> {
        let mut collection = self.owning_collection(tag_id).await?;
        let tag = collection
            .modify_tag(tag_id, patch, &*self.clock)
            .inspect_err(|err| warn!(%tag_id, error = %err, "tag modification rejected"))?;
        self.repository.update(&tag).await?;
        info!(%tag_id, kind = %tag.kind(), "tag modified");
        Ok(tag)
    }

    /// Soft-deletes a tag.
    ///
    /// # Errors
    ///
    /// Returns [`TagServiceError::Validation`] when the tag is unknown or
    /// already deleted, and [`TagServiceError::Repository`] when persistence
    /// fails.
    pub async fn delete_tag(&self, tag_id: TagId) -> TagServiceResult<Tag> {
        let mut collection = self.owning_collection(tag_id).await?;
        let tag = collection
            .delete_tag(tag_id, &*self.clock)
            .inspect_err(|err| warn!(%tag_id, error = %err, "tag deletion rejected"))?;
        self.repository.update(&tag).await?;
        info!(%tag_id, kind = %tag.kind(), "tag deleted");
        Ok(tag)
    }

    /// Returns the live tags of one project collection, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns [`TagServiceError::Repository`] when the lookup fails.
    pub async fn list_tags(
        &self,
        project_id: ProjectId,
        kind: TagKind,
    ) -> TagServiceResult<Vec<Tag>> {
        Ok(self.collection(project_id, kind).await?.list_active())
    }

    async fn collection(
        &self,
        project_id: ProjectId,
        kind: TagKind,
    ) -> TagServiceResult<TagCollection> {
        let tags = self.repository.list_for_project(project_id, kind).await?;
        Ok(TagCollection::new(project_id, kind, tags))
    }

    async fn owning_collection(&self, tag_id: TagId) -> TagServiceResult<TagCollection> {
        let tag = self
            .repository
            .find_by_id(tag_id)
            .await?
            .ok_or(TagValidationError::UnknownTag(tag_id))?;
        self.collection(tag.project_id(), tag.kind()).await
    }
}
