//! Repository port for project tag persistence.

use crate::{
    project::ProjectId,
    tags::domain::{Tag, TagId, TagKind},
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for tag repository operations.
pub type TagRepositoryResult<T> = Result<T, TagRepositoryError>;

/// Project tag persistence contract.
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Stores a new tag.
    ///
    /// # Errors
    ///
    /// Returns [`TagRepositoryError::DuplicateTag`] when the tag ID already
    /// exists.
    async fn store(&self, tag: &Tag) -> TagRepositoryResult<()>;

    /// Persists changes to an existing tag.
    ///
    /// # Errors
    ///
    /// Returns [`TagRepositoryError::NotFound`] when the tag does not exist.
    async fn update(&self, tag: &Tag) -> TagRepositoryResult<()>;

    /// Finds a tag by identifier, deleted or not.
    async fn find_by_id(&self, id: TagId) -> TagRepositoryResult<Option<Tag>>;

    /// Returns every tag of one project collection, including soft-deleted
    /// ones.
    async fn list_for_project(
        &self,
        project_id: ProjectId,
        kind: TagKind,
    ) -> TagRepositoryResult<Vec<Tag>>;
}

/// Errors returned by tag repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TagRepositoryError {
    /// A tag with the same identifier already exists.
    #[error("duplicate tag identifier: {0}")]
    DuplicateTag(TagId),

    /// The tag was not found.
    #[error("tag not found: {0}")]
    NotFound(TagId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TagRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
