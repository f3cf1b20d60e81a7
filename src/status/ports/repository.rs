//! Repository port for status tag persistence.

use crate::{
    project::ProjectId,
    status::domain::{StatusTag, StatusTagId},
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for status tag repository operations.
pub type StatusTagRepositoryResult<T> = Result<T, StatusTagRepositoryError>;

/// Status tag persistence contract.
///
/// Name uniqueness is a registry rule, not a storage constraint: two
/// concurrent creates with the same name can both succeed.
#[async_trait]
pub trait StatusTagRepository: Send + Sync {
    /// Stores a new status tag.
    ///
    /// # Errors
    ///
    /// Returns [`StatusTagRepositoryError::DuplicateStatus`] when the tag ID
    /// already exists.
    async fn store(&self, tag: &StatusTag) -> StatusTagRepositoryResult<()>;

    /// Stores several new status tags as one batch.
    ///
    /// Either every tag is stored or none is.
    ///
    /// # Errors
    ///
    /// Returns [`StatusTagRepositoryError::DuplicateStatus`] when any tag ID
    /// already exists or appears twice in the batch.
    async fn store_all(&self, tags: &[StatusTag]) -> StatusTagRepositoryResult<()>;

    /// Persists changes to an existing status tag.
    ///
    /// # Errors
    ///
    /// Returns [`StatusTagRepositoryError::NotFound`] when the tag does not
    /// exist.
    async fn update(&self, tag: &StatusTag) -> StatusTagRepositoryResult<()>;

    /// Persists changes to several existing status tags as one batch.
    ///
    /// Either every tag is written or none is.
    ///
    /// # Errors
    ///
    /// Returns [`StatusTagRepositoryError::NotFound`] when any tag does not
    /// exist.
    async fn update_all(&self, tags: &[StatusTag]) -> StatusTagRepositoryResult<()>;

    /// Finds a status tag by identifier, deleted or not.
    ///
    /// Returns `None` when the tag does not exist.
    async fn find_by_id(&self, id: StatusTagId) -> StatusTagRepositoryResult<Option<StatusTag>>;

    /// Returns every status tag of a project, including soft-deleted ones.
    async fn list_for_project(
        &self,
        project_id: ProjectId,
    ) -> StatusTagRepositoryResult<Vec<StatusTag>>;
}

/// Errors returned by status tag repository implementations.
#[derive(Debug, Clone, Error)]
pub enum StatusTagRepositoryError {
    /// A status tag with the same identifier already exists.
    #[error("duplicate status identifier: {0}")]
    DuplicateStatus(StatusTagId),

    /// The status tag was not found.
    #[error("status not found: {0}")]
    NotFound(StatusTagId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl StatusTagRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
