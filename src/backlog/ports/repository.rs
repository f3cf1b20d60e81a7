//! Repository port for backlog items and tasks.

use crate::{
    backlog::domain::{BacklogItem, BacklogItemId, Task, TaskId},
    project::ProjectId,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for backlog repository operations.
pub type BacklogRepositoryResult<T> = Result<T, BacklogRepositoryError>;

/// Backlog persistence contract.
#[async_trait]
pub trait BacklogRepository: Send + Sync {
    /// Stores a new backlog item.
    ///
    /// # Errors
    ///
    /// Returns [`BacklogRepositoryError::DuplicateItem`] when the item ID
    /// already exists.
    async fn store_item(&self, item: &BacklogItem) -> BacklogRepositoryResult<()>;

    /// Persists changes to an existing backlog item.
    ///
    /// # Errors
    ///
    /// Returns [`BacklogRepositoryError::ItemNotFound`] when the item does not
    /// exist.
    async fn update_item(&self, item: &BacklogItem) -> BacklogRepositoryResult<()>;

    /// Finds a backlog item by identifier, deleted or not.
    async fn find_item(&self, id: BacklogItemId) -> BacklogRepositoryResult<Option<BacklogItem>>;

    /// Returns the live backlog items of a project.
    async fn list_items(&self, project_id: ProjectId) -> BacklogRepositoryResult<Vec<BacklogItem>>;

    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`BacklogRepositoryError::DuplicateTask`] when the task ID
    /// already exists or [`BacklogRepositoryError::ItemNotFound`] when the
    /// owning item does not exist.
    async fn store_task(&self, task: &Task) -> BacklogRepositoryResult<()>;

    /// Persists changes to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`BacklogRepositoryError::TaskNotFound`] when the task does not
    /// exist.
    async fn update_task(&self, task: &Task) -> BacklogRepositoryResult<()>;

    /// Finds a task by identifier, deleted or not.
    async fn find_task(&self, id: TaskId) -> BacklogRepositoryResult<Option<Task>>;

    /// Returns the live tasks of a backlog item.
    async fn tasks_for_item(&self, item_id: BacklogItemId) -> BacklogRepositoryResult<Vec<Task>>;
}

/// Errors returned by backlog repository implementations.
#[derive(Debug, Clone, Error)]
pub enum BacklogRepositoryError {
    /// A backlog item with the same identifier already exists.
    #[error("duplicate backlog item identifier: {0}")]
    DuplicateItem(BacklogItemId),

    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The backlog item was not found.
    #[error("backlog item not found: {0}")]
    ItemNotFound(BacklogItemId),

    /// The task was not found.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl BacklogRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
