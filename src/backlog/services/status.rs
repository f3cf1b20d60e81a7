//! Service layer for backlog item and task statuses.
//!
//! Provides [`BacklogStatusService`] which fetches the tasks and status tags
//! an operation needs, applies the pure backlog rules, and persists task and
//! item status changes.

use crate::{
    backlog::{
        domain::{
            AutomaticStatusResolver, BacklogDomainError, BacklogItem, BacklogItemId, BoardColumn,
            ItemKind, ItemStatus, Task, TaskId, TaskProgress, build_board,
        },
        ports::{BacklogRepository, BacklogRepositoryError},
    },
    project::ProjectId,
    status::{
        domain::{StatusTag, StatusTagId, StatusTagRegistry},
        ports::StatusTagRepository,
        services::{StatusRegistryService, StatusRegistryServiceError},
    },
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Request payload for creating a backlog item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateItemRequest {
    project_id: ProjectId,
    kind: ItemKind,
    name: String,
}

impl CreateItemRequest {
    /// Creates a request with all item fields.
    #[must_use]
    pub fn new(project_id: ProjectId, kind: ItemKind, name: impl Into<String>) -> Self {
        Self {
            project_id,
            kind,
            name: name.into(),
        }
    }
}

/// Service-level errors for backlog status operations.
#[derive(Debug, Error)]
pub enum BacklogServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BacklogDomainError),
    /// Backlog repository operation failed.
    #[error(transparent)]
    Repository(#[from] BacklogRepositoryError),
    /// Status tag lookup failed.
    #[error(transparent)]
    Status(#[from] StatusRegistryServiceError),
    /// The requested status is not an active status of the item's project.
    #[error("status {0} is not an active status of the project")]
    UnknownStatus(StatusTagId),
}

/// Result type for backlog status service operations.
pub type BacklogServiceResult<T> = Result<T, BacklogServiceError>;

/// Backlog status orchestration service.
#[derive(Clone)]
pub struct BacklogStatusService<B, S, C>
where
    B: BacklogRepository,
    S: StatusTagRepository,
    C: Clock + Send + Sync,
{
    backlog: Arc<B>,
    statuses: StatusRegistryService<S, C>,
    clock: Arc<C>,
}

impl<B, S, C> BacklogStatusService<B, S, C>
where
    B: BacklogRepository,
    S: StatusTagRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new backlog status service.
    #[must_use]
    pub const fn new(
        backlog: Arc<B>,
        statuses: StatusRegistryService<S, C>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            backlog,
            statuses,
            clock,
        }
    }

    /// Creates a backlog item in automatic status mode.
    ///
    /// # Errors
    ///
    /// Returns [`BacklogServiceError::Domain`] when the name is blank and
    /// [`BacklogServiceError::Repository`] when persistence fails.
    pub async fn create_item(
        &self,
        request: CreateItemRequest,
    ) -> BacklogServiceResult<BacklogItem> {
        let CreateItemRequest {
            project_id,
            kind,
            name,
        } = request;
        let item = BacklogItem::new(project_id, kind, name, &*self.clock)?;
        self.backlog.store_item(&item).await?;
        Ok(item)
    }

    /// Creates a task without a status under an existing item.
    ///
    /// # Errors
    ///
    /// Returns [`BacklogServiceError::Domain`] when the name is blank and
    /// [`BacklogServiceError::Repository`] when the item does not exist or
    /// persistence fails.
    pub async fn create_task(
        &self,
        item_id: BacklogItemId,
        name: impl Into<String> + Send,
    ) -> BacklogServiceResult<Task> {
        let item = self.find_item_or_error(item_id).await?;
        let task = Task::new(item.id(), name, &*self.clock)?;
        self.backlog.store_task(&task).await?;
        Ok(task)
    }

    /// Sets or clears the status of a task.
    ///
    /// Only the task is written. An automatic item status is derived when it
    /// is read, so the item itself is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BacklogServiceError::UnknownStatus`] when the status is not
    /// active in the item's project and [`BacklogServiceError::Repository`]
    /// when the task or item does not exist or persistence fails.
    pub async fn set_task_status(
        &self,
        task_id: TaskId,
        status_id: Option<StatusTagId>,
    ) -> BacklogServiceResult<Task> {
        let mut task = self.find_task_or_error(task_id).await?;
        let item = self.find_item_or_error(task.item_id()).await?;
        let registry = self.statuses.registry(item.project_id()).await?;
        if let Some(id) = status_id {
            ensure_active(&registry, id)?;
        }

        task.set_status(status_id, &*self.clock);
        self.backlog.update_task(&task).await?;
        debug!(%task_id, item_id = %item.id(), status_id = ?status_id, "task status set");
        Ok(task)
    }

    /// Soft-deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`BacklogServiceError::Repository`] when the task does not
    /// exist or persistence fails.
    pub async fn delete_task(&self, task_id: TaskId) -> BacklogServiceResult<()> {
        let mut task = self.find_task_or_error(task_id).await?;
        task.mark_deleted(&*self.clock);
        self.backlog.update_task(&task).await?;
        Ok(())
    }

    /// Sets an item's status explicitly or returns it to automatic mode.
    ///
    /// # Errors
    ///
    /// Returns [`BacklogServiceError::UnknownStatus`] when an explicit status
    /// is not active in the item's project and
    /// [`BacklogServiceError::Repository`] when the item does not exist or
    /// persistence fails.
    pub async fn set_item_status(
        &self,
        item_id: BacklogItemId,
        status: ItemStatus,
    ) -> BacklogServiceResult<BacklogItem> {
        let mut item = self.find_item_or_error(item_id).await?;
        if let Some(id) = status.explicit_id() {
            let registry = self.statuses.registry(item.project_id()).await?;
            ensure_active(&registry, id)?;
        }
        item.set_status(status, &*self.clock);
        self.backlog.update_item(&item).await?;
        info!(%item_id, automatic = status.is_automatic(), "item status set");
        Ok(item)
    }

    /// Returns the status derived from the item's tasks, ignoring any
    /// explicit status.
    ///
    /// Issues see the review status; other items do not.
    ///
    /// # Errors
    ///
    /// Returns [`BacklogServiceError::Repository`] when the item does not
    /// exist or a lookup fails.
    pub async fn automatic_status(
        &self,
        item_id: BacklogItemId,
    ) -> BacklogServiceResult<Option<StatusTag>> {
        let item = self.find_item_or_error(item_id).await?;
        let tags = self
            .statuses
            .list_for_scope(item.project_id(), item.kind().status_scope())
            .await?;
        let tasks = self.backlog.tasks_for_item(item.id()).await?;
        let derived = AutomaticStatusResolver::resolve(item.id(), &tasks, &tags);
        Ok(derived.and_then(|id| tags.into_iter().find(|tag| tag.id() == id)))
    }

    /// Returns the status the item shows.
    ///
    /// An explicit status that has since been deleted shows as `None`.
    ///
    /// # Errors
    ///
    /// Returns [`BacklogServiceError::Repository`] when the item does not
    /// exist or a lookup fails.
    pub async fn effective_status(
        &self,
        item_id: BacklogItemId,
    ) -> BacklogServiceResult<Option<StatusTag>> {
        let item = self.find_item_or_error(item_id).await?;
        match item.status() {
            ItemStatus::Automatic => self.automatic_status(item_id).await,
            ItemStatus::Explicit(id) => {
                let registry = self.statuses.registry(item.project_id()).await?;
                Ok(registry.find_active(id).cloned())
            }
        }
    }

    /// Returns the task progress of an item.
    ///
    /// # Errors
    ///
    /// Returns [`BacklogServiceError::Repository`] when the item does not
    /// exist or a lookup fails.
    pub async fn task_progress(
        &self,
        item_id: BacklogItemId,
    ) -> BacklogServiceResult<TaskProgress> {
        let item = self.find_item_or_error(item_id).await?;
        let tags = self.statuses.list_active(item.project_id()).await?;
        let tasks = self.backlog.tasks_for_item(item.id()).await?;
        Ok(TaskProgress::from_tasks(&tasks, &tags))
    }

    /// Returns the board of a project: one column per active status.
    ///
    /// # Errors
    ///
    /// Returns [`BacklogServiceError::Repository`] or
    /// [`BacklogServiceError::Status`] when a lookup fails.
    pub async fn board(&self, project_id: ProjectId) -> BacklogServiceResult<Vec<BoardColumn>> {
        let tags = self.statuses.list_active(project_id).await?;
        let items = self.backlog.list_items(project_id).await?;
        let mut tasks = Vec::new();
        for item in &items {
            tasks.extend(self.backlog.tasks_for_item(item.id()).await?);
        }
        Ok(build_board(&items, &tasks, &tags))
    }

    async fn find_item_or_error(&self, id: BacklogItemId) -> BacklogServiceResult<BacklogItem> {
        self.backlog
            .find_item(id)
            .await?
            .filter(|item| !item.is_deleted())
            .ok_or_else(|| BacklogRepositoryError::ItemNotFound(id).into())
    }

    async fn find_task_or_error(&self, id: TaskId) -> BacklogServiceResult<Task> {
        self.backlog
            .find_task(id)
            .await?
            .filter(|task| !task.is_deleted())
            .ok_or_else(|| BacklogRepositoryError::TaskNotFound(id).into())
    }
}

fn ensure_active(registry: &StatusTagRegistry, id: StatusTagId) -> BacklogServiceResult<()> {
    if registry.find_active(id).is_none() {
        warn!(project_id = %registry.project_id(), status_id = %id, "unknown status rejected");
        return Err(BacklogServiceError::UnknownStatus(id));
    }
    Ok(())
}
