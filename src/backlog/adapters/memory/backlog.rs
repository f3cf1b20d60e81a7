//! In-memory repository for backlog items and tasks.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::{
    backlog::{
        domain::{BacklogItem, BacklogItemId, Task, TaskId},
        ports::{BacklogRepository, BacklogRepositoryError, BacklogRepositoryResult},
    },
    project::ProjectId,
};

/// Thread-safe in-memory backlog repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBacklogRepository {
    state: Arc<RwLock<InMemoryBacklogState>>,
}

#[derive(Debug, Default)]
struct InMemoryBacklogState {
    items: HashMap<BacklogItemId, BacklogItem>,
    tasks: HashMap<TaskId, Task>,
    project_index: HashMap<ProjectId, Vec<BacklogItemId>>,
    item_index: HashMap<BacklogItemId, Vec<TaskId>>,
}

impl InMemoryBacklogRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> BacklogRepositoryError {
    BacklogRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl BacklogRepository for InMemoryBacklogRepository {
    async fn store_item(&self, item: &BacklogItem) -> BacklogRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.items.contains_key(&item.id()) {
            return Err(BacklogRepositoryError::DuplicateItem(item.id()));
        }
        state
            .project_index
            .entry(item.project_id())
            .or_default()
            .push(item.id());
        state.items.insert(item.id(), item.clone());
        Ok(())
    }

    async fn update_item(&self, item: &BacklogItem) -> BacklogRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let stored = state
            .items
            .get_mut(&item.id())
            .ok_or(BacklogRepositoryError::ItemNotFound(item.id()))?;
        *stored = item.clone();
        Ok(())
    }

    async fn find_item(&self, id: BacklogItemId) -> BacklogRepositoryResult<Option<BacklogItem>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.items.get(&id).cloned())
    }

    async fn list_items(&self, project_id: ProjectId) -> BacklogRepositoryResult<Vec<BacklogItem>> {
        let state = self.state.read().map_err(lock_error)?;
        let items = state
            .project_index
            .get(&project_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.items.get(id))
                    .filter(|item| !item.is_deleted())
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(items)
    }

    async fn store_task(&self, task: &Task) -> BacklogRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.tasks.contains_key(&task.id()) {
            return Err(BacklogRepositoryError::DuplicateTask(task.id()));
        }
        if !state.items.contains_key(&task.item_id()) {
            return Err(BacklogRepositoryError::ItemNotFound(task.item_id()));
        }
        state
            .item_index
            .entry(task.item_id())
            .or_default()
            .push(task.id());
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update_task(&self, task: &Task) -> BacklogRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let stored = state
            .tasks
            .get_mut(&task.id())
            .ok_or(BacklogRepositoryError::TaskNotFound(task.id()))?;
        *stored = task.clone();
        Ok(())
    }

    async fn find_task(&self, id: TaskId) -> BacklogRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn tasks_for_item(&self, item_id: BacklogItemId) -> BacklogRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        let tasks = state
            .item_index
            .get(&item_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.tasks.get(id))
                    .filter(|task| !task.is_deleted())
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(tasks)
    }
}
