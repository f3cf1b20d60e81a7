//! In-memory repository for status tags.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::{
    project::ProjectId,
    status::{
        domain::{StatusTag, StatusTagId},
        ports::{StatusTagRepository, StatusTagRepositoryError, StatusTagRepositoryResult},
    },
};

/// Thread-safe in-memory status tag repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStatusTagRepository {
    state: Arc<RwLock<InMemoryStatusState>>,
}

#[derive(Debug, Default)]
struct InMemoryStatusState {
    tags: HashMap<StatusTagId, StatusTag>,
    project_index: HashMap<ProjectId, Vec<StatusTagId>>,
}

impl InMemoryStatusTagRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> StatusTagRepositoryError {
    StatusTagRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl StatusTagRepository for InMemoryStatusTagRepository {
    async fn store(&self, tag: &StatusTag) -> StatusTagRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.tags.contains_key(&tag.id()) {
            return Err(StatusTagRepositoryError::DuplicateStatus(tag.id()));
        }

        state
            .project_index
            .entry(tag.project_id())
            .or_default()
            .push(tag.id());
        state.tags.insert(tag.id(), tag.clone());
        Ok(())
    }

    async fn store_all(&self, tags: &[StatusTag]) -> StatusTagRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let mut batch_ids = HashSet::with_capacity(tags.len());
        if let Some(duplicate) = tags
            .iter()
            .find(|tag| state.tags.contains_key(&tag.id()) || !batch_ids.insert(tag.id()))
        {
            return Err(StatusTagRepositoryError::DuplicateStatus(duplicate.id()));
        }

        for tag in tags {
            state
                .project_index
                .entry(tag.project_id())
                .or_default()
                .push(tag.id());
            state.tags.insert(tag.id(), tag.clone());
        }
        Ok(())
    }

    async fn update(&self, tag: &StatusTag) -> StatusTagRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let stored = state
            .tags
            .get_mut(&tag.id())
            .ok_or(StatusTagRepositoryError::NotFound(tag.id()))?;
        *stored = tag.clone();
        Ok(())
    }

    async fn update_all(&self, tags: &[StatusTag]) -> StatusTagRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if let Some(missing) = tags.iter().find(|tag| !state.tags.contains_key(&tag.id())) {
            return Err(StatusTagRepositoryError::NotFound(missing.id()));
        }
        for tag in tags {
            state.tags.insert(tag.id(), tag.clone());
        }
        Ok(())
    }

    async fn find_by_id(&self, id: StatusTagId) -> StatusTagRepositoryResult<Option<StatusTag>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.tags.get(&id).cloned())
    }

    async fn list_for_project(
        &self,
        project_id: ProjectId,
    ) -> StatusTagRepositoryResult<Vec<StatusTag>> {
        let state = self.state.read().map_err(lock_error)?;
        let tags = state
            .project_index
            .get(&project_id)
            .map(|ids| ids.iter().filter_map(|id| state.tags.get(id).cloned()).collect())
            .unwrap_or_default();
        Ok(tags)
    }
}
