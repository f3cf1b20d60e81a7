//! In-memory repository for project tags.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::{
    project::ProjectId,
    tags::{
        domain::{Tag, TagId, TagKind},
        ports::{TagRepository, TagRepositoryError, TagRepositoryResult},
    },
};

/// Thread-safe in-memory tag repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTagRepository {
    state: Arc<RwLock<InMemoryTagState>>,
}

#[derive(Debug, Default)]
struct InMemoryTagState {
    tags: HashMap<TagId, Tag>,
    collection_index: HashMap<(ProjectId, TagKind), Vec<TagId>>,
}

impl InMemoryTagRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> TagRepositoryError {
    TagRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TagRepository for InMemoryTagRepository {
    async fn store(&self, tag: &Tag) -> TagRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.tags.contains_key(&tag.id()) {
            return Err(TagRepositoryError::DuplicateTag(tag.id()));
        }

        state
            .collection_index
            .entry((tag.project_id(), tag.kind()))
            .or_default()
            .push(tag.id());
        state.tags.insert(tag.id(), tag.clone());
        Ok(())
    }

    async fn update(&self, tag: &Tag) -> TagRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let stored = state
            .tags
            .get_mut(&tag.id())
            .ok_or(TagRepositoryError::NotFound(tag.id()))?;
        *stored = tag.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: TagId) -> TagRepositoryResult<Option<Tag>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.tags.get(&id).cloned())
    }

    async fn list_for_project(
        &self,
        project_id: ProjectId,
        kind: TagKind,
    ) -> TagRepositoryResult<Vec<Tag>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .collection_index
            .get(&(project_id, kind))
            .map(|ids| ids.iter().filter_map(|id| state.tags.get(id).cloned()).collect())
            .unwrap_or_default())
    }
}
