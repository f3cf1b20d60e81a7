//! Task progress of a backlog item.

use super::Task;
use crate::status::domain::{StatusTag, StatusTagId};
use serde::{Deserialize, Serialize};

/// Number of resolved tasks out of all live tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskProgress {
    /// Tasks whose status marks them as done.
    pub completed: usize,
    /// Tasks that have not been deleted.
    pub total: usize,
}

impl TaskProgress {
    /// Counts the live tasks and those sitting in a done status.
    ///
    /// Tasks without a status, or whose status is unknown or deleted, count
    /// as unresolved.
    #[must_use]
    pub fn from_tasks(tasks: &[Task], status_tags: &[StatusTag]) -> Self {
        let done_ids: Vec<StatusTagId> = status_tags
            .iter()
            .filter(|tag| !tag.is_deleted() && tag.marks_task_as_done())
            .map(StatusTag::id)
            .collect();
        let live = tasks.iter().filter(|task| !task.is_deleted());
        let (completed, total) = live.fold((0_usize, 0_usize), |(completed, total), task| {
            let done = task.status_id().is_some_and(|id| done_ids.contains(&id));
            (completed + usize::from(done), total + 1)
        });
        Self { completed, total }
    }

    /// Returns `true` when every live task is resolved and there is at least
    /// one.
    #[must_use]
    pub const fn is_complete(self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}
