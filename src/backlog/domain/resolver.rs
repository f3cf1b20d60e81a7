//! Automatic status derivation for backlog items.

use super::{BacklogItemId, Task};
use crate::status::domain::{
    DOING_STATUS_NAME, DONE_STATUS_NAME, StatusTag, StatusTagId, TODO_STATUS_NAME,
};
use tracing::debug;

/// Derives the status of an item in automatic mode from its tasks.
///
/// Rules are applied in order and the first match wins:
///
/// 1. No tasks: the "Todo" status, else the status with the lowest order
///    index.
/// 2. Every task with a status shares the same one: that status, whatever
///    it is named.
/// 3. Every task sits in a status marking tasks as done: the "Done" status,
///    else the first done status in the caller's order.
/// 4. Otherwise: the "Doing" status, else the middle status of the board.
///
/// Names are matched case-insensitively. Deleted tasks, tasks of other
/// items, and deleted statuses are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutomaticStatusResolver;

impl AutomaticStatusResolver {
    /// Resolves the automatic status of `item_id`.
    ///
    /// Returns `None` when no status applies, which callers show as "no
    /// status". This never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use scrumboard::backlog::domain::{AutomaticStatusResolver, BacklogItemId};
    ///
    /// let resolved = AutomaticStatusResolver::resolve(BacklogItemId::new(), &[], &[]);
    /// assert_eq!(resolved, None);
    /// ```
    #[must_use]
    pub fn resolve(
        item_id: BacklogItemId,
        tasks: &[Task],
        status_tags: &[StatusTag],
    ) -> Option<StatusTagId> {
        let live_tasks: Vec<&Task> = tasks
            .iter()
            .filter(|task| task.item_id() == item_id && !task.is_deleted())
            .collect();
        let live_tags: Vec<&StatusTag> = status_tags
            .iter()
            .filter(|tag| !tag.is_deleted())
            .collect();

        if live_tasks.is_empty() {
            debug!(%item_id, rule = "no_tasks", "resolving automatic status");
            return named(&live_tags, TODO_STATUS_NAME).or_else(|| {
                live_tags
                    .iter()
                    .min_by_key(|tag| tag.order_index())
                    .map(|tag| tag.id())
            });
        }

        let mut explicit = live_tasks.iter().filter_map(|task| task.status_id());
        if let Some(first) = explicit.next()
            && explicit.all(|id| id == first)
        {
            debug!(%item_id, rule = "uniform", status_id = %first, "resolving automatic status");
            return Some(first);
        }

        let done_ids: Vec<StatusTagId> = live_tags
            .iter()
            .filter(|tag| tag.marks_task_as_done())
            .map(|tag| tag.id())
            .collect();
        let all_done = live_tasks
            .iter()
            .all(|task| task.status_id().is_some_and(|id| done_ids.contains(&id)));
        if all_done {
            debug!(%item_id, rule = "all_done", "resolving automatic status");
            return named(&live_tags, DONE_STATUS_NAME).or_else(|| done_ids.first().copied());
        }

        debug!(%item_id, rule = "in_progress", "resolving automatic status");
        named(&live_tags, DOING_STATUS_NAME).or_else(|| middle_of_board(&live_tags))
    }
}

fn named(tags: &[&StatusTag], name: &str) -> Option<StatusTagId> {
    tags.iter()
        .find(|tag| tag.name().matches(name))
        .map(|tag| tag.id())
}

fn middle_of_board(tags: &[&StatusTag]) -> Option<StatusTagId> {
    let mut ordered = tags.to_vec();
    ordered.sort_by_key(|tag| tag.order_index());
    ordered.get(middle_index(ordered.len())).map(|tag| tag.id())
}

#[expect(
    clippy::integer_division,
    reason = "the middle of the board rounds towards the first status"
)]
const fn middle_index(len: usize) -> usize {
    len.saturating_sub(1) / 2
}
