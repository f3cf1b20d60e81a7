//! Board columns grouping backlog items by effective status.

use super::{BacklogItem, BacklogItemId, Task};
use crate::status::domain::StatusTag;
use serde::{Deserialize, Serialize};

/// One column of the board: a status and the items showing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardColumn {
    /// Status shown by the column.
    pub status: StatusTag,
    /// Items in the column, user stories first, then issues, then generic
    /// items, each group in input order.
    pub item_ids: Vec<BacklogItemId>,
}

/// Groups items into one column per active status, in board order.
///
/// Automatic items are placed by [`BacklogItem::effective_status_id`]. Items
/// whose effective status names no active status, and deleted items, are
/// left off the board.
#[must_use]
pub fn build_board(
    items: &[BacklogItem],
    tasks: &[Task],
    status_tags: &[StatusTag],
) -> Vec<BoardColumn> {
    let mut columns: Vec<StatusTag> = status_tags
        .iter()
        .filter(|tag| !tag.is_deleted())
        .cloned()
        .collect();
    columns.sort_by_key(StatusTag::order_index);

    let mut placed: Vec<(&BacklogItem, _)> = items
        .iter()
        .filter(|item| !item.is_deleted())
        .map(|item| (item, item.effective_status_id(tasks, status_tags)))
        .collect();
    placed.sort_by_key(|(item, _)| item.kind());

    columns
        .into_iter()
        .map(|status| {
            let item_ids = placed
                .iter()
                .filter(|(_, status_id)| *status_id == Some(status.id()))
                .map(|(item, _)| item.id())
                .collect();
            BoardColumn { status, item_ids }
        })
        .collect()
}
