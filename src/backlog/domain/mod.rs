//! Domain model for backlog items and tasks.
//!
//! Everything here is pure: the resolver, progress, and board rules take
//! collections the caller has already fetched and never touch storage.

mod board;
mod error;
mod ids;
mod item;
mod progress;
mod resolver;
mod task;

pub use board::{BoardColumn, build_board};
pub use error::BacklogDomainError;
pub use ids::{BacklogItemId, TaskId};
pub use item::{BacklogItem, ItemKind, ItemStatus};
pub use progress::TaskProgress;
pub use resolver::AutomaticStatusResolver;
pub use task::Task;
