//! Backlog items, their tasks, and automatic status resolution.
//!
//! A backlog item (user story, issue, or generic item) owns tasks. When the
//! item's status is left automatic, its effective status is derived from the
//! statuses of those tasks and the project's status tags. The module also
//! computes task progress and groups items into board columns. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
