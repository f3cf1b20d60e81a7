//! Scrumboard: status rules for Scrum project boards.
//!
//! This crate provides the status tag registry of a project and the rules
//! that derive the status of a backlog item from the statuses of its tasks.
//!
//! # Architecture
//!
//! Scrumboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business rules with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports (in-memory stores)
//! - **Services**: Orchestration of fetch, validate, and persist steps
//!
//! # Modules
//!
//! - [`status`]: Status tag registry with naming and protection invariants
//! - [`backlog`]: Tasks, backlog items, and automatic status resolution
//! - [`tags`]: Generic store for backlog tags, priorities, and requirement tags
//! - [`project`]: Project identifiers shared across modules

pub mod backlog;
mod naming;
pub mod project;
pub mod status;
pub mod tags;
