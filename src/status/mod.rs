//! Status tag registry for Scrumboard projects.
//!
//! Status tags are the named, coloured, ordered workflow states of a project
//! (Todo, Doing, Done, and any states a team adds). The registry enforces
//! case-insensitive name uniqueness and keeps the system-reserved names from
//! being created twice, renamed, or deleted. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
