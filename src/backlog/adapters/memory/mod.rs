//! In-memory adapters for backlog persistence.

mod backlog;

pub use backlog::InMemoryBacklogRepository;
