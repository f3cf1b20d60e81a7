//! In-memory adapters for project tag persistence.

mod tag;

pub use tag::InMemoryTagRepository;
