//! In-memory adapters for status tag persistence.

mod status_tag;

pub use status_tag::InMemoryStatusTagRepository;
