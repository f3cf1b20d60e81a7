//! Application services for project tags.

mod tags;

pub use tags::{TagService, TagServiceError, TagServiceResult};
