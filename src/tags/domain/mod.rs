//! Domain model for project tags.

mod collection;
mod error;
mod ids;
mod tag;

pub use collection::{CreateTagRequest, TagCollection, TagPatch};
pub use error::TagValidationError;
pub use ids::TagId;
pub use tag::{Tag, TagKind};
