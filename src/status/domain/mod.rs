//! Domain model for status tags.
//!
//! The status domain models the tag aggregate, validated names, the
//! protected-name policy, and the registry rules applied on every mutation.
//! Storage stays outside the domain boundary: the registry works on tags the
//! caller has already fetched.

mod error;
mod ids;
mod name;
mod policy;
mod registry;
mod tag;

pub use error::StatusValidationError;
pub use ids::StatusTagId;
pub use name::StatusName;
pub use policy::{
    AWAITS_REVIEW_STATUS_NAME, DOING_STATUS_NAME, DONE_STATUS_NAME, StatusPolicy,
    TODO_STATUS_NAME,
};
pub use registry::{CreateStatusRequest, StatusPatch, StatusScope, StatusTagRegistry};
pub use tag::StatusTag;
