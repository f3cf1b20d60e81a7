//! Application services for status tag management.

mod registry;

pub use registry::{
    StatusRegistryService, StatusRegistryServiceError, StatusRegistryServiceResult,
};
