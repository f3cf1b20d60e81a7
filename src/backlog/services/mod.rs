//! Application services for backlog status orchestration.

mod status;

pub use status::{
    BacklogServiceError, BacklogServiceResult, BacklogStatusService, CreateItemRequest,
};
