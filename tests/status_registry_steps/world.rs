//! Shared world state for status tag registry BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use scrumboard::{
    project::ProjectId,
    status::{
        adapters::memory::InMemoryStatusTagRepository,
        domain::StatusTag,
        services::{StatusRegistryService, StatusRegistryServiceError},
    },
};

/// Service type used by the BDD world.
pub type TestStatusService = StatusRegistryService<InMemoryStatusTagRepository, DefaultClock>;

/// Scenario world for status registry behaviour tests.
pub struct StatusRegistryWorld {
    pub service: TestStatusService,
    pub project_id: ProjectId,
    pub last_result: Option<Result<StatusTag, StatusRegistryServiceError>>,
}

impl StatusRegistryWorld {
    /// Creates a world for a project without statuses.
    #[must_use]
    pub fn new() -> Self {
        let service = StatusRegistryService::new(
            Arc::new(InMemoryStatusTagRepository::new()),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            project_id: ProjectId::new(),
            last_result: None,
        }
    }

    /// Finds an active status of the scenario project by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails or no status bears the name.
    pub fn status_named(&self, name: &str) -> Result<StatusTag, eyre::Report> {
        run_async(self.service.list_active(self.project_id))?
            .into_iter()
            .find(|tag| tag.name().matches(name))
            .ok_or_else(|| eyre::eyre!("missing status '{name}' in scenario project"))
    }
}

impl Default for StatusRegistryWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> StatusRegistryWorld {
    StatusRegistryWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
