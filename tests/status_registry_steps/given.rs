//! Given steps for status tag registry BDD scenarios.

use super::world::{StatusRegistryWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use scrumboard::status::domain::CreateStatusRequest;

#[given("a new project with the default statuses")]
fn project_with_defaults(world: &mut StatusRegistryWorld) -> Result<(), eyre::Report> {
    run_async(world.service.seed_defaults(world.project_id))
        .wrap_err("seed default statuses for scenario project")?;
    Ok(())
}

#[given(r#"a status named "{name}" exists"#)]
fn status_exists(world: &mut StatusRegistryWorld, name: String) -> Result<(), eyre::Report> {
    run_async(
        world
            .service
            .create_status(world.project_id, CreateStatusRequest::new(name, "#808080", false)),
    )
    .wrap_err("create status in scenario setup")?;
    Ok(())
}
