//! When steps for status tag registry BDD scenarios.

use super::world::{StatusRegistryWorld, run_async};
use rstest_bdd_macros::when;
use scrumboard::status::domain::CreateStatusRequest;

#[when(r#"a status named "{name}" is created"#)]
fn create_status(world: &mut StatusRegistryWorld, name: String) {
    let result = run_async(
        world
            .service
            .create_status(world.project_id, CreateStatusRequest::new(name, "#808080", false)),
    );
    world.last_result = Some(result);
}

#[when(r#"the status "{name}" is deleted"#)]
fn delete_status(world: &mut StatusRegistryWorld, name: String) -> Result<(), eyre::Report> {
    let status = world.status_named(&name)?;
    let result = run_async(world.service.delete_status(world.project_id, status.id()));
    world.last_result = Some(result);
    Ok(())
}
