//! When steps for automatic item status BDD scenarios.

use super::world::{AutomaticStatusWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use scrumboard::backlog::domain::ItemStatus;

#[when(r#"the item status is set to "{status}""#)]
fn set_item_status(world: &mut AutomaticStatusWorld, status: String) -> Result<(), eyre::Report> {
    let item_id = world.item()?.id();
    let status_id = world.status_named(&status)?.id();
    let updated = run_async(
        world
            .backlog
            .set_item_status(item_id, ItemStatus::Explicit(status_id)),
    )
    .wrap_err("set explicit item status")?;
    world.item = Some(updated);
    Ok(())
}
