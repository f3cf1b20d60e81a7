//! Then steps for automatic item status BDD scenarios.

use super::world::{AutomaticStatusWorld, run_async};
use rstest_bdd_macros::then;
use scrumboard::{backlog::domain::TaskProgress, status::domain::StatusTag};

fn expect_status(
    found: Option<&StatusTag>,
    expected: &str,
) -> Result<(), eyre::Report> {
    let name = found.map(|tag| tag.name().as_str());
    eyre::ensure!(
        found.is_some_and(|tag| tag.name().matches(expected)),
        "expected status '{expected}', found {name:?}"
    );
    Ok(())
}

#[then(r#"the automatic status is "{status}""#)]
fn automatic_status_is(world: &AutomaticStatusWorld, status: String) -> Result<(), eyre::Report> {
    let item_id = world.item()?.id();
    let derived = run_async(world.backlog.automatic_status(item_id))?;
    expect_status(derived.as_ref(), &status)
}

#[then(r#"the effective status is "{status}""#)]
fn effective_status_is(world: &AutomaticStatusWorld, status: String) -> Result<(), eyre::Report> {
    let item_id = world.item()?.id();
    let shown = run_async(world.backlog.effective_status(item_id))?;
    expect_status(shown.as_ref(), &status)
}

#[then("the item progress is {completed:usize} of {total:usize}")]
fn item_progress_is(
    world: &AutomaticStatusWorld,
    completed: usize,
    total: usize,
) -> Result<(), eyre::Report> {
    let item_id = world.item()?.id();
    let progress = run_async(world.backlog.task_progress(item_id))?;
    eyre::ensure!(
        progress == TaskProgress { completed, total },
        "unexpected progress {progress:?}"
    );
    Ok(())
}
