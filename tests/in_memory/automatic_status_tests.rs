//! In-memory integration tests for statuses derived from tasks.

use super::helpers::{Services, seeded_project, services, status_named};
use scrumboard::{
    backlog::{
        domain::{ItemKind, ItemStatus, TaskProgress},
        services::CreateItemRequest,
    },
    status::domain::{
        CreateStatusRequest, DOING_STATUS_NAME, DONE_STATUS_NAME, StatusPatch, StatusTag,
        TODO_STATUS_NAME,
    },
};
use rstest::rstest;

fn id_of(status: Option<&StatusTag>) -> Option<scrumboard::status::domain::StatusTagId> {
    status.map(StatusTag::id)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn story_moves_across_the_board_with_its_tasks(
    services: Services,
) -> Result<(), eyre::Report> {
    let (project_id, tags) = seeded_project(&services.statuses).await?;
    let todo = status_named(&tags, TODO_STATUS_NAME)?.id();
    let doing = status_named(&tags, DOING_STATUS_NAME)?.id();
    let done = status_named(&tags, DONE_STATUS_NAME)?.id();
    let story = services
        .backlog
        .create_item(CreateItemRequest::new(project_id, ItemKind::UserStory, "Sign up"))
        .await?;

    let initial = services.backlog.effective_status(story.id()).await?;
    eyre::ensure!(id_of(initial.as_ref()) == Some(todo), "new story starts in Todo");

    let form = services.backlog.create_task(story.id(), "form").await?;
    let email = services.backlog.create_task(story.id(), "email").await?;
    services.backlog.set_task_status(form.id(), Some(done)).await?;
    services.backlog.set_task_status(email.id(), Some(todo)).await?;
    let started = services.backlog.effective_status(story.id()).await?;
    eyre::ensure!(id_of(started.as_ref()) == Some(doing), "mixed tasks mean Doing");

    services.backlog.set_task_status(email.id(), Some(done)).await?;
    let finished = services.backlog.effective_status(story.id()).await?;
    let progress = services.backlog.task_progress(story.id()).await?;
    eyre::ensure!(id_of(finished.as_ref()) == Some(done), "all done means Done");
    eyre::ensure!(
        progress == TaskProgress { completed: 2, total: 2 },
        "unexpected progress {progress:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn custom_done_status_counts_as_resolved(services: Services) -> Result<(), eyre::Report> {
    let (project_id, tags) = seeded_project(&services.statuses).await?;
    let done = status_named(&tags, DONE_STATUS_NAME)?.id();
    let released = services
        .statuses
        .create_status(project_id, CreateStatusRequest::new("Released", "#00aa00", true))
        .await?;
    let issue = services
        .backlog
        .create_item(CreateItemRequest::new(project_id, ItemKind::Issue, "Timeout"))
        .await?;
    let patch = services.backlog.create_task(issue.id(), "patch").await?;
    let deploy = services.backlog.create_task(issue.id(), "deploy").await?;

    services.backlog.set_task_status(patch.id(), Some(done)).await?;
    services.backlog.set_task_status(deploy.id(), Some(released.id())).await?;
    let status = services.backlog.automatic_status(issue.id()).await?;

    eyre::ensure!(id_of(status.as_ref()) == Some(done), "resolved tasks show Done");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn done_flag_changes_are_seen_by_later_resolutions(
    services: Services,
) -> Result<(), eyre::Report> {
    let (project_id, tags) = seeded_project(&services.statuses).await?;
    let done = status_named(&tags, DONE_STATUS_NAME)?.id();
    let doing = status_named(&tags, DOING_STATUS_NAME)?.id();
    let verified = services
        .statuses
        .create_status(project_id, CreateStatusRequest::new("Verified", "#0000aa", false))
        .await?;
    let story = services
        .backlog
        .create_item(CreateItemRequest::new(project_id, ItemKind::UserStory, "Export"))
        .await?;
    let build = services.backlog.create_task(story.id(), "build").await?;
    let check = services.backlog.create_task(story.id(), "check").await?;
    services.backlog.set_task_status(build.id(), Some(done)).await?;
    services.backlog.set_task_status(check.id(), Some(verified.id())).await?;

    let before = services.backlog.automatic_status(story.id()).await?;
    services
        .statuses
        .modify_status(
            project_id,
            verified.id(),
            StatusPatch::new().with_marks_task_as_done(true),
        )
        .await?;
    let after = services.backlog.automatic_status(story.id()).await?;

    eyre::ensure!(id_of(before.as_ref()) == Some(doing), "in progress before the flag");
    eyre::ensure!(id_of(after.as_ref()) == Some(done), "resolved after the flag");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn board_shows_explicit_and_derived_statuses(
    services: Services,
) -> Result<(), eyre::Report> {
    let (project_id, tags) = seeded_project(&services.statuses).await?;
    let doing = status_named(&tags, DOING_STATUS_NAME)?.id();
    let fresh = services
        .backlog
        .create_item(CreateItemRequest::new(project_id, ItemKind::UserStory, "Profile"))
        .await?;
    let pinned = services
        .backlog
        .create_item(CreateItemRequest::new(project_id, ItemKind::GenericItem, "Docs"))
        .await?;
    services
        .backlog
        .set_item_status(pinned.id(), ItemStatus::Explicit(doing))
        .await?;

    let board = services.backlog.board(project_id).await?;
    let column_of = |name: &str| {
        board
            .iter()
            .find(|column| column.status.name().matches(name))
            .map(|column| column.item_ids.clone())
            .unwrap_or_default()
    };

    eyre::ensure!(column_of(TODO_STATUS_NAME) == [fresh.id()], "fresh story in Todo");
    eyre::ensure!(column_of(DOING_STATUS_NAME) == [pinned.id()], "pinned item in Doing");
    eyre::ensure!(column_of(DONE_STATUS_NAME).is_empty(), "nothing is done");
    Ok(())
}
