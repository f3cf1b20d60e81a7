//! In-memory integration tests for the status tag registry.

use super::helpers::{Services, seeded_project, services, status_named};
use scrumboard::{
    project::ProjectId,
    status::{
        domain::{
            CreateStatusRequest, DONE_STATUS_NAME, StatusPatch, StatusPolicy, StatusScope,
            StatusValidationError, TODO_STATUS_NAME,
        },
        services::{StatusRegistryService, StatusRegistryServiceError},
    },
};
use rstest::rstest;

fn is_validation_error(
    result: &Result<impl std::fmt::Debug, StatusRegistryServiceError>,
    expected: &StatusValidationError,
) -> bool {
    matches!(result, Err(StatusRegistryServiceError::Validation(err)) if err == expected)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn seeded_board_is_ordered_and_marks_done(services: Services) -> Result<(), eyre::Report> {
    let (project_id, _) = seeded_project(&services.statuses).await?;

    let listed = services.statuses.list_active(project_id).await?;
    let names: Vec<&str> = listed.iter().map(|tag| tag.name().as_str()).collect();
    let done = status_named(&listed, DONE_STATUS_NAME)?;

    eyre::ensure!(
        names == ["Todo", "Doing", "Done", "Awaits Review"],
        "unexpected board {names:?}"
    );
    eyre::ensure!(done.marks_task_as_done(), "Done must mark tasks as done");
    eyre::ensure!(
        listed.iter().filter(|tag| tag.marks_task_as_done()).count() == 1,
        "only Done marks tasks as done"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn custom_statuses_are_appended_to_the_board(
    services: Services,
) -> Result<(), eyre::Report> {
    let (project_id, _) = seeded_project(&services.statuses).await?;

    let blocked = services
        .statuses
        .create_status(project_id, CreateStatusRequest::new(" Blocked ", "#222222", false))
        .await?;

    eyre::ensure!(blocked.name().as_str() == "Blocked", "name must be trimmed");
    eyre::ensure!(blocked.order_index() == 4, "new status goes last");
    Ok(())
}

#[rstest]
#[case(" todo ", StatusValidationError::ReservedName("todo".to_owned()))]
#[case("", StatusValidationError::EmptyName)]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_reserved_and_empty_names(
    services: Services,
    #[case] name: &str,
    #[case] expected: StatusValidationError,
) -> Result<(), eyre::Report> {
    let (project_id, _) = seeded_project(&services.statuses).await?;

    let result = services
        .statuses
        .create_status(project_id, CreateStatusRequest::new(name, "#000000", false))
        .await;

    eyre::ensure!(is_validation_error(&result, &expected), "unexpected result {result:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn renaming_onto_an_existing_name_is_rejected(
    services: Services,
) -> Result<(), eyre::Report> {
    let (project_id, _) = seeded_project(&services.statuses).await?;
    services
        .statuses
        .create_status(project_id, CreateStatusRequest::new("QA", "#111111", false))
        .await?;
    let staging = services
        .statuses
        .create_status(project_id, CreateStatusRequest::new("Staging", "#222222", false))
        .await?;

    let result = services
        .statuses
        .modify_status(project_id, staging.id(), StatusPatch::new().with_name("qa"))
        .await;

    eyre::ensure!(
        is_validation_error(&result, &StatusValidationError::DuplicateName("qa".to_owned())),
        "unexpected result {result:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn protected_statuses_cannot_be_changed(services: Services) -> Result<(), eyre::Report> {
    let (project_id, tags) = seeded_project(&services.statuses).await?;
    let todo = status_named(&tags, TODO_STATUS_NAME)?.clone();

    let modified = services
        .statuses
        .modify_status(project_id, todo.id(), StatusPatch::new().with_color("#ffffff"))
        .await;
    let deleted = services.statuses.delete_status(project_id, todo.id()).await;
    let stored = services.statuses.find_by_id(todo.id()).await?;

    let expected = StatusValidationError::NotModifiable("Todo".to_owned());
    eyre::ensure!(is_validation_error(&modified, &expected), "modify: {modified:?}");
    eyre::ensure!(is_validation_error(&deleted, &expected), "delete: {deleted:?}");
    eyre::ensure!(stored == Some(todo), "protected status must be unchanged");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_frees_the_name_and_keeps_positions(
    services: Services,
) -> Result<(), eyre::Report> {
    let (project_id, _) = seeded_project(&services.statuses).await?;
    let blocked = services
        .statuses
        .create_status(project_id, CreateStatusRequest::new("Blocked", "#222222", false))
        .await?;
    let shipped = services
        .statuses
        .create_status(project_id, CreateStatusRequest::new("Shipped", "#333333", true))
        .await?;

    services.statuses.delete_status(project_id, blocked.id()).await?;
    let recreated = services
        .statuses
        .create_status(project_id, CreateStatusRequest::new("blocked", "#444444", false))
        .await?;
    let stored_shipped = services
        .statuses
        .find_by_id(shipped.id())
        .await?
        .ok_or_else(|| eyre::eyre!("shipped status missing"))?;

    eyre::ensure!(stored_shipped.order_index() == 5, "delete must not renumber");
    eyre::ensure!(recreated.order_index() == 6, "recreated status goes last");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reorder_rewrites_positions(services: Services) -> Result<(), eyre::Report> {
    let (project_id, tags) = seeded_project(&services.statuses).await?;
    let mut ids: Vec<_> = tags.iter().map(|tag| tag.id()).collect();
    ids.reverse();

    services.statuses.reorder_statuses(project_id, &ids).await?;
    let listed = services.statuses.list_active(project_id).await?;
    let listed_ids: Vec<_> = listed.iter().map(|tag| tag.id()).collect();
    let positions: Vec<u32> = listed.iter().map(|tag| tag.order_index()).collect();

    eyre::ensure!(listed_ids == ids, "board must follow the new order");
    eyre::ensure!(positions == [0, 1, 2, 3], "positions must be dense");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reorder_missing_a_status_changes_nothing(services: Services) -> Result<(), eyre::Report> {
    let (project_id, tags) = seeded_project(&services.statuses).await?;
    let partial: Vec<_> = tags.iter().skip(1).map(|tag| tag.id()).collect();

    let result = services.statuses.reorder_statuses(project_id, &partial).await;
    let listed = services.statuses.list_active(project_id).await?;

    eyre::ensure!(
        is_validation_error(
            &result,
            &StatusValidationError::MalformedReorder {
                expected: 4,
                received: 3,
            }
        ),
        "unexpected result {result:?}"
    );
    eyre::ensure!(listed == tags, "failed reorder must not persist");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn review_status_is_scoped_to_issues(services: Services) -> Result<(), eyre::Report> {
    let (project_id, _) = seeded_project(&services.statuses).await?;

    let standard = services.statuses.list_for_scope(project_id, StatusScope::Standard).await?;
    let issue = services.statuses.list_for_scope(project_id, StatusScope::Issue).await?;

    eyre::ensure!(standard.len() == 3, "stories see three statuses");
    eyre::ensure!(issue.len() == 4, "issues also see Awaits Review");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn policy_from_json_controls_seeding() -> Result<(), eyre::Report> {
    let policy = StatusPolicy::from_json(r#"{"protected_names": ["Todo", "Doing", "Done"]}"#)?;
    let repository = std::sync::Arc::new(
        scrumboard::status::adapters::memory::InMemoryStatusTagRepository::new(),
    );
    let statuses = StatusRegistryService::with_policy(
        repository,
        std::sync::Arc::new(mockable::DefaultClock),
        policy,
    );
    let project_id = ProjectId::new();

    let seeded = statuses.seed_defaults(project_id).await?;

    eyre::ensure!(seeded.len() == 3, "the review status is not seeded");
    Ok(())
}
