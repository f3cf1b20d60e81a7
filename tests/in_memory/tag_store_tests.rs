//! In-memory integration tests for project tag collections.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::{fixture, rstest};
use scrumboard::{
    project::ProjectId,
    tags::{
        adapters::memory::InMemoryTagRepository,
        domain::{CreateTagRequest, TagKind, TagPatch, TagValidationError},
        services::{TagService, TagServiceError},
    },
};

type TestService = TagService<InMemoryTagRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    TagService::new(Arc::new(InMemoryTagRepository::new()), Arc::new(DefaultClock))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn priorities_are_listed_by_name(service: TestService) -> Result<(), eyre::Report> {
    let project_id = ProjectId::new();
    for (name, color) in [("P2", "#ffaa00"), ("p0", "#ff0000"), ("P1", "#ff5500")] {
        service
            .create_tag(project_id, TagKind::Priority, CreateTagRequest::new(name, color))
            .await?;
    }

    let listed = service.list_tags(project_id, TagKind::Priority).await?;
    let names: Vec<&str> = listed.iter().map(|tag| tag.name()).collect();

    eyre::ensure!(names == ["p0", "P1", "P2"], "unexpected order {names:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn requirement_types_reject_duplicates_per_project(
    service: TestService,
) -> Result<(), eyre::Report> {
    let project_id = ProjectId::new();
    let other_project = ProjectId::new();
    let request = || CreateTagRequest::new("Functional", "#123456");
    service
        .create_tag(project_id, TagKind::RequirementType, request())
        .await?;

    let duplicate = service
        .create_tag(project_id, TagKind::RequirementType, CreateTagRequest::new("FUNCTIONAL", "#000"))
        .await;
    let elsewhere = service
        .create_tag(other_project, TagKind::RequirementType, request())
        .await;

    eyre::ensure!(
        matches!(
            duplicate,
            Err(TagServiceError::Validation(TagValidationError::DuplicateName(_)))
        ),
        "unexpected result {duplicate:?}"
    );
    eyre::ensure!(elsewhere.is_ok(), "other projects keep their own names");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn backlog_tags_can_be_renamed_and_removed(
    service: TestService,
) -> Result<(), eyre::Report> {
    let project_id = ProjectId::new();
    let tag = service
        .create_tag(project_id, TagKind::BacklogTag, CreateTagRequest::new("api", "#444"))
        .await?;

    let renamed = service
        .modify_tag(tag.id(), TagPatch::new().with_name("backend").with_color("#555"))
        .await?;
    service.delete_tag(tag.id()).await?;
    let listed = service.list_tags(project_id, TagKind::BacklogTag).await?;

    eyre::ensure!(renamed.name() == "backend" && renamed.color() == "#555", "patch applied");
    eyre::ensure!(listed.is_empty(), "deleted tags are not listed");
    Ok(())
}
