//! Service orchestration tests over the async facade.

use super::{due, principal};
use crate::registry::{
    adapters::memory::RecordingEventSink,
    domain::{Priority, RegistryError, RegistryEvent, TaskId, TaskSnapshot},
    services::{CreateTaskRequest, RegistryService},
};
use eyre::ensure;
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use std::sync::Arc;

type TestService = RegistryService<RecordingEventSink, DefaultClock>;

#[fixture]
fn sink() -> RecordingEventSink {
    RecordingEventSink::new()
}

#[fixture]
fn service(sink: RecordingEventSink) -> (TestService, RecordingEventSink) {
    let registry_service = RegistryService::new(
        principal("root"),
        Arc::new(sink.clone()),
        Arc::new(DefaultClock),
    );
    (registry_service, sink)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_assigns_sequential_identifiers(
    service: (TestService, RecordingEventSink),
) -> eyre::Result<()> {
    let (registry_service, _) = service;
    let alice = principal("alice");

    let first = registry_service
        .create(
            &alice,
            CreateTaskRequest::new("one", due(100), Priority::Low),
        )
        .await?;
    let second = registry_service
        .create(
            &alice,
            CreateTaskRequest::new("two", due(200), Priority::High),
        )
        .await?;

    ensure!(first == TaskId::new(1));
    ensure!(second == TaskId::new(2));
    ensure!(registry_service.created_count().await == 2);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn lifecycle_scenario_round_trip(
    service: (TestService, RecordingEventSink),
) -> eyre::Result<()> {
    let (registry_service, _sink) = service;
    let owner = principal("root");
    let alice = principal("alice");

    let first = registry_service
        .create(
            &alice,
            CreateTaskRequest::new("quarterly report", due(100), Priority::High),
        )
        .await?;
    let second = registry_service
        .create(
            &alice,
            CreateTaskRequest::new("book meeting room", due(50), Priority::Low),
        )
        .await?;

    // Due date 50 sorts before 100 regardless of creation order.
    let page = registry_service.list_mine(&alice, 0, 10).await;
    let ids: Vec<TaskId> = page.iter().map(|snapshot| snapshot.id).collect();
    ensure!(ids == vec![second, first]);
    ensure!(registry_service.count_by_assignee(&alice).await == 2);

    registry_service.pause(&owner).await?;
    ensure!(registry_service.is_paused().await);
    let blocked = registry_service.complete(&alice, first).await;
    ensure!(blocked == Err(RegistryError::Paused));

    registry_service.resume(&owner).await?;
    registry_service.complete(&alice, first).await?;
    ensure!(registry_service.get(first).await?.completed);

    registry_service.delete(&alice, second).await?;
    ensure!(registry_service.count().await == 1);
    ensure!(
        registry_service
            .list_by_priority(Priority::Low)
            .await
            .is_empty()
    );
    ensure!(registry_service.get(second).await? == TaskSnapshot::cleared(second));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn events_are_published_in_mutation_order(
    service: (TestService, RecordingEventSink),
) -> eyre::Result<()> {
    let (registry_service, sink) = service;
    let owner = principal("root");
    let alice = principal("alice");

    let id = registry_service
        .create(
            &alice,
            CreateTaskRequest::new("audit log", due(100), Priority::Medium),
        )
        .await?;
    registry_service.pause(&owner).await?;
    registry_service.resume(&owner).await?;
    registry_service.complete(&alice, id).await?;
    registry_service.owner_delete(&owner, id).await?;

    let recorded = sink.recorded();
    let kinds: Vec<&str> = recorded
        .iter()
        .map(|event| match event {
            RegistryEvent::TaskCreated { .. } => "created",
            RegistryEvent::TaskCompleted { .. } => "completed",
            RegistryEvent::TaskDeleted { .. } => "deleted",
            RegistryEvent::TaskReassigned { .. } => "reassigned",
            RegistryEvent::TaskUpdated { .. } => "updated",
            RegistryEvent::RegistryPaused { .. } => "paused",
            RegistryEvent::RegistryResumed { .. } => "resumed",
        })
        .collect();
    ensure!(kinds == vec!["created", "paused", "resumed", "completed", "deleted"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_gates_publish_nothing(
    service: (TestService, RecordingEventSink),
) -> eyre::Result<()> {
    let (registry_service, sink) = service;
    let alice = principal("alice");

    let denied = registry_service.pause(&alice).await;
    ensure!(matches!(denied, Err(RegistryError::Unauthorized { .. })));
    let missing = registry_service.complete(&alice, TaskId::new(1)).await;
    ensure!(missing == Err(RegistryError::NotFound(TaskId::new(1))));

    ensure!(sink.recorded().is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn creation_event_carries_all_initial_fields(
    service: (TestService, RecordingEventSink),
) -> eyre::Result<()> {
    let (registry_service, sink) = service;
    let alice = principal("alice");

    let id = registry_service
        .create(
            &alice,
            CreateTaskRequest::new("prepare slides", due(100), Priority::High),
        )
        .await?;

    let recorded = sink.recorded();
    let Some(RegistryEvent::TaskCreated {
        id: event_id,
        assigned_to,
        description,
        due_date,
        priority,
        ..
    }) = recorded.first()
    else {
        eyre::bail!("expected a creation event, got {recorded:?}");
    };
    ensure!(*event_id == id);
    ensure!(assigned_to == &alice);
    ensure!(description == "prepare slides");
    ensure!(*due_date == due(100));
    ensure!(*priority == Priority::High);
    Ok(())
}
