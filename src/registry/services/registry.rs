//! Async facade over the registry state.

use crate::registry::{
    domain::{
        Principal, Priority, Registry, RegistryEvent, RegistryResult, TaskId, TaskSnapshot,
    },
    ports::EventSink,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    description: String,
    due_date: DateTime<Utc>,
    priority: Priority,
}

impl CreateTaskRequest {
    /// Creates a request with the task's initial fields.
    #[must_use]
    pub fn new(
        description: impl Into<String>,
        due_date: DateTime<Utc>,
        priority: Priority,
    ) -> Self {
        Self {
            description: description.into(),
            due_date,
            priority,
        }
    }
}

/// Task registry orchestration service.
///
/// Serializes every mutating operation behind a single write lock so each
/// call runs to completion with no interleaving, and publishes the
/// resulting event while still holding the lock so delivery order matches
/// mutation order. Reads share the lock and observe consistent snapshots,
/// in either pause state.
///
/// Callers are resolved by the embedding environment and passed in as
/// [`Principal`] values; they are never taken from request payloads.
#[derive(Clone)]
pub struct RegistryService<E, C>
where
    E: EventSink,
    C: Clock + Send + Sync,
{
    state: Arc<RwLock<Registry>>,
    events: Arc<E>,
    clock: Arc<C>,
}

impl<E, C> RegistryService<E, C>
where
    E: EventSink,
    C: Clock + Send + Sync,
{
    /// Creates a service owning a fresh active registry.
    #[must_use]
    pub fn new(owner: Principal, events: Arc<E>, clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(Registry::new(owner))),
            events,
            clock,
        }
    }

    /// Creates a task assigned to the caller and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`crate::registry::domain::RegistryError::Paused`] while
    /// the registry is paused.
    pub async fn create(
        &self,
        caller: &Principal,
        request: CreateTaskRequest,
    ) -> RegistryResult<TaskId> {
        let mut state = self.state.write().await;
        let (id, event) = state.create(
            caller,
            request.description,
            request.due_date,
            request.priority,
            &*self.clock,
        )?;
        self.events.publish(event).await;
        Ok(id)
    }

    /// Marks a task complete on behalf of its assignee.
    ///
    /// # Errors
    ///
    /// Propagates the pause, liveness, assignee, and already-completed
    /// gate failures from [`Registry::complete`].
    pub async fn complete(&self, caller: &Principal, id: TaskId) -> RegistryResult<()> {
        self.mutate(|state| state.complete(caller, id)).await
    }

    /// Deletes a task on behalf of its assignee.
    ///
    /// # Errors
    ///
    /// Propagates the pause, liveness, and assignee gate failures from
    /// [`Registry::delete`].
    pub async fn delete(&self, caller: &Principal, id: TaskId) -> RegistryResult<()> {
        self.mutate(|state| state.delete(caller, id)).await
    }

    /// Deletes any task on behalf of the registry owner.
    ///
    /// # Errors
    ///
    /// Propagates the pause, owner, and liveness gate failures from
    /// [`Registry::owner_delete`].
    pub async fn owner_delete(&self, caller: &Principal, id: TaskId) -> RegistryResult<()> {
        self.mutate(|state| state.owner_delete(caller, id)).await
    }

    /// Hands a task to a new assignee on behalf of the current one.
    ///
    /// # Errors
    ///
    /// Propagates the pause, liveness, and assignee gate failures from
    /// [`Registry::reassign`].
    pub async fn reassign(
        &self,
        caller: &Principal,
        id: TaskId,
        new_assignee: Principal,
    ) -> RegistryResult<()> {
        self.mutate(|state| state.reassign(caller, id, new_assignee))
            .await
    }

    /// Replaces a task's description on behalf of its assignee.
    ///
    /// # Errors
    ///
    /// Propagates the pause, liveness, and assignee gate failures from
    /// [`Registry::update_description`].
    pub async fn update_description(
        &self,
        caller: &Principal,
        id: TaskId,
        description: impl Into<String> + Send,
    ) -> RegistryResult<()> {
        let description = description.into();
        self.mutate(|state| state.update_description(caller, id, description))
            .await
    }

    /// Replaces a task's due date on behalf of its assignee.
    ///
    /// # Errors
    ///
    /// Propagates the pause, liveness, and assignee gate failures from
    /// [`Registry::update_due_date`].
    pub async fn update_due_date(
        &self,
        caller: &Principal,
        id: TaskId,
        due_date: DateTime<Utc>,
    ) -> RegistryResult<()> {
        self.mutate(|state| state.update_due_date(caller, id, due_date))
            .await
    }

    /// Replaces a task's priority on behalf of its assignee.
    ///
    /// # Errors
    ///
    /// Propagates the pause, liveness, and assignee gate failures from
    /// [`Registry::update_priority`].
    pub async fn update_priority(
        &self,
        caller: &Principal,
        id: TaskId,
        priority: Priority,
    ) -> RegistryResult<()> {
        self.mutate(|state| state.update_priority(caller, id, priority))
            .await
    }

    /// Pauses the registry on behalf of the owner.
    ///
    /// # Errors
    ///
    /// Propagates the owner and toggle-state gate failures from
    /// [`Registry::pause`].
    pub async fn pause(&self, caller: &Principal) -> RegistryResult<()> {
        self.mutate(|state| state.pause(caller)).await
    }

    /// Resumes the registry on behalf of the owner.
    ///
    /// # Errors
    ///
    /// Propagates the owner and toggle-state gate failures from
    /// [`Registry::resume`].
    pub async fn resume(&self, caller: &Principal) -> RegistryResult<()> {
        self.mutate(|state| state.resume(caller)).await
    }

    /// Returns the snapshot of a slot, cleared slots included.
    ///
    /// # Errors
    ///
    /// Returns [`crate::registry::domain::RegistryError::NotFound`] when
    /// the identifier has never been assigned.
    pub async fn get(&self, id: TaskId) -> RegistryResult<TaskSnapshot> {
        self.state.read().await.get(id)
    }

    /// Returns one page of the caller's tasks sorted by due date.
    pub async fn list_mine(
        &self,
        caller: &Principal,
        page: usize,
        page_size: usize,
    ) -> Vec<TaskSnapshot> {
        self.state.read().await.list_mine(caller, page, page_size)
    }

    /// Returns identifiers of live tasks with the given priority.
    pub async fn list_by_priority(&self, priority: Priority) -> Vec<TaskId> {
        self.state.read().await.list_by_priority(priority)
    }

    /// Returns identifiers of live tasks with the given completion flag.
    pub async fn list_by_completion(&self, completed: bool) -> Vec<TaskId> {
        self.state.read().await.list_by_completion(completed)
    }

    /// Counts live tasks assigned to the given principal.
    pub async fn count_by_assignee(&self, principal: &Principal) -> u64 {
        self.state.read().await.count_by_assignee(principal)
    }

    /// Dumps a snapshot of every identifier ever assigned.
    pub async fn list_all(&self) -> Vec<TaskSnapshot> {
        self.state.read().await.list_all()
    }

    /// Returns whether the registry is paused.
    pub async fn is_paused(&self) -> bool {
        self.state.read().await.is_paused()
    }

    /// Returns the live-record counter.
    pub async fn count(&self) -> u64 {
        self.state.read().await.count()
    }

    /// Returns the monotonic identifier counter.
    pub async fn created_count(&self) -> u64 {
        self.state.read().await.created_count()
    }

    /// Runs one mutation under the write lock and publishes its event
    /// before releasing, so event order matches mutation order.
    async fn mutate<F>(&self, op: F) -> RegistryResult<()>
    where
        F: FnOnce(&mut Registry) -> RegistryResult<RegistryEvent> + Send,
    {
        let mut state = self.state.write().await;
        let event = op(&mut state)?;
        self.events.publish(event).await;
        Ok(())
    }
}
