//! Authoritative registry state: owner, pause switch, slots, and counters.

use super::{
    PauseState, Principal, Priority, RegistryAction, RegistryError, RegistryEvent, RegistryResult,
    Task, TaskAction, TaskId, TaskSnapshot, require_assignee, require_owner,
};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Storage slot for one assigned identifier.
///
/// Deletion clears the slot in place; the identifier is never reassigned,
/// so the slot position permanently encodes `id - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot {
    Live(Task),
    Cleared,
}

/// The single-owner task registry.
///
/// Holds the full mutable state named by the persistence contract: the
/// slot vector, the monotonic identifier counter, the live-record counter,
/// the owner identity, and the pause flag. Every mutating operation checks
/// all of its gates before writing anything, so a returned error implies
/// the registry is unchanged. Each successful mutation yields the
/// [`RegistryEvent`] describing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    owner: Principal,
    pause: PauseState,
    slots: Vec<Slot>,
    created: u64,
    live: u64,
}

/// Maps an identifier to its slot position.
fn slot_index(id: TaskId) -> Option<usize> {
    id.value()
        .checked_sub(1)
        .and_then(|index| usize::try_from(index).ok())
}

fn updated_event(task: &Task) -> RegistryEvent {
    RegistryEvent::TaskUpdated {
        id: task.id(),
        description: task.description().to_owned(),
        due_date: task.due_date(),
        priority: task.priority(),
    }
}

impl Registry {
    /// Creates an empty active registry owned by the given principal.
    #[must_use]
    pub const fn new(owner: Principal) -> Self {
        Self {
            owner,
            pause: PauseState::Active,
            slots: Vec::new(),
            created: 0,
            live: 0,
        }
    }

    /// Returns the registry owner.
    #[must_use]
    pub const fn owner(&self) -> &Principal {
        &self.owner
    }

    /// Returns whether the registry is paused.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.pause.is_paused()
    }

    /// Returns the number of live (non-deleted) tasks.
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.live
    }

    /// Returns the monotonic identifier counter: the number of tasks ever
    /// created, including deleted ones.
    #[must_use]
    pub const fn created_count(&self) -> u64 {
        self.created
    }

    /// Pauses the registry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Unauthorized`] for non-owner callers and
    /// [`RegistryError::InvalidState`] when already paused.
    pub fn pause(&mut self, caller: &Principal) -> RegistryResult<RegistryEvent> {
        require_owner(caller, &self.owner, RegistryAction::Pause)?;
        if self.pause.is_paused() {
            return Err(RegistryError::InvalidState(PauseState::Paused));
        }
        self.pause = PauseState::Paused;
        Ok(RegistryEvent::RegistryPaused {
            by: caller.clone(),
        })
    }

    /// Resumes the registry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Unauthorized`] for non-owner callers and
    /// [`RegistryError::InvalidState`] when already active.
    pub fn resume(&mut self, caller: &Principal) -> RegistryResult<RegistryEvent> {
        require_owner(caller, &self.owner, RegistryAction::Resume)?;
        if !self.pause.is_paused() {
            return Err(RegistryError::InvalidState(PauseState::Active));
        }
        self.pause = PauseState::Active;
        Ok(RegistryEvent::RegistryResumed {
            by: caller.clone(),
        })
    }

    /// Creates a task assigned to its creator and returns the new
    /// identifier alongside the creation event.
    ///
    /// Identifiers are assigned sequentially starting at 1 and are never
    /// reused; both the monotonic counter and the live-record counter are
    /// incremented.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Paused`] while the registry is paused.
    pub fn create(
        &mut self,
        caller: &Principal,
        description: String,
        due_date: DateTime<Utc>,
        priority: Priority,
        clock: &impl Clock,
    ) -> RegistryResult<(TaskId, RegistryEvent)> {
        self.require_active()?;
        let next = self.created.saturating_add(1);
        let id = TaskId::new(next);
        let task = Task::new(id, description, caller.clone(), due_date, priority, clock);
        let event = RegistryEvent::TaskCreated {
            id,
            assigned_to: caller.clone(),
            description: task.description().to_owned(),
            due_date,
            priority,
            created_at: task.created_at(),
        };
        self.slots.push(Slot::Live(task));
        self.created = next;
        self.live = self.live.saturating_add(1);
        Ok((id, event))
    }

    /// Marks a task complete.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Paused`] while paused,
    /// [`RegistryError::NotFound`] for an unknown or deleted identifier,
    /// [`RegistryError::Unauthorized`] for non-assignee callers, and
    /// [`RegistryError::AlreadyCompleted`] for a second completion.
    pub fn complete(&mut self, caller: &Principal, id: TaskId) -> RegistryResult<RegistryEvent> {
        self.require_active()?;
        require_assignee(caller, self.live_task(id)?, TaskAction::Complete)?;
        let task = self.live_task_mut(id)?;
        task.complete()?;
        Ok(RegistryEvent::TaskCompleted {
            id,
            by: caller.clone(),
        })
    }

    /// Deletes a task on behalf of its assignee, clearing the slot and
    /// decrementing the live-record counter.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Paused`] while paused,
    /// [`RegistryError::NotFound`] for an unknown or deleted identifier,
    /// and [`RegistryError::Unauthorized`] for non-assignee callers.
    pub fn delete(&mut self, caller: &Principal, id: TaskId) -> RegistryResult<RegistryEvent> {
        self.require_active()?;
        require_assignee(caller, self.live_task(id)?, TaskAction::Delete)?;
        self.clear_slot(id)?;
        Ok(RegistryEvent::TaskDeleted {
            id,
            by: caller.clone(),
        })
    }

    /// Deletes any task on behalf of the registry owner.
    ///
    /// Identical in effect to [`Registry::delete`] but gated on the owner
    /// role instead of the assignee. Still requires the registry to be
    /// active.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Paused`] while paused,
    /// [`RegistryError::Unauthorized`] for non-owner callers, and
    /// [`RegistryError::NotFound`] for an unknown or deleted identifier.
    pub fn owner_delete(&mut self, caller: &Principal, id: TaskId) -> RegistryResult<RegistryEvent> {
        self.require_active()?;
        require_owner(caller, &self.owner, RegistryAction::DeleteAnyTask)?;
        self.live_task(id)?;
        self.clear_slot(id)?;
        Ok(RegistryEvent::TaskDeleted {
            id,
            by: caller.clone(),
        })
    }

    /// Hands mutation rights over a task to another principal.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Paused`] while paused,
    /// [`RegistryError::NotFound`] for an unknown or deleted identifier,
    /// and [`RegistryError::Unauthorized`] for non-assignee callers.
    pub fn reassign(
        &mut self,
        caller: &Principal,
        id: TaskId,
        new_assignee: Principal,
    ) -> RegistryResult<RegistryEvent> {
        self.require_active()?;
        require_assignee(caller, self.live_task(id)?, TaskAction::Reassign)?;
        let task = self.live_task_mut(id)?;
        let previous = task.reassign(new_assignee.clone());
        Ok(RegistryEvent::TaskReassigned {
            id,
            from: previous,
            to: new_assignee,
        })
    }

    /// Replaces a task's description.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Paused`] while paused,
    /// [`RegistryError::NotFound`] for an unknown or deleted identifier,
    /// and [`RegistryError::Unauthorized`] for non-assignee callers.
    pub fn update_description(
        &mut self,
        caller: &Principal,
        id: TaskId,
        description: String,
    ) -> RegistryResult<RegistryEvent> {
        self.require_active()?;
        require_assignee(caller, self.live_task(id)?, TaskAction::UpdateDescription)?;
        let task = self.live_task_mut(id)?;
        task.set_description(description);
        Ok(updated_event(task))
    }

    /// Replaces a task's due date.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Paused`] while paused,
    /// [`RegistryError::NotFound`] for an unknown or deleted identifier,
    /// and [`RegistryError::Unauthorized`] for non-assignee callers.
    pub fn update_due_date(
        &mut self,
        caller: &Principal,
        id: TaskId,
        due_date: DateTime<Utc>,
    ) -> RegistryResult<RegistryEvent> {
        self.require_active()?;
        require_assignee(caller, self.live_task(id)?, TaskAction::UpdateDueDate)?;
        let task = self.live_task_mut(id)?;
        task.set_due_date(due_date);
        Ok(updated_event(task))
    }

    /// Replaces a task's priority.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Paused`] while paused,
    /// [`RegistryError::NotFound`] for an unknown or deleted identifier,
    /// and [`RegistryError::Unauthorized`] for non-assignee callers.
    pub fn update_priority(
        &mut self,
        caller: &Principal,
        id: TaskId,
        priority: Priority,
    ) -> RegistryResult<RegistryEvent> {
        self.require_active()?;
        require_assignee(caller, self.live_task(id)?, TaskAction::UpdatePriority)?;
        let task = self.live_task_mut(id)?;
        task.set_priority(priority);
        Ok(updated_event(task))
    }

    /// Returns the snapshot of a slot, including cleared slots.
    ///
    /// A cleared slot reads back as default values rather than an error,
    /// so delete followed by read-back is always well-defined.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] only when the identifier has
    /// never been assigned.
    pub fn get(&self, id: TaskId) -> RegistryResult<TaskSnapshot> {
        let slot = slot_index(id)
            .and_then(|index| self.slots.get(index))
            .ok_or(RegistryError::NotFound(id))?;
        Ok(match slot {
            Slot::Live(task) => TaskSnapshot::from(task),
            Slot::Cleared => TaskSnapshot::cleared(id),
        })
    }

    /// Lists the caller's live tasks sorted by ascending due date, then
    /// returns the requested page.
    ///
    /// The sort is stable: tasks sharing a due date keep ascending
    /// identifier order. A page past the end, or a `page_size` of zero,
    /// yields an empty list.
    #[must_use]
    pub fn list_mine(
        &self,
        caller: &Principal,
        page: usize,
        page_size: usize,
    ) -> Vec<TaskSnapshot> {
        let mut mine: Vec<TaskSnapshot> = self
            .live_tasks()
            .filter(|task| task.assigned_to() == caller)
            .map(TaskSnapshot::from)
            .collect();
        mine.sort_by_key(|snapshot| snapshot.due_date);
        let start = page.saturating_mul(page_size);
        mine.into_iter().skip(start).take(page_size).collect()
    }

    /// Returns identifiers of live tasks with the given priority, in
    /// ascending identifier order.
    #[must_use]
    pub fn list_by_priority(&self, priority: Priority) -> Vec<TaskId> {
        self.live_tasks()
            .filter(|task| task.priority() == priority)
            .map(Task::id)
            .collect()
    }

    /// Returns identifiers of live tasks with the given completion flag,
    /// in ascending identifier order.
    #[must_use]
    pub fn list_by_completion(&self, completed: bool) -> Vec<TaskId> {
        self.live_tasks()
            .filter(|task| task.is_completed() == completed)
            .map(Task::id)
            .collect()
    }

    /// Counts live tasks assigned to the given principal by slot
    /// iteration, independently of the live-record counter.
    #[must_use]
    pub fn count_by_assignee(&self, principal: &Principal) -> u64 {
        self.live_tasks()
            .filter(|task| task.assigned_to() == principal)
            .fold(0, |count, _| count + 1)
    }

    /// Dumps a snapshot of every identifier ever assigned, cleared slots
    /// included as default values.
    #[must_use]
    pub fn list_all(&self) -> Vec<TaskSnapshot> {
        (1_u64..)
            .map(TaskId::new)
            .zip(self.slots.iter())
            .map(|(id, slot)| match slot {
                Slot::Live(task) => TaskSnapshot::from(task),
                Slot::Cleared => TaskSnapshot::cleared(id),
            })
            .collect()
    }

    const fn require_active(&self) -> RegistryResult<()> {
        if self.pause.is_paused() {
            return Err(RegistryError::Paused);
        }
        Ok(())
    }

    fn live_tasks(&self) -> impl Iterator<Item = &Task> {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Live(task) => Some(task),
            Slot::Cleared => None,
        })
    }

    fn live_task(&self, id: TaskId) -> RegistryResult<&Task> {
        slot_index(id)
            .and_then(|index| self.slots.get(index))
            .and_then(|slot| match slot {
                Slot::Live(task) => Some(task),
                Slot::Cleared => None,
            })
            .ok_or(RegistryError::NotFound(id))
    }

    fn live_task_mut(&mut self, id: TaskId) -> RegistryResult<&mut Task> {
        slot_index(id)
            .and_then(|index| self.slots.get_mut(index))
            .and_then(|slot| match slot {
                Slot::Live(task) => Some(task),
                Slot::Cleared => None,
            })
            .ok_or(RegistryError::NotFound(id))
    }

    fn clear_slot(&mut self, id: TaskId) -> RegistryResult<()> {
        let slot = slot_index(id)
            .and_then(|index| self.slots.get_mut(index))
            .ok_or(RegistryError::NotFound(id))?;
        *slot = Slot::Cleared;
        self.live = self.live.saturating_sub(1);
        Ok(())
    }
}
