//! Task aggregate root and its read view.

use super::{Principal, Priority, RegistryError, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A live task record.
///
/// Exactly one principal (`assigned_to`) holds mutation rights over a task
/// at any time. Field mutators are crate-private so that every change flows
/// through the registry's authorization and pause gates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    description: String,
    assigned_to: Principal,
    completed: bool,
    due_date: DateTime<Utc>,
    priority: Priority,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new incomplete task assigned to its creator.
    pub(crate) fn new(
        id: TaskId,
        description: String,
        assigned_to: Principal,
        due_date: DateTime<Utc>,
        priority: Priority,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id,
            description,
            assigned_to,
            completed: false,
            due_date,
            priority,
            created_at: clock.utc(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the principal currently holding mutation rights.
    #[must_use]
    pub const fn assigned_to(&self) -> &Principal {
        &self.assigned_to
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the caller-supplied due date.
    #[must_use]
    pub const fn due_date(&self) -> DateTime<Utc> {
        self.due_date
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Marks the task complete. Completion is one-way.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::AlreadyCompleted`] if the task is already
    /// complete.
    pub(crate) const fn complete(&mut self) -> Result<(), RegistryError> {
        if self.completed {
            return Err(RegistryError::AlreadyCompleted(self.id));
        }
        self.completed = true;
        Ok(())
    }

    /// Swaps the assignee, returning the previous one.
    pub(crate) fn reassign(&mut self, new_assignee: Principal) -> Principal {
        std::mem::replace(&mut self.assigned_to, new_assignee)
    }

    /// Replaces the description.
    pub(crate) fn set_description(&mut self, description: String) {
        self.description = description;
    }

    /// Replaces the due date.
    pub(crate) const fn set_due_date(&mut self, due_date: DateTime<Utc>) {
        self.due_date = due_date;
    }

    /// Replaces the priority.
    pub(crate) const fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }
}

/// Point-in-time read view of a task slot.
///
/// A cleared (deleted) slot is still addressable by its former identifier
/// and reads back as defaults: empty description, absent assignee, not
/// completed, epoch timestamps, low priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSnapshot {
    /// Task identifier.
    pub id: TaskId,
    /// Task description.
    pub description: String,
    /// Current assignee, or `None` for a cleared slot.
    pub assigned_to: Option<Principal>,
    /// Completion flag.
    pub completed: bool,
    /// Caller-supplied due date.
    pub due_date: DateTime<Utc>,
    /// Task priority.
    pub priority: Priority,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl TaskSnapshot {
    /// Returns the default-valued view of a cleared slot.
    #[must_use]
    pub const fn cleared(id: TaskId) -> Self {
        Self {
            id,
            description: String::new(),
            assigned_to: None,
            completed: false,
            due_date: DateTime::<Utc>::UNIX_EPOCH,
            priority: Priority::Low,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }
}

impl From<&Task> for TaskSnapshot {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            description: task.description().to_owned(),
            assigned_to: Some(task.assigned_to().clone()),
            completed: task.is_completed(),
            due_date: task.due_date(),
            priority: task.priority(),
            created_at: task.created_at(),
        }
    }
}
