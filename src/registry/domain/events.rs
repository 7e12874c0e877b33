//! Notification vocabulary emitted by registry mutations.

use super::{Principal, Priority, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Notification describing a committed registry mutation.
///
/// Each mutating operation returns exactly one event, produced after every
/// gate has passed and the state change has been applied. Update events
/// carry the task's full current description/due-date/priority triple, not
/// just the changed field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RegistryEvent {
    /// A task was created, self-assigned to its creator.
    TaskCreated {
        /// Newly assigned identifier.
        id: TaskId,
        /// Creator and initial assignee.
        assigned_to: Principal,
        /// Initial description.
        description: String,
        /// Initial due date.
        due_date: DateTime<Utc>,
        /// Initial priority.
        priority: Priority,
        /// Creation timestamp.
        created_at: DateTime<Utc>,
    },
    /// A task was marked complete.
    TaskCompleted {
        /// Completed task.
        id: TaskId,
        /// Acting assignee.
        by: Principal,
    },
    /// A task was deleted and its slot cleared.
    TaskDeleted {
        /// Deleted task.
        id: TaskId,
        /// Acting principal (assignee or owner).
        by: Principal,
    },
    /// Mutation rights over a task changed hands.
    TaskReassigned {
        /// Reassigned task.
        id: TaskId,
        /// Previous assignee.
        from: Principal,
        /// New assignee.
        to: Principal,
    },
    /// A task field was updated.
    TaskUpdated {
        /// Updated task.
        id: TaskId,
        /// Current description after the update.
        description: String,
        /// Current due date after the update.
        due_date: DateTime<Utc>,
        /// Current priority after the update.
        priority: Priority,
    },
    /// The owner paused the registry.
    RegistryPaused {
        /// Acting owner.
        by: Principal,
    },
    /// The owner resumed the registry.
    RegistryResumed {
        /// Acting owner.
        by: Principal,
    },
}
