//! Authorization policy for registry operations.
//!
//! All role decisions live here as equality checks over principals, so the
//! rule set stays auditable in one place: assignee-gated task actions in
//! [`require_assignee`] and owner-gated registry actions in
//! [`require_owner`].

use super::{Principal, RegistryError, Task};

/// Task mutations gated on the current assignee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskAction {
    /// Mark the task complete.
    Complete,
    /// Replace the task description.
    UpdateDescription,
    /// Replace the task due date.
    UpdateDueDate,
    /// Replace the task priority.
    UpdatePriority,
    /// Hand mutation rights to another principal.
    Reassign,
    /// Delete the task.
    Delete,
}

impl TaskAction {
    /// Returns the action name used in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Complete => "complete the task",
            Self::UpdateDescription => "update the task description",
            Self::UpdateDueDate => "update the task due date",
            Self::UpdatePriority => "update the task priority",
            Self::Reassign => "reassign the task",
            Self::Delete => "delete the task",
        }
    }
}

/// Registry-wide actions gated on the owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryAction {
    /// Pause the registry.
    Pause,
    /// Resume the registry.
    Resume,
    /// Delete any task regardless of assignee.
    DeleteAnyTask,
}

impl RegistryAction {
    /// Returns the action name used in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pause => "pause the registry",
            Self::Resume => "resume the registry",
            Self::DeleteAnyTask => "delete another principal's task",
        }
    }
}

/// Allows the action only for the task's current assignee.
///
/// # Errors
///
/// Returns [`RegistryError::Unauthorized`] when the caller is not the
/// assignee.
pub fn require_assignee(
    caller: &Principal,
    task: &Task,
    action: TaskAction,
) -> Result<(), RegistryError> {
    if caller == task.assigned_to() {
        return Ok(());
    }
    Err(RegistryError::Unauthorized {
        caller: caller.clone(),
        action: action.as_str(),
    })
}

/// Allows the action only for the registry owner.
///
/// # Errors
///
/// Returns [`RegistryError::Unauthorized`] when the caller is not the
/// owner.
pub fn require_owner(
    caller: &Principal,
    owner: &Principal,
    action: RegistryAction,
) -> Result<(), RegistryError> {
    if caller == owner {
        return Ok(());
    }
    Err(RegistryError::Unauthorized {
        caller: caller.clone(),
        action: action.as_str(),
    })
}
