//! Error types for registry validation and gate failures.

use super::{PauseState, Principal, TaskId};
use thiserror::Error;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors surfaced by registry operations.
///
/// Every gate failure is a distinct caller-visible kind; all errors abort
/// the operation before any state is written, so a failed call leaves the
/// registry unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A principal identity is empty after trimming.
    #[error("principal identity must not be empty")]
    EmptyPrincipal,

    /// The caller lacks the role the operation requires.
    #[error("caller {caller} may not {action}")]
    Unauthorized {
        /// The rejected caller.
        caller: Principal,
        /// Human-readable name of the attempted action.
        action: &'static str,
    },

    /// The identifier is outside the assigned range, or the slot it names
    /// has been deleted and the operation requires a live record.
    #[error("no task with identifier {0}")]
    NotFound(TaskId),

    /// A mutating operation was attempted while the registry is paused.
    #[error("registry is paused")]
    Paused,

    /// A pause or resume toggle targeted the state already in effect.
    #[error("registry is already {0}")]
    InvalidState(PauseState),

    /// The task has already been marked complete.
    #[error("task {0} is already completed")]
    AlreadyCompleted(TaskId),
}

/// Error returned while parsing priorities from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);
