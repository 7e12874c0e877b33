//! Domain model for the task registry.
//!
//! The registry domain models task creation, completion, single-field
//! updates, reassignment, and deletion under owner/assignee authorization
//! and a global pause switch, while keeping all infrastructure concerns
//! outside of the domain boundary.

mod error;
mod events;
mod ids;
mod pause;
mod policy;
mod priority;
mod registry;
mod task;

pub use error::{ParsePriorityError, RegistryError, RegistryResult};
pub use events::RegistryEvent;
pub use ids::{Principal, TaskId};
pub use pause::PauseState;
pub use policy::{RegistryAction, TaskAction, require_assignee, require_owner};
pub use priority::Priority;
pub use registry::Registry;
pub use task::{Task, TaskSnapshot};
