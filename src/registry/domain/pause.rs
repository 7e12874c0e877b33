//! Pause switch state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// State of the registry-wide pause switch.
///
/// The registry starts `Active`. Only the owner may toggle the state, and
/// each toggle must actually change it; re-pausing a paused registry is an
/// [`super::RegistryError::InvalidState`] failure rather than a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PauseState {
    /// Mutations are accepted.
    #[default]
    Active,
    /// Mutations are rejected; reads remain available.
    Paused,
}

impl PauseState {
    /// Returns whether the registry is paused.
    #[must_use]
    pub const fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }

    /// Returns the canonical textual representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
        }
    }
}

impl fmt::Display for PauseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
