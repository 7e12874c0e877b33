//! Identifier and validated scalar types for the registry domain.

use super::RegistryError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sequential identifier for a task record.
///
/// Identifiers are assigned by the registry starting at 1 and are never
/// reused; 0 never denotes a valid task. The lookup path enforces the
/// range, so construction itself is unvalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Creates a task identifier from a raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a calling party, resolved by the embedding environment.
///
/// Principals are opaque non-empty strings (an account address, a user
/// name). Equality of principals is the sole basis of every authorization
/// decision in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    /// Creates a validated principal identity.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EmptyPrincipal`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, RegistryError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(RegistryError::EmptyPrincipal);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the principal identity as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Principal {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
