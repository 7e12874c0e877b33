//! Unit tests for the registry bounded context.
#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

mod service_tests;

use crate::registry::domain::Principal;
use chrono::{DateTime, Utc};

/// Builds a principal from a literal, panicking on invalid test input.
fn principal(name: &str) -> Principal {
    Principal::new(name).expect("valid test principal")
}

/// Builds a due date at the given offset in seconds from the epoch.
fn due(seconds: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(seconds, 0).expect("valid test timestamp")
}
