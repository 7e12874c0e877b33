//! Single-owner task registry.
//!
//! The registry owns the authoritative mapping from task identifier to task
//! record, assigns identifiers monotonically, and enforces three independent
//! gates on every mutation: the pause switch, identifier liveness, and
//! role equality (assignee or owner). Reads are never gated and remain
//! available while the registry is paused. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
