//! Port contracts for the task registry.
//!
//! Ports define infrastructure-agnostic interfaces used by registry
//! services.

pub mod events;

pub use events::EventSink;
