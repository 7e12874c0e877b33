//! Roster: a single-owner task registry.
//!
//! This crate provides a mutable collection of task records, each assigned
//! to exactly one principal, with lifecycle operations (create, complete,
//! update, reassign, delete) gated by role checks and a global pause switch.
//! Caller authentication is the embedding environment's job; operations
//! receive an already-resolved [`registry::domain::Principal`].
//!
//! # Architecture
//!
//! Roster follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`registry`]: Task records, authorization, pause control, and queries

pub mod registry;
