//! Adapter implementations of registry ports.

pub mod memory;
