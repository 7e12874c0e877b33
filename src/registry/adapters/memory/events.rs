//! In-memory event sinks for tests and embedding without notifications.

use async_trait::async_trait;
use std::sync::{Arc, PoisonError, RwLock};

use crate::registry::{domain::RegistryEvent, ports::EventSink};

/// Thread-safe sink that records every published event in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingEventSink {
    events: Arc<RwLock<Vec<RegistryEvent>>>,
}

impl RecordingEventSink {
    /// Creates an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every event recorded so far, in publish order.
    #[must_use]
    pub fn recorded(&self) -> Vec<RegistryEvent> {
        self.events
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl EventSink for RecordingEventSink {
    async fn publish(&self, event: RegistryEvent) {
        self.events
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

/// Sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEventSink;

impl NullEventSink {
    /// Creates a discarding sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventSink for NullEventSink {
    async fn publish(&self, _event: RegistryEvent) {}
}
