//! Notification port for committed registry mutations.

use crate::registry::domain::RegistryEvent;
use async_trait::async_trait;

/// Notification delivery contract.
///
/// The service publishes exactly one event per committed mutation, in
/// mutation order. An event describes a change that has already been
/// applied, so delivery is infallible from the registry's point of view;
/// adapters backed by fallible transports must absorb or retry failures
/// internally.
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Delivers one event.
    async fn publish(&self, event: RegistryEvent);
}
