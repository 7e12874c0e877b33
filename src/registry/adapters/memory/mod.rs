//! In-memory adapters for registry ports.

mod events;

pub use events::{NullEventSink, RecordingEventSink};
