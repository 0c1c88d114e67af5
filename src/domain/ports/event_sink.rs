//! Domain Event Port
//!
//! Subscribers receive events once the aggregate raising them is stored.

use crate::domain::events::DomainEvent;

/// Trait for receiving domain events
///
/// Implementations can be:
/// - JsonEventSink: NDJSON event stream
/// - TracingEventSink: structured log lines
/// - NoopEventSink: Silent operation
pub trait DomainEventSink: Send + Sync {
    fn on_event(&self, event: &DomainEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DomainEventSink for NoopEventSink {
    fn on_event(&self, _event: &DomainEvent) {
        // Do nothing
    }
}
