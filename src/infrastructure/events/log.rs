//! Tracing Event Sink
//!
//! Emits every committed domain event as an `info` log line.

use crate::domain::events::DomainEvent;
use crate::domain::ports::DomainEventSink;

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl DomainEventSink for TracingEventSink {
    fn on_event(&self, event: &DomainEvent) {
        let payload = serde_json::to_string(event).unwrap_or_default();
        tracing::info!(target: "shipyard::events", event = event.name(), %payload, "domain event");
    }
}
