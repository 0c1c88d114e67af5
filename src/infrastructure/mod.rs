//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! ## Structure
//!
//! - `repositories/` - Repository implementations (InMemoryStore)
//! - `events/` - Event sinks (Json, Tracing)

pub mod events;
pub mod repositories;

use std::sync::Arc;

use crate::config::EventSinkKind;
use crate::domain::ports::{DomainEventSink, NoopEventSink};

// Re-export for convenience
pub use events::{JsonEventSink, TracingEventSink};
pub use repositories::InMemoryStore;

/// Event sink selected by configuration
pub fn event_sink(kind: EventSinkKind) -> Arc<dyn DomainEventSink> {
    match kind {
        EventSinkKind::Json => Arc::new(JsonEventSink::stdout()),
        EventSinkKind::Tracing => Arc::new(TracingEventSink),
        EventSinkKind::None => Arc::new(NoopEventSink),
    }
}
