//! Event Sink Implementations
//!
//! Provides concrete implementations of DomainEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - TracingEventSink: structured log lines

mod json;
mod log;

pub use self::json::JsonEventSink;
pub use self::log::TracingEventSink;
