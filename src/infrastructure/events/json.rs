//! JSON Event Sink
//!
//! Outputs domain events as NDJSON for CI/automation consumption.

use crate::domain::events::DomainEvent;
use crate::domain::ports::DomainEventSink;
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_line(&self, line: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl DomainEventSink for JsonEventSink {
    fn on_event(&self, event: &DomainEvent) {
        match serde_json::to_string(event) {
            Ok(line) => self.write_line(&line),
            Err(err) => {
                tracing::warn!(event = event.name(), error = %err, "could not serialize event")
            }
        }
    }
}
