//! Configuration module for Shipyard
//!
//! Configuration hierarchy:
//! 1. Environment variables (SHIPYARD_*)
//! 2. Config file (TOML)
//! 3. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{parse_with_warnings, with_overrides, ConfigWarning};
pub use types::{Config, EventSinkKind, EventsConfig, LogFormat, LoggingConfig};
