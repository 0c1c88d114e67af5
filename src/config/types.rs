//! Configuration types

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ShipyardResult;

use super::loader::{self, ConfigWarning};

/// Where committed domain events are published
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventSinkKind {
    /// NDJSON lines on stdout
    Json,
    /// Structured log lines
    #[default]
    Tracing,
    None,
}

impl std::str::FromStr for EventSinkKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(EventSinkKind::Json),
            "tracing" | "log" => Ok(EventSinkKind::Tracing),
            "none" | "off" => Ok(EventSinkKind::None),
            other => Err(format!("unknown event sink '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventsConfig {
    #[serde(default)]
    pub sink: EventSinkKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directives, e.g. `info` or `shipyard=debug`
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Full configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub events: EventsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file, ignoring unknown keys
    pub fn load(path: &Path) -> ShipyardResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect warnings for unknown keys
    pub fn load_with_warnings(path: &Path) -> ShipyardResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `path` when it exists, defaults otherwise, then apply env overrides
    pub fn load_or_default(path: Option<&Path>) -> Self {
        loader::load_or_default(path)
    }

    /// Apply environment variable overrides (SHIPYARD_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
