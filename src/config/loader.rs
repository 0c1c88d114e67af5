//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ShipyardError, ShipyardResult};

use super::types::{Config, LogFormat};

/// Non-fatal configuration warning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Parse TOML content, collecting the unknown keys it contains
pub fn parse_with_warnings(content: &str) -> Result<(Config, Vec<String>), toml::de::Error> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })?;

    Ok((config, unknown_paths))
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ShipyardResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let (config, unknown_paths) =
        parse_with_warnings(&content).map_err(|e| ShipyardError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from `path` when it exists, or defaults
///
/// Unknown keys are logged, an unreadable file falls back to defaults.
pub fn load_or_default(path: Option<&Path>) -> Config {
    let config = match path.filter(|p| p.exists()) {
        Some(path) => match load_with_warnings(path) {
            Ok((config, warnings)) => {
                for warning in warnings {
                    tracing::warn!(
                        key = %warning.key,
                        file = %warning.file.display(),
                        line = ?warning.line,
                        suggestion = ?warning.suggestion,
                        "unknown configuration key"
                    );
                }
                config
            }
            Err(err) => {
                tracing::warn!(error = %err, "falling back to default configuration");
                Config::default()
            }
        },
        None => Config::default(),
    };

    with_env_overrides(config)
}

/// Apply environment variable overrides (SHIPYARD_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides looked up through `var`
pub fn with_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    // SHIPYARD_EVENTS
    if let Some(sink) = var("SHIPYARD_EVENTS") {
        match sink.parse() {
            Ok(sink) => config.events.sink = sink,
            Err(err) => tracing::warn!(error = %err, "ignoring SHIPYARD_EVENTS"),
        }
    }

    // SHIPYARD_LOG
    if let Some(level) = var("SHIPYARD_LOG") {
        if !level.trim().is_empty() {
            config.logging.level = level;
        }
    }

    // SHIPYARD_LOG_FORMAT
    if let Some(format) = var("SHIPYARD_LOG_FORMAT") {
        config.logging.format = match format.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        };
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["events", "sink", "logging", "level", "format"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
