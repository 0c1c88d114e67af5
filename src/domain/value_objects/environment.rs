//! Environments and their per-app configuration

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::TargetId;

/// Logical environment an app is deployed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    Staging,
}

impl Environment {
    pub const ALL: [Environment; 2] = [Environment::Production, Environment::Staging];

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Production => "production",
            Environment::Staging => "staging",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "staging" => Ok(Environment::Staging),
            other => Err(format!("unknown environment '{}'", other)),
        }
    }
}

/// Environment variables per service name
pub type ServicesEnv = BTreeMap<String, BTreeMap<String, String>>;

/// Binding of an app environment to a target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    target: TargetId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    vars: Option<ServicesEnv>,
}

impl EnvironmentConfig {
    pub fn new(target: impl Into<TargetId>) -> Self {
        Self {
            target: target.into(),
            vars: None,
        }
    }

    pub fn with_vars(mut self, vars: ServicesEnv) -> Self {
        self.vars = Some(vars);
        self
    }

    pub fn target(&self) -> &TargetId {
        &self.target
    }

    pub fn vars(&self) -> Option<&ServicesEnv> {
        self.vars.as_ref()
    }
}
