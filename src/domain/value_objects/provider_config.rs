//! Provider configuration value object
//!
//! Connection data a provider needs to reach a target. The domain only cares
//! about equality and the [`Fingerprint`]; everything else is opaque.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Fingerprint;

/// Provider specific configuration of a target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProviderConfig {
    /// A Docker engine, local or reached over SSH
    Docker(DockerConfig),
}

impl ProviderConfig {
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderConfig::Docker(_) => "docker",
        }
    }

    /// Identity of the resources managed through this configuration
    pub fn fingerprint(&self) -> Fingerprint {
        match self {
            ProviderConfig::Docker(config) => {
                Fingerprint::compute(self.kind(), config.host.as_deref().unwrap_or(""))
            }
        }
    }
}

impl From<DockerConfig> for ProviderConfig {
    fn from(config: DockerConfig) -> Self {
        ProviderConfig::Docker(config)
    }
}

impl fmt::Display for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderConfig::Docker(config) => match &config.host {
                Some(host) => write!(f, "docker@{}", host),
                None => write!(f, "docker@local"),
            },
        }
    }
}

/// Docker engine connection settings
///
/// Only the host takes part in the fingerprint: user, port and key may be
/// rotated without changing which engine is managed.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
}

impl DockerConfig {
    /// The engine running next to the platform
    pub fn local() -> Self {
        Self::default()
    }

    /// An engine reached over SSH
    pub fn remote(host: impl Into<String>) -> Self {
        Self {
            host: Some(host.into()),
            ..Self::default()
        }
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_private_key(mut self, key: impl Into<String>) -> Self {
        self.private_key = Some(key.into());
        self
    }
}

impl fmt::Debug for DockerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DockerConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("port", &self.port)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
