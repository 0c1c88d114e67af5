//! Requirements
//!
//! A candidate value bundled with facts resolved by the caller against
//! storage (is this url unique? does this target exist?). Aggregates consume
//! them through `met()` and never query storage themselves.

use super::{EnvironmentConfig, ProviderConfig, Url};
use crate::domain::error::{DomainError, DomainResult};

/// A target url and whether no other target uses it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetUrlRequirement {
    url: Url,
    unique: bool,
}

impl TargetUrlRequirement {
    pub fn new(url: Url, unique: bool) -> Self {
        Self { url, unique }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn met(self) -> DomainResult<Url> {
        if !self.unique {
            return Err(DomainError::UrlAlreadyTaken);
        }
        Ok(self.url)
    }
}

/// A provider configuration and whether no other target uses it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfigRequirement {
    config: ProviderConfig,
    unique: bool,
}

impl ProviderConfigRequirement {
    pub fn new(config: ProviderConfig, unique: bool) -> Self {
        Self { config, unique }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub fn met(self) -> DomainResult<ProviderConfig> {
        if !self.unique {
            return Err(DomainError::ConfigAlreadyTaken);
        }
        Ok(self.config)
    }
}

/// An environment binding, whether its target exists and whether the app
/// name is still free on that target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentConfigRequirement {
    config: EnvironmentConfig,
    target_found: bool,
    available: bool,
}

impl EnvironmentConfigRequirement {
    pub fn new(config: EnvironmentConfig, target_found: bool, available: bool) -> Self {
        Self {
            config,
            target_found,
            available,
        }
    }

    pub fn config(&self) -> &EnvironmentConfig {
        &self.config
    }

    pub fn met(self) -> DomainResult<EnvironmentConfig> {
        if !self.target_found {
            return Err(DomainError::TargetNotFound);
        }
        if !self.available {
            return Err(DomainError::AppNameAlreadyTaken);
        }
        Ok(self.config)
    }
}
