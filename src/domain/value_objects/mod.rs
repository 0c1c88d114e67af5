//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod action;
mod app_name;
mod environment;
mod fingerprint;
mod ids;
mod provider_config;
mod requirement;
mod source;
mod target_url;

pub use action::Action;
pub use app_name::AppName;
pub use environment::{Environment, EnvironmentConfig, ServicesEnv};
pub use fingerprint::Fingerprint;
pub use ids::{AppId, DeploymentId, DeploymentNumber, TargetId, UserId};
pub use provider_config::{DockerConfig, ProviderConfig};
pub use requirement::{
    EnvironmentConfigRequirement, ProviderConfigRequirement, TargetUrlRequirement,
};
pub use source::SourceData;
pub use target_url::Url;
