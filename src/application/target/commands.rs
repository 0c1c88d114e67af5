//! Target commands

use chrono::{DateTime, Utc};

use crate::application::bus::Command;
use crate::domain::value_objects::{ProviderConfig, TargetId};

/// Register a new target, returns its id
#[derive(Debug, Clone)]
pub struct CreateTarget {
    pub name: String,
    pub url: String,
    pub provider: ProviderConfig,
}

impl Command for CreateTarget {
    type Output = TargetId;
    const NAME: &'static str = "create_target";
}

/// Change some of the target attributes, unset fields are left untouched
#[derive(Debug, Clone)]
pub struct UpdateTarget {
    pub id: TargetId,
    pub name: Option<String>,
    pub url: Option<String>,
    pub provider: Option<ProviderConfig>,
}

impl Command for UpdateTarget {
    type Output = TargetId;
    const NAME: &'static str = "update_target";
}

#[derive(Debug, Clone)]
pub struct ReconfigureTarget {
    pub id: TargetId,
}

impl Command for ReconfigureTarget {
    type Output = ();
    const NAME: &'static str = "reconfigure_target";
}

/// Outcome of a configuration attempt, reported by the execution layer
#[derive(Debug, Clone)]
pub struct ConfigureTarget {
    pub id: TargetId,
    pub version: DateTime<Utc>,
    pub error: Option<String>,
}

impl Command for ConfigureTarget {
    type Output = ();
    const NAME: &'static str = "configure_target";
}

#[derive(Debug, Clone)]
pub struct RequestTargetCleanup {
    pub id: TargetId,
}

impl Command for RequestTargetCleanup {
    type Output = ();
    const NAME: &'static str = "request_target_cleanup";
}

/// Remove the target resources through the provider, then delete it
#[derive(Debug, Clone)]
pub struct CleanupTarget {
    pub id: TargetId,
}

impl Command for CleanupTarget {
    type Output = ();
    const NAME: &'static str = "cleanup_target";
}
