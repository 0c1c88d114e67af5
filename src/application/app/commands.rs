//! App commands

use crate::application::bus::Command;
use crate::domain::value_objects::{AppId, EnvironmentConfig};

/// Register a new app bound to a target for each environment
#[derive(Debug, Clone)]
pub struct CreateApp {
    pub name: String,
    pub production: EnvironmentConfig,
    pub staging: EnvironmentConfig,
}

impl Command for CreateApp {
    type Output = AppId;
    const NAME: &'static str = "create_app";
}

/// Rebind one or both environments
#[derive(Debug, Clone)]
pub struct UpdateAppEnvironments {
    pub id: AppId,
    pub production: Option<EnvironmentConfig>,
    pub staging: Option<EnvironmentConfig>,
}

impl Command for UpdateAppEnvironments {
    type Output = ();
    const NAME: &'static str = "update_app_environments";
}

#[derive(Debug, Clone)]
pub struct RequestAppCleanup {
    pub id: AppId,
}

impl Command for RequestAppCleanup {
    type Output = ();
    const NAME: &'static str = "request_app_cleanup";
}

/// Remove the app resources from its targets, then delete it
#[derive(Debug, Clone)]
pub struct CleanupApp {
    pub id: AppId,
}

impl Command for CleanupApp {
    type Output = ();
    const NAME: &'static str = "cleanup_app";
}
