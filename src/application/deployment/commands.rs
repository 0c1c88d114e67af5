//! Deployment commands

use crate::application::bus::Command;
use crate::domain::value_objects::{AppId, DeploymentNumber, Environment, SourceData};

/// Queue a new deployment of `source` on one app environment
#[derive(Debug, Clone)]
pub struct QueueDeployment {
    pub app_id: AppId,
    pub environment: Environment,
    pub source: SourceData,
}

impl Command for QueueDeployment {
    type Output = DeploymentNumber;
    const NAME: &'static str = "queue_deployment";
}

/// Deploy the payload of a staging deployment to production
#[derive(Debug, Clone)]
pub struct Promote {
    pub app_id: AppId,
    pub deployment_number: DeploymentNumber,
}

impl Command for Promote {
    type Output = DeploymentNumber;
    const NAME: &'static str = "promote";
}

/// Deploy the payload of a deployment again on its own environment
#[derive(Debug, Clone)]
pub struct Redeploy {
    pub app_id: AppId,
    pub deployment_number: DeploymentNumber,
}

impl Command for Redeploy {
    type Output = DeploymentNumber;
    const NAME: &'static str = "redeploy";
}

/// The execution layer picked a deployment up
#[derive(Debug, Clone)]
pub struct StartDeployment {
    pub app_id: AppId,
    pub deployment_number: DeploymentNumber,
}

impl Command for StartDeployment {
    type Output = ();
    const NAME: &'static str = "start_deployment";
}

/// The execution layer finished a deployment, with an error code on failure
#[derive(Debug, Clone)]
pub struct EndDeployment {
    pub app_id: AppId,
    pub deployment_number: DeploymentNumber,
    pub error: Option<String>,
}

impl Command for EndDeployment {
    type Output = ();
    const NAME: &'static str = "end_deployment";
}
