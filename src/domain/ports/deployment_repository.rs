//! Deployment repository ports

use crate::domain::entities::Deployment;
use crate::domain::value_objects::{AppId, DeploymentId, Environment, TargetId};

use super::StoreResult;

/// Facts about the deployments of one app environment on one target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeploymentsOnTarget {
    pub running_or_pending: bool,
    pub successful: bool,
}

pub trait DeploymentsReader: Send + Sync {
    fn get_by_id(&self, id: &DeploymentId) -> StoreResult<Option<Deployment>>;

    fn has_running_or_pending_on_target(&self, target: &TargetId) -> StoreResult<bool>;

    fn deployments_state_on_app_target(
        &self,
        app: &AppId,
        environment: Environment,
        target: &TargetId,
    ) -> StoreResult<DeploymentsOnTarget>;
}

pub trait DeploymentsWriter: Send + Sync {
    /// Store a deployment. A new deployment whose number is already taken
    /// for its app must be rejected with a conflict.
    fn write(&self, deployment: &mut Deployment) -> StoreResult<()>;
}
