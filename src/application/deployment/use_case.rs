//! Deployment use cases
//!
//! New deployments are allocated by their app, so only the deployment is
//! written: its `(app, number)` identity is what the store checks for races.

use crate::application::bus::{CommandHandler, RequestContext};
use crate::application::services::Services;
use crate::domain::entities::Deployment;
use crate::domain::value_objects::{AppId, DeploymentId, DeploymentNumber};
use crate::error::ShipyardResult;

use super::commands::{EndDeployment, Promote, QueueDeployment, Redeploy, StartDeployment};

/// Handles every deployment command
#[derive(Clone)]
pub struct DeploymentUseCases {
    services: Services,
}

impl DeploymentUseCases {
    pub fn new(services: Services) -> Self {
        Self { services }
    }

    fn save(&self, deployment: &mut Deployment) -> ShipyardResult<DeploymentNumber> {
        self.services.deployments_writer.write(deployment)?;
        Ok(deployment.id().deployment_number())
    }

    fn load(&self, app_id: &AppId, number: DeploymentNumber) -> ShipyardResult<Deployment> {
        self.services
            .load_deployment(&DeploymentId::new(app_id.clone(), number))
    }
}

impl CommandHandler<QueueDeployment> for DeploymentUseCases {
    fn handle(
        &self,
        ctx: &RequestContext,
        command: QueueDeployment,
    ) -> ShipyardResult<DeploymentNumber> {
        let mut app = self.services.load_app(&command.app_id)?;
        let mut deployment = app.new_deployment(
            command.source,
            command.environment,
            ctx.requested_by().clone(),
        )?;

        let number = self.save(&mut deployment)?;
        tracing::info!(
            deployment = %deployment.id(),
            environment = %command.environment,
            "deployment queued"
        );
        Ok(number)
    }
}

impl CommandHandler<Promote> for DeploymentUseCases {
    fn handle(&self, ctx: &RequestContext, command: Promote) -> ShipyardResult<DeploymentNumber> {
        let mut app = self.services.load_app(&command.app_id)?;
        let source = self.load(&command.app_id, command.deployment_number)?;

        let mut promoted = app.promote(&source, ctx.requested_by().clone())?;

        let number = self.save(&mut promoted)?;
        tracing::info!(from = %source.id(), to = %promoted.id(), "deployment promoted");
        Ok(number)
    }
}

impl CommandHandler<Redeploy> for DeploymentUseCases {
    fn handle(&self, ctx: &RequestContext, command: Redeploy) -> ShipyardResult<DeploymentNumber> {
        let mut app = self.services.load_app(&command.app_id)?;
        let source = self.load(&command.app_id, command.deployment_number)?;

        let mut redeployed = app.redeploy(&source, ctx.requested_by().clone())?;

        let number = self.save(&mut redeployed)?;
        tracing::info!(from = %source.id(), to = %redeployed.id(), "deployment redeployed");
        Ok(number)
    }
}

impl CommandHandler<StartDeployment> for DeploymentUseCases {
    fn handle(&self, _ctx: &RequestContext, command: StartDeployment) -> ShipyardResult<()> {
        let mut deployment = self.load(&command.app_id, command.deployment_number)?;
        deployment.has_started()?;
        self.save(&mut deployment)?;
        Ok(())
    }
}

impl CommandHandler<EndDeployment> for DeploymentUseCases {
    fn handle(&self, _ctx: &RequestContext, command: EndDeployment) -> ShipyardResult<()> {
        let mut deployment = self.load(&command.app_id, command.deployment_number)?;
        deployment.has_ended(command.error.as_deref())?;
        self.save(&mut deployment)?;

        tracing::info!(
            deployment = %deployment.id(),
            status = ?deployment.state().status(),
            "deployment ended"
        );
        Ok(())
    }
}
