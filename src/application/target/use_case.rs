//! Target use cases

use crate::application::bus::{CommandHandler, RequestContext};
use crate::application::services::Services;
use crate::domain::entities::Target;
use crate::domain::error::DomainError;
use crate::domain::value_objects::{TargetId, Url};
use crate::error::ShipyardResult;

use super::commands::{
    CleanupTarget, ConfigureTarget, CreateTarget, ReconfigureTarget, RequestTargetCleanup,
    UpdateTarget,
};

/// Handles every target command
#[derive(Clone)]
pub struct TargetUseCases {
    services: Services,
}

impl TargetUseCases {
    pub fn new(services: Services) -> Self {
        Self { services }
    }

    fn save(&self, target: &mut Target) -> ShipyardResult<()> {
        self.services.targets_writer.write(target)?;
        Ok(())
    }
}

impl CommandHandler<CreateTarget> for TargetUseCases {
    fn handle(&self, ctx: &RequestContext, command: CreateTarget) -> ShipyardResult<TargetId> {
        let url = Url::parse(&command.url)?;
        let url = self.services.targets.check_url_availability(url, None)?;
        let provider = self
            .services
            .targets
            .check_config_availability(command.provider, None)?;

        let mut target = Target::new(command.name, url, provider, ctx.requested_by().clone())?;
        self.save(&mut target)?;

        tracing::info!(target_id = %target.id(), url = %target.url(), "target created");
        Ok(target.id().clone())
    }
}

impl CommandHandler<UpdateTarget> for TargetUseCases {
    fn handle(&self, _ctx: &RequestContext, command: UpdateTarget) -> ShipyardResult<TargetId> {
        let mut target = self.services.load_target(&command.id)?;

        if let Some(name) = command.name {
            target.rename(name)?;
        }

        if let Some(url) = command.url {
            let url = Url::parse(&url)?;
            let requirement = self
                .services
                .targets
                .check_url_availability(url, Some(target.id()))?;
            target.has_url(requirement)?;
        }

        if let Some(provider) = command.provider {
            let requirement = self
                .services
                .targets
                .check_config_availability(provider, Some(target.id()))?;
            target.has_provider(requirement)?;
        }

        self.save(&mut target)?;
        Ok(command.id)
    }
}

impl CommandHandler<ReconfigureTarget> for TargetUseCases {
    fn handle(&self, _ctx: &RequestContext, command: ReconfigureTarget) -> ShipyardResult<()> {
        let mut target = self.services.load_target(&command.id)?;
        target.reconfigure()?;
        self.save(&mut target)?;

        tracing::info!(
            target_id = %command.id,
            version = %target.current_version(),
            "target reconfiguration requested"
        );
        Ok(())
    }
}

impl CommandHandler<ConfigureTarget> for TargetUseCases {
    fn handle(&self, _ctx: &RequestContext, command: ConfigureTarget) -> ShipyardResult<()> {
        let mut target = self.services.load_target(&command.id)?;
        target.configured(command.version, command.error.as_deref());
        self.save(&mut target)?;

        tracing::debug!(
            target_id = %command.id,
            status = ?target.state().status(),
            "target configuration reported"
        );
        Ok(())
    }
}

impl CommandHandler<RequestTargetCleanup> for TargetUseCases {
    fn handle(&self, ctx: &RequestContext, command: RequestTargetCleanup) -> ShipyardResult<()> {
        let mut target = self.services.load_target(&command.id)?;
        let still_used = self.services.apps.has_apps_on_target(&command.id)?;

        target.request_cleanup(still_used, ctx.requested_by().clone())?;
        self.save(&mut target)
    }
}

impl CommandHandler<CleanupTarget> for TargetUseCases {
    fn handle(&self, _ctx: &RequestContext, command: CleanupTarget) -> ShipyardResult<()> {
        let mut target = self.services.load_target(&command.id)?;

        if !target.is_cleanup_requested() {
            return Err(DomainError::TargetCleanupNeeded.into());
        }

        let running = self
            .services
            .deployments
            .has_running_or_pending_on_target(&command.id)?;
        let strategy = target.cleanup_strategy(running)?;

        self.services.provider.cleanup_target(&target, strategy)?;
        target.delete(true)?;
        self.save(&mut target)?;

        tracing::info!(target_id = %command.id, ?strategy, "target deleted");
        Ok(())
    }
}
