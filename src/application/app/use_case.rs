//! App use cases

use crate::application::bus::{CommandHandler, RequestContext};
use crate::application::services::Services;
use crate::domain::entities::App;
use crate::domain::error::DomainError;
use crate::domain::value_objects::{AppId, AppName, Environment};
use crate::error::ShipyardResult;

use super::commands::{CleanupApp, CreateApp, RequestAppCleanup, UpdateAppEnvironments};

/// Handles every app command
#[derive(Clone)]
pub struct AppUseCases {
    services: Services,
}

impl AppUseCases {
    pub fn new(services: Services) -> Self {
        Self { services }
    }

    fn save(&self, app: &mut App) -> ShipyardResult<()> {
        self.services.apps_writer.write(app)?;
        Ok(())
    }

    /// Remove what `app` deployed on the target bound to `environment`
    fn cleanup_environment(&self, app: &App, environment: Environment) -> ShipyardResult<()> {
        let config = app.environment_config(environment);

        // A deleted target has nothing left to remove
        let Some(target) = self.services.targets.get_by_id(config.target())? else {
            tracing::debug!(app_id = %app.id(), %environment, "target already gone");
            return Ok(());
        };

        let facts = self.services.deployments.deployments_state_on_app_target(
            app.id(),
            environment,
            target.id(),
        )?;
        let strategy =
            target.app_cleanup_strategy(facts.running_or_pending, facts.successful)?;

        self.services
            .provider
            .cleanup_app(app, environment, &target, strategy)?;

        tracing::debug!(
            app_id = %app.id(),
            %environment,
            ?strategy,
            "app environment cleaned up"
        );
        Ok(())
    }
}

impl CommandHandler<CreateApp> for AppUseCases {
    fn handle(&self, ctx: &RequestContext, command: CreateApp) -> ShipyardResult<AppId> {
        let name = AppName::parse(&command.name)?;
        let production = self.services.apps.check_naming_availability(
            &name,
            command.production,
            None,
        )?;
        let staging = self.services.apps.check_naming_availability(
            &name,
            command.staging,
            None,
        )?;

        let mut app = App::new(name, production, staging, ctx.requested_by().clone())?;
        self.save(&mut app)?;

        tracing::info!(app_id = %app.id(), name = %app.name(), "app created");
        Ok(app.id().clone())
    }
}

impl CommandHandler<UpdateAppEnvironments> for AppUseCases {
    fn handle(
        &self,
        _ctx: &RequestContext,
        command: UpdateAppEnvironments,
    ) -> ShipyardResult<()> {
        let mut app = self.services.load_app(&command.id)?;

        if let Some(config) = command.production {
            let requirement = self.services.apps.check_naming_availability(
                app.name(),
                config,
                Some(app.id()),
            )?;
            app.has_production_config(requirement)?;
        }

        if let Some(config) = command.staging {
            let requirement = self.services.apps.check_naming_availability(
                app.name(),
                config,
                Some(app.id()),
            )?;
            app.has_staging_config(requirement)?;
        }

        self.save(&mut app)
    }
}

impl CommandHandler<RequestAppCleanup> for AppUseCases {
    fn handle(&self, ctx: &RequestContext, command: RequestAppCleanup) -> ShipyardResult<()> {
        let mut app = self.services.load_app(&command.id)?;
        app.request_cleanup(ctx.requested_by().clone());
        self.save(&mut app)
    }
}

impl CommandHandler<CleanupApp> for AppUseCases {
    fn handle(&self, _ctx: &RequestContext, command: CleanupApp) -> ShipyardResult<()> {
        let mut app = self.services.load_app(&command.id)?;

        if app.cleanup_requested().is_none() {
            return Err(DomainError::AppCleanupNeeded.into());
        }

        for environment in Environment::ALL {
            self.cleanup_environment(&app, environment)?;
        }

        app.delete(true)?;
        self.save(&mut app)?;

        tracing::info!(app_id = %command.id, "app deleted");
        Ok(())
    }
}
