//! App entity
//!
//! An app binds each environment to a target and is the only factory of
//! [`Deployment`]s. It owns the per-app deployment numbering: the next number
//! is always the latest allocated one plus one, so the app and its new
//! deployment must be saved as one consistency unit.

use serde::{Deserialize, Serialize};

use super::deployment::{ConfigSnapshot, Deployment};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::events::{AggregateRoot, EventBuffer};
use crate::domain::value_objects::{
    Action, AppId, AppName, DeploymentId, DeploymentNumber, Environment, EnvironmentConfig,
    EnvironmentConfigRequirement, SourceData, UserId,
};

/// Events raised by an [`App`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum AppEvent {
    #[serde(rename = "app_created")]
    Created(AppCreated),
    #[serde(rename = "app_env_changed")]
    EnvChanged(AppEnvChanged),
    #[serde(rename = "app_cleanup_requested")]
    CleanupRequested(AppCleanupRequested),
    #[serde(rename = "app_deleted")]
    Deleted(AppDeleted),
}

impl AppEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AppEvent::Created(_) => "app_created",
            AppEvent::EnvChanged(_) => "app_env_changed",
            AppEvent::CleanupRequested(_) => "app_cleanup_requested",
            AppEvent::Deleted(_) => "app_deleted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppCreated {
    pub id: AppId,
    pub name: AppName,
    pub production: EnvironmentConfig,
    pub staging: EnvironmentConfig,
    pub created: Action,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppEnvChanged {
    pub id: AppId,
    pub environment: Environment,
    pub config: EnvironmentConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppCleanupRequested {
    pub id: AppId,
    pub requested: Action,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppDeleted {
    pub id: AppId,
}

/// Persisted form of an [`App`]
///
/// The latest deployment number is not part of it: repositories derive it
/// from the stored deployments when loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSnapshot {
    pub id: AppId,
    pub name: AppName,
    pub production: EnvironmentConfig,
    pub staging: EnvironmentConfig,
    pub cleanup_requested: Option<Action>,
    pub created: Action,
    pub version: u64,
}

#[derive(Debug, Clone)]
pub struct App {
    id: AppId,
    name: AppName,
    production: EnvironmentConfig,
    staging: EnvironmentConfig,
    cleanup_requested: Option<Action>,
    created: Action,
    latest_deployment: DeploymentNumber,
    version: u64,
    events: EventBuffer<AppEvent>,
}

impl App {
    pub fn new(
        name: AppName,
        production: EnvironmentConfigRequirement,
        staging: EnvironmentConfigRequirement,
        created_by: UserId,
    ) -> DomainResult<Self> {
        let production = production.met()?;
        let staging = staging.met()?;

        let mut app = Self {
            id: AppId::generate(),
            name,
            production,
            staging,
            cleanup_requested: None,
            created: Action::new(created_by),
            latest_deployment: DeploymentNumber::NONE,
            version: 0,
            events: EventBuffer::new(),
        };

        app.events.raise(AppEvent::Created(AppCreated {
            id: app.id.clone(),
            name: app.name.clone(),
            production: app.production.clone(),
            staging: app.staging.clone(),
            created: app.created.clone(),
        }));

        Ok(app)
    }

    pub fn from_snapshot(snapshot: AppSnapshot, latest_deployment: DeploymentNumber) -> Self {
        Self {
            id: snapshot.id,
            name: snapshot.name,
            production: snapshot.production,
            staging: snapshot.staging,
            cleanup_requested: snapshot.cleanup_requested,
            created: snapshot.created,
            latest_deployment,
            version: snapshot.version,
            events: EventBuffer::new(),
        }
    }

    pub fn snapshot(&self) -> AppSnapshot {
        AppSnapshot {
            id: self.id.clone(),
            name: self.name.clone(),
            production: self.production.clone(),
            staging: self.staging.clone(),
            cleanup_requested: self.cleanup_requested.clone(),
            created: self.created.clone(),
            version: self.version,
        }
    }

    pub fn id(&self) -> &AppId {
        &self.id
    }

    pub fn name(&self) -> &AppName {
        &self.name
    }

    pub fn created(&self) -> &Action {
        &self.created
    }

    pub fn environment_config(&self, environment: Environment) -> &EnvironmentConfig {
        match environment {
            Environment::Production => &self.production,
            Environment::Staging => &self.staging,
        }
    }

    pub fn cleanup_requested(&self) -> Option<&Action> {
        self.cleanup_requested.as_ref()
    }

    /// Number of the last deployment allocated by this app
    pub fn latest_deployment_number(&self) -> DeploymentNumber {
        self.latest_deployment
    }

    pub fn has_production_config(
        &mut self,
        requirement: EnvironmentConfigRequirement,
    ) -> DomainResult<()> {
        self.has_environment_config(Environment::Production, requirement)
    }

    pub fn has_staging_config(
        &mut self,
        requirement: EnvironmentConfigRequirement,
    ) -> DomainResult<()> {
        self.has_environment_config(Environment::Staging, requirement)
    }

    /// Flag the app for removal. Repeated requests are no-ops.
    pub fn request_cleanup(&mut self, requested_by: UserId) {
        if self.cleanup_requested.is_some() {
            return;
        }

        let requested = Action::new(requested_by);
        self.cleanup_requested = Some(requested.clone());
        self.events
            .raise(AppEvent::CleanupRequested(AppCleanupRequested {
                id: self.id.clone(),
                requested,
            }));
    }

    pub fn delete(&mut self, resources_cleaned_up: bool) -> DomainResult<()> {
        if self.cleanup_requested.is_none() || !resources_cleaned_up {
            return Err(DomainError::AppCleanupNeeded);
        }

        self.events.raise(AppEvent::Deleted(AppDeleted {
            id: self.id.clone(),
        }));

        Ok(())
    }

    /// Allocate the next number and create a pending deployment of `source`
    /// on `environment`, snapshotting its current configuration
    pub fn new_deployment(
        &mut self,
        source: SourceData,
        environment: Environment,
        requested_by: UserId,
    ) -> DomainResult<Deployment> {
        if self.cleanup_requested.is_some() {
            return Err(DomainError::AppCleanupRequested);
        }

        let number = self
            .latest_deployment
            .next()
            .ok_or(DomainError::DeploymentNumbersExhausted)?;
        let config = ConfigSnapshot::new(
            self.name.clone(),
            environment,
            self.environment_config(environment),
        );

        self.latest_deployment = number;

        Ok(Deployment::new(
            DeploymentId::new(self.id.clone(), number),
            config,
            source,
            requested_by,
        ))
    }

    /// Deploy the payload of a staging deployment to production
    pub fn promote(
        &mut self,
        source: &Deployment,
        requested_by: UserId,
    ) -> DomainResult<Deployment> {
        if source.config().environment().is_production() {
            return Err(DomainError::CouldNotPromoteProductionDeployment);
        }

        self.new_deployment(
            source.source().clone(),
            Environment::Production,
            requested_by,
        )
    }

    /// Deploy the payload of `source` again on its own environment
    pub fn redeploy(
        &mut self,
        source: &Deployment,
        requested_by: UserId,
    ) -> DomainResult<Deployment> {
        self.new_deployment(
            source.source().clone(),
            source.config().environment(),
            requested_by,
        )
    }

    fn has_environment_config(
        &mut self,
        environment: Environment,
        requirement: EnvironmentConfigRequirement,
    ) -> DomainResult<()> {
        if self.cleanup_requested.is_some() {
            return Err(DomainError::AppCleanupRequested);
        }

        let config = requirement.met()?;
        let current = match environment {
            Environment::Production => &mut self.production,
            Environment::Staging => &mut self.staging,
        };

        if *current == config {
            return Ok(());
        }

        *current = config.clone();
        self.events.raise(AppEvent::EnvChanged(AppEnvChanged {
            id: self.id.clone(),
            environment,
            config,
        }));

        Ok(())
    }
}

impl AggregateRoot for App {
    const KIND: &'static str = "app";

    type Id = AppId;
    type Event = AppEvent;

    fn id(&self) -> &AppId {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }

    fn pending_events(&self) -> &[AppEvent] {
        self.events.pending()
    }

    fn commit(&mut self) -> Vec<AppEvent> {
        self.version += 1;
        self.events.drain()
    }
}
