//! Deployment entity
//!
//! One attempt at running a source payload on an app environment. The
//! configuration is snapshotted at creation and never changes afterwards;
//! only the execution state moves, driven by the execution layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::events::{AggregateRoot, EventBuffer};
use crate::domain::value_objects::{
    Action, AppName, DeploymentId, Environment, EnvironmentConfig, ServicesEnv, SourceData,
    TargetId, UserId,
};

/// Execution status of a deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentStatus {
    Pending,
    Running,
    Succeeded,
    Failed,
}

/// Configuration resolved when the deployment was created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    app_name: AppName,
    environment: Environment,
    target: TargetId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    vars: Option<ServicesEnv>,
}

impl ConfigSnapshot {
    pub(crate) fn new(
        app_name: AppName,
        environment: Environment,
        config: &EnvironmentConfig,
    ) -> Self {
        Self {
            app_name,
            environment,
            target: config.target().clone(),
            vars: config.vars().cloned(),
        }
    }

    pub fn app_name(&self) -> &AppName {
        &self.app_name
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn target(&self) -> &TargetId {
        &self.target
    }

    pub fn vars(&self) -> Option<&ServicesEnv> {
        self.vars.as_ref()
    }

    /// Name of the project resources are grouped under on the target
    pub fn project_name(&self) -> String {
        format!("{}-{}", self.app_name, self.environment)
    }
}

/// Execution state of a deployment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentState {
    status: DeploymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    started_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    finished_at: Option<DateTime<Utc>>,
}

impl DeploymentState {
    fn pending() -> Self {
        Self {
            status: DeploymentStatus::Pending,
            error_code: None,
            started_at: None,
            finished_at: None,
        }
    }

    pub fn status(&self) -> DeploymentStatus {
        self.status
    }

    pub fn error_code(&self) -> Option<&str> {
        self.error_code.as_deref()
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }
}

/// Events raised by a [`Deployment`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum DeploymentEvent {
    #[serde(rename = "deployment_created")]
    Created(DeploymentCreated),
    #[serde(rename = "deployment_state_changed")]
    StateChanged(DeploymentStateChanged),
}

impl DeploymentEvent {
    pub fn name(&self) -> &'static str {
        match self {
            DeploymentEvent::Created(_) => "deployment_created",
            DeploymentEvent::StateChanged(_) => "deployment_state_changed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeploymentCreated {
    pub id: DeploymentId,
    pub config: ConfigSnapshot,
    pub state: DeploymentState,
    pub source: SourceData,
    pub requested: Action,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeploymentStateChanged {
    pub id: DeploymentId,
    pub state: DeploymentState,
}

/// Persisted form of a [`Deployment`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentSnapshot {
    pub id: DeploymentId,
    pub config: ConfigSnapshot,
    pub state: DeploymentState,
    pub source: SourceData,
    pub requested: Action,
    pub version: u64,
}

#[derive(Debug, Clone)]
pub struct Deployment {
    id: DeploymentId,
    config: ConfigSnapshot,
    state: DeploymentState,
    source: SourceData,
    requested: Action,
    version: u64,
    events: EventBuffer<DeploymentEvent>,
}

impl Deployment {
    /// Only [`App`](super::App) creates deployments, after allocating a number
    pub(crate) fn new(
        id: DeploymentId,
        config: ConfigSnapshot,
        source: SourceData,
        requested_by: UserId,
    ) -> Self {
        let mut deployment = Self {
            id,
            config,
            state: DeploymentState::pending(),
            source,
            requested: Action::new(requested_by),
            version: 0,
            events: EventBuffer::new(),
        };

        deployment
            .events
            .raise(DeploymentEvent::Created(DeploymentCreated {
                id: deployment.id.clone(),
                config: deployment.config.clone(),
                state: deployment.state.clone(),
                source: deployment.source.clone(),
                requested: deployment.requested.clone(),
            }));

        deployment
    }

    pub fn from_snapshot(snapshot: DeploymentSnapshot) -> Self {
        Self {
            id: snapshot.id,
            config: snapshot.config,
            state: snapshot.state,
            source: snapshot.source,
            requested: snapshot.requested,
            version: snapshot.version,
            events: EventBuffer::new(),
        }
    }

    pub fn snapshot(&self) -> DeploymentSnapshot {
        DeploymentSnapshot {
            id: self.id.clone(),
            config: self.config.clone(),
            state: self.state.clone(),
            source: self.source.clone(),
            requested: self.requested.clone(),
            version: self.version,
        }
    }

    pub fn id(&self) -> &DeploymentId {
        &self.id
    }

    pub fn config(&self) -> &ConfigSnapshot {
        &self.config
    }

    pub fn state(&self) -> &DeploymentState {
        &self.state
    }

    pub fn source(&self) -> &SourceData {
        &self.source
    }

    pub fn requested(&self) -> &Action {
        &self.requested
    }

    pub fn is_running_or_pending(&self) -> bool {
        matches!(
            self.state.status,
            DeploymentStatus::Pending | DeploymentStatus::Running
        )
    }

    pub fn is_successful(&self) -> bool {
        self.state.status == DeploymentStatus::Succeeded
    }

    /// The execution layer picked this deployment up
    pub fn has_started(&mut self) -> DomainResult<()> {
        if self.state.status != DeploymentStatus::Pending {
            return Err(DomainError::DeploymentAlreadyStarted);
        }

        self.state.status = DeploymentStatus::Running;
        self.state.started_at = Some(Utc::now());
        self.raise_state_changed();

        Ok(())
    }

    /// The execution layer finished with this deployment
    pub fn has_ended(&mut self, error: Option<&str>) -> DomainResult<()> {
        if self.state.status != DeploymentStatus::Running {
            return Err(DomainError::DeploymentNotRunning);
        }

        self.state.status = match error {
            Some(_) => DeploymentStatus::Failed,
            None => DeploymentStatus::Succeeded,
        };
        self.state.error_code = error.map(str::to_string);
        self.state.finished_at = Some(Utc::now());
        self.raise_state_changed();

        Ok(())
    }

    fn raise_state_changed(&mut self) {
        self.events
            .raise(DeploymentEvent::StateChanged(DeploymentStateChanged {
                id: self.id.clone(),
                state: self.state.clone(),
            }));
    }
}

impl AggregateRoot for Deployment {
    const KIND: &'static str = "deployment";

    type Id = DeploymentId;
    type Event = DeploymentEvent;

    fn id(&self) -> &DeploymentId {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }

    fn pending_events(&self) -> &[DeploymentEvent] {
        self.events.pending()
    }

    fn commit(&mut self) -> Vec<DeploymentEvent> {
        self.version += 1;
        self.events.drain()
    }
}
