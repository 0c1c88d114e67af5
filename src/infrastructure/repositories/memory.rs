//! In-memory Repository
//!
//! Keeps every aggregate as a snapshot behind a single lock, so one write is
//! atomic with respect to all reads. Writes are rejected when the stored
//! version differs from the one the aggregate was loaded at.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::entities::{
    App, AppEvent, AppSnapshot, Deployment, DeploymentSnapshot, DeploymentStatus, Target,
    TargetEvent, TargetSnapshot,
};
use crate::domain::events::{AggregateRoot, DomainEvent};
use crate::domain::ports::{
    AppsReader, AppsWriter, DeploymentsOnTarget, DeploymentsReader, DeploymentsWriter,
    DomainEventSink, NoopEventSink, StoreError, StoreResult, TargetsReader, TargetsWriter,
};
use crate::domain::value_objects::{
    AppId, AppName, DeploymentId, DeploymentNumber, Environment, EnvironmentConfig,
    EnvironmentConfigRequirement, ProviderConfig, ProviderConfigRequirement, TargetId,
    TargetUrlRequirement, Url,
};

#[derive(Default)]
struct StoreState {
    targets: HashMap<TargetId, TargetSnapshot>,
    apps: HashMap<AppId, AppSnapshot>,
    deployments: HashMap<DeploymentId, DeploymentSnapshot>,
}

impl StoreState {
    fn latest_deployment(&self, app: &AppId) -> DeploymentNumber {
        self.deployments
            .keys()
            .filter(|id| id.app_id() == app)
            .map(DeploymentId::deployment_number)
            .max()
            .unwrap_or(DeploymentNumber::NONE)
    }
}

/// Repository holding targets, apps and deployments in memory
pub struct InMemoryStore {
    state: Mutex<StoreState>,
    events: Arc<dyn DomainEventSink>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new(Arc::new(NoopEventSink))
    }
}

impl InMemoryStore {
    /// Create an empty store dispatching committed events to `events`
    pub fn new(events: Arc<dyn DomainEventSink>) -> Self {
        Self {
            state: Mutex::new(StoreState::default()),
            events,
        }
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, StoreState>> {
        self.state.lock().map_err(|_| StoreError::Unavailable {
            message: "store lock poisoned".to_string(),
        })
    }

    fn dispatch<E: Into<DomainEvent>>(&self, events: Vec<E>) {
        for event in events {
            let event = event.into();
            tracing::debug!(event = event.name(), "dispatching domain event");
            self.events.on_event(&event);
        }
    }
}

/// Optimistic concurrency check: the aggregate must have been loaded at the
/// stored version, or be new and absent from the store
fn check_version<A: AggregateRoot>(aggregate: &A, stored: Option<u64>) -> StoreResult<()> {
    if stored.unwrap_or(0) == aggregate.version() {
        return Ok(());
    }

    Err(StoreError::Conflict {
        entity: A::KIND,
        id: aggregate.id().to_string(),
    })
}

impl TargetsReader for InMemoryStore {
    fn get_by_id(&self, id: &TargetId) -> StoreResult<Option<Target>> {
        let state = self.lock()?;
        Ok(state.targets.get(id).cloned().map(Target::from_snapshot))
    }

    fn check_url_availability(
        &self,
        url: Url,
        excluding: Option<&TargetId>,
    ) -> StoreResult<TargetUrlRequirement> {
        let state = self.lock()?;
        let taken = state
            .targets
            .values()
            .any(|t| Some(&t.id) != excluding && t.url == url);

        Ok(TargetUrlRequirement::new(url, !taken))
    }

    fn check_config_availability(
        &self,
        config: ProviderConfig,
        excluding: Option<&TargetId>,
    ) -> StoreResult<ProviderConfigRequirement> {
        let state = self.lock()?;
        let fingerprint = config.fingerprint();
        let taken = state
            .targets
            .values()
            .any(|t| Some(&t.id) != excluding && t.provider.fingerprint() == fingerprint);

        Ok(ProviderConfigRequirement::new(config, !taken))
    }
}

impl TargetsWriter for InMemoryStore {
    fn write(&self, target: &mut Target) -> StoreResult<()> {
        if target.pending_events().is_empty() {
            return Ok(());
        }

        let events = {
            let mut state = self.lock()?;
            check_version(target, state.targets.get(target.id()).map(|s| s.version))?;

            let deleted = target
                .pending_events()
                .iter()
                .any(|e| matches!(e, TargetEvent::Deleted(_)));
            let events = target.commit();

            if deleted {
                state.targets.remove(target.id());
            } else {
                state.targets.insert(target.id().clone(), target.snapshot());
            }

            events
        };

        self.dispatch(events);
        Ok(())
    }
}

impl AppsReader for InMemoryStore {
    fn get_by_id(&self, id: &AppId) -> StoreResult<Option<App>> {
        let state = self.lock()?;
        let latest = state.latest_deployment(id);
        Ok(state
            .apps
            .get(id)
            .cloned()
            .map(|snapshot| App::from_snapshot(snapshot, latest)))
    }

    fn get_by_name(&self, name: &AppName) -> StoreResult<Option<App>> {
        let state = self.lock()?;
        Ok(state
            .apps
            .values()
            .find(|app| &app.name == name)
            .cloned()
            .map(|snapshot| {
                let latest = state.latest_deployment(&snapshot.id);
                App::from_snapshot(snapshot, latest)
            }))
    }

    fn check_naming_availability(
        &self,
        name: &AppName,
        config: EnvironmentConfig,
        excluding: Option<&AppId>,
    ) -> StoreResult<EnvironmentConfigRequirement> {
        let state = self.lock()?;
        let target_found = state.targets.contains_key(config.target());
        let taken = state
            .apps
            .values()
            .any(|app| Some(&app.id) != excluding && &app.name == name);

        Ok(EnvironmentConfigRequirement::new(
            config,
            target_found,
            !taken,
        ))
    }

    fn has_apps_on_target(&self, target: &TargetId) -> StoreResult<bool> {
        let state = self.lock()?;
        Ok(state
            .apps
            .values()
            .any(|app| app.production.target() == target || app.staging.target() == target))
    }
}

impl AppsWriter for InMemoryStore {
    fn write(&self, app: &mut App) -> StoreResult<()> {
        if app.pending_events().is_empty() {
            return Ok(());
        }

        let events = {
            let mut state = self.lock()?;
            check_version(app, state.apps.get(app.id()).map(|s| s.version))?;

            let deleted = app
                .pending_events()
                .iter()
                .any(|e| matches!(e, AppEvent::Deleted(_)));
            let events = app.commit();

            if deleted {
                state.apps.remove(app.id());
                state.deployments.retain(|id, _| id.app_id() != app.id());
            } else {
                state.apps.insert(app.id().clone(), app.snapshot());
            }

            events
        };

        self.dispatch(events);
        Ok(())
    }
}

impl DeploymentsReader for InMemoryStore {
    fn get_by_id(&self, id: &DeploymentId) -> StoreResult<Option<Deployment>> {
        let state = self.lock()?;
        Ok(state
            .deployments
            .get(id)
            .cloned()
            .map(Deployment::from_snapshot))
    }

    fn has_running_or_pending_on_target(&self, target: &TargetId) -> StoreResult<bool> {
        let state = self.lock()?;
        Ok(state.deployments.values().any(|d| {
            d.config.target() == target
                && matches!(
                    d.state.status(),
                    DeploymentStatus::Pending | DeploymentStatus::Running
                )
        }))
    }

    fn deployments_state_on_app_target(
        &self,
        app: &AppId,
        environment: Environment,
        target: &TargetId,
    ) -> StoreResult<DeploymentsOnTarget> {
        let state = self.lock()?;
        let mut facts = DeploymentsOnTarget::default();

        for deployment in state.deployments.values().filter(|d| {
            d.id.app_id() == app
                && d.config.environment() == environment
                && d.config.target() == target
        }) {
            match deployment.state.status() {
                DeploymentStatus::Pending | DeploymentStatus::Running => {
                    facts.running_or_pending = true
                }
                DeploymentStatus::Succeeded => facts.successful = true,
                DeploymentStatus::Failed => {}
            }
        }

        Ok(facts)
    }
}

impl DeploymentsWriter for InMemoryStore {
    fn write(&self, deployment: &mut Deployment) -> StoreResult<()> {
        if deployment.pending_events().is_empty() {
            return Ok(());
        }

        let events = {
            let mut state = self.lock()?;
            check_version(
                deployment,
                state.deployments.get(deployment.id()).map(|s| s.version),
            )?;

            if !state.apps.contains_key(deployment.id().app_id()) {
                return Err(StoreError::Conflict {
                    entity: "app",
                    id: deployment.id().app_id().to_string(),
                });
            }

            let events = deployment.commit();
            state
                .deployments
                .insert(deployment.id().clone(), deployment.snapshot());
            events
        };

        self.dispatch(events);
        Ok(())
    }
}
