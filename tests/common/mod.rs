//! Shared test environment for scenario tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use shipyard::application::{
    CleanupApp, ConfigureTarget, CreateApp, CreateTarget, RequestAppCleanup,
};
use shipyard::domain::entities::{App, CleanupStrategy, Target};
use shipyard::domain::ports::{DomainEventSink, Provider, ProviderError, TargetsReader};
use shipyard::domain::value_objects::{
    AppId, DockerConfig, Environment, EnvironmentConfig, TargetId,
};
use shipyard::{command_bus, CommandBus, DomainEvent, InMemoryStore, RequestContext, Services};

/// Sink keeping the names of dispatched events
#[derive(Default)]
pub struct EventLog(Mutex<Vec<&'static str>>);

impl EventLog {
    pub fn names(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }
}

impl DomainEventSink for EventLog {
    fn on_event(&self, event: &DomainEvent) {
        self.0.lock().unwrap().push(event.name());
    }
}

/// Provider accepting every cleanup and remembering it
#[derive(Default)]
pub struct FakeProvider(Mutex<Vec<String>>);

impl FakeProvider {
    pub fn calls(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl Provider for FakeProvider {
    fn cleanup_target(
        &self,
        target: &Target,
        strategy: CleanupStrategy,
    ) -> Result<(), ProviderError> {
        self.0
            .lock()
            .unwrap()
            .push(format!("target {} {:?}", target.name(), strategy));
        Ok(())
    }

    fn cleanup_app(
        &self,
        app: &App,
        environment: Environment,
        _target: &Target,
        strategy: CleanupStrategy,
    ) -> Result<(), ProviderError> {
        self.0
            .lock()
            .unwrap()
            .push(format!("app {} {} {:?}", app.name(), environment, strategy));
        Ok(())
    }
}

pub struct TestEnv {
    pub store: Arc<InMemoryStore>,
    pub events: Arc<EventLog>,
    pub provider: Arc<FakeProvider>,
    pub bus: CommandBus,
    pub ctx: RequestContext,
}

impl TestEnv {
    pub fn new() -> Self {
        let events = Arc::new(EventLog::default());
        let store = Arc::new(InMemoryStore::new(events.clone()));
        let provider = Arc::new(FakeProvider::default());
        let bus = command_bus(Services::from_store(store.clone(), provider.clone()));

        Self {
            store,
            events,
            provider,
            bus,
            ctx: RequestContext::new("admin"),
        }
    }

    pub fn target(&self, id: &TargetId) -> Option<Target> {
        TargetsReader::get_by_id(self.store.as_ref(), id).unwrap()
    }

    /// Create a target and report its first configuration as successful
    pub fn ready_target(&self, name: &str, url: &str, host: &str) -> TargetId {
        let id = self
            .bus
            .execute(
                &self.ctx,
                CreateTarget {
                    name: name.to_string(),
                    url: url.to_string(),
                    provider: DockerConfig::remote(host).into(),
                },
            )
            .unwrap();

        let version = self.target(&id).unwrap().current_version();
        self.bus
            .execute(
                &self.ctx,
                ConfigureTarget {
                    id: id.clone(),
                    version,
                    error: None,
                },
            )
            .unwrap();

        id
    }

    pub fn create_app(&self, name: &str, production: &TargetId, staging: &TargetId) -> AppId {
        self.bus
            .execute(
                &self.ctx,
                CreateApp {
                    name: name.to_string(),
                    production: EnvironmentConfig::new(production.clone()),
                    staging: EnvironmentConfig::new(staging.clone()),
                },
            )
            .unwrap()
    }

    pub fn delete_app(&self, id: &AppId) {
        self.bus
            .execute(&self.ctx, RequestAppCleanup { id: id.clone() })
            .unwrap();
        self.bus
            .execute(&self.ctx, CleanupApp { id: id.clone() })
            .unwrap();
    }
}
