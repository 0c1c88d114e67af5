//! Shared fixtures for the use case tests

use std::sync::{Arc, Mutex};

use crate::domain::entities::{App, CleanupStrategy, Target};
use crate::domain::ports::{Provider, ProviderError, TargetsReader};
use crate::domain::value_objects::{AppId, DockerConfig, Environment, EnvironmentConfig, TargetId};
use crate::infrastructure::InMemoryStore;

use super::{
    command_bus, CommandBus, ConfigureTarget, CreateApp, CreateTarget, RequestContext, Services,
};

/// Provider recording every cleanup request
#[derive(Default)]
pub(crate) struct RecordingProvider {
    pub calls: Mutex<Vec<String>>,
    pub fail: Mutex<bool>,
}

impl RecordingProvider {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<(), ProviderError> {
        if *self.fail.lock().unwrap() {
            return Err(ProviderError::Unreachable {
                message: "connection refused".to_string(),
            });
        }
        self.calls.lock().unwrap().push(call);
        Ok(())
    }
}

impl Provider for RecordingProvider {
    fn cleanup_target(
        &self,
        target: &Target,
        strategy: CleanupStrategy,
    ) -> Result<(), ProviderError> {
        self.record(format!("target {} {:?}", target.name(), strategy))
    }

    fn cleanup_app(
        &self,
        app: &App,
        environment: Environment,
        _target: &Target,
        strategy: CleanupStrategy,
    ) -> Result<(), ProviderError> {
        self.record(format!("app {} {} {:?}", app.name(), environment, strategy))
    }
}

pub(crate) struct Harness {
    pub store: Arc<InMemoryStore>,
    pub provider: Arc<RecordingProvider>,
    pub bus: CommandBus,
    pub ctx: RequestContext,
}

impl Harness {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryStore::default());
        let provider = Arc::new(RecordingProvider::default());
        let bus = command_bus(Services::from_store(store.clone(), provider.clone()));

        Self {
            store,
            provider,
            bus,
            ctx: RequestContext::new("john"),
        }
    }

    pub fn create_target(&self, name: &str, url: &str, host: &str) -> TargetId {
        self.bus
            .execute(
                &self.ctx,
                CreateTarget {
                    name: name.to_string(),
                    url: url.to_string(),
                    provider: DockerConfig::remote(host).into(),
                },
            )
            .unwrap()
    }

    /// Report the current configuration attempt of `id` as done
    pub fn configure(&self, id: &TargetId, error: Option<&str>) {
        let version = self.target(id).current_version();
        self.bus
            .execute(
                &self.ctx,
                ConfigureTarget {
                    id: id.clone(),
                    version,
                    error: error.map(str::to_string),
                },
            )
            .unwrap();
    }

    pub fn ready_target(&self, name: &str, url: &str, host: &str) -> TargetId {
        let id = self.create_target(name, url, host);
        self.configure(&id, None);
        id
    }

    pub fn target(&self, id: &TargetId) -> Target {
        TargetsReader::get_by_id(self.store.as_ref(), id)
            .unwrap()
            .unwrap()
    }

    pub fn create_app(&self, name: &str, target: &TargetId) -> AppId {
        self.bus
            .execute(
                &self.ctx,
                CreateApp {
                    name: name.to_string(),
                    production: EnvironmentConfig::new(target.clone()),
                    staging: EnvironmentConfig::new(target.clone()),
                },
            )
            .unwrap()
    }
}
