//! Ports bundle handed to the use cases

use std::sync::Arc;

use crate::domain::entities::{App, Deployment, Target};
use crate::domain::ports::{
    AppsReader, AppsWriter, DeploymentsReader, DeploymentsWriter, Provider, TargetsReader,
    TargetsWriter,
};
use crate::domain::value_objects::{AppId, DeploymentId, TargetId};
use crate::error::{ShipyardError, ShipyardResult};

/// Everything the use cases need from the outside world
#[derive(Clone)]
pub struct Services {
    pub targets: Arc<dyn TargetsReader>,
    pub targets_writer: Arc<dyn TargetsWriter>,
    pub apps: Arc<dyn AppsReader>,
    pub apps_writer: Arc<dyn AppsWriter>,
    pub deployments: Arc<dyn DeploymentsReader>,
    pub deployments_writer: Arc<dyn DeploymentsWriter>,
    pub provider: Arc<dyn Provider>,
}

impl Services {
    /// Use one store for every repository port
    pub fn from_store<S>(store: Arc<S>, provider: Arc<dyn Provider>) -> Self
    where
        S: TargetsReader
            + TargetsWriter
            + AppsReader
            + AppsWriter
            + DeploymentsReader
            + DeploymentsWriter
            + 'static,
    {
        Self {
            targets: store.clone(),
            targets_writer: store.clone(),
            apps: store.clone(),
            apps_writer: store.clone(),
            deployments: store.clone(),
            deployments_writer: store,
            provider,
        }
    }

    pub(crate) fn load_target(&self, id: &TargetId) -> ShipyardResult<Target> {
        self.targets
            .get_by_id(id)?
            .ok_or_else(|| ShipyardError::not_found("target", id))
    }

    pub(crate) fn load_app(&self, id: &AppId) -> ShipyardResult<App> {
        self.apps
            .get_by_id(id)?
            .ok_or_else(|| ShipyardError::not_found("app", id))
    }

    pub(crate) fn load_deployment(&self, id: &DeploymentId) -> ShipyardResult<Deployment> {
        self.deployments
            .get_by_id(id)?
            .ok_or_else(|| ShipyardError::not_found("deployment", id))
    }
}
