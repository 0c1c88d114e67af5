//! Target entity
//!
//! A machine or environment apps are deployed to. The target owns its
//! configuration state machine:
//!
//! ```text
//!            reconfigure / url or provider change
//!        ┌──────────────────────────────────────────┐
//!        ▼                                          │
//!   Configuring ──configured(ok)──▶ Ready ──────────┤
//!        │                                          │
//!        └────configured(err)────▶ Failed ──────────┘
//! ```
//!
//! Orthogonal to the status, a cleanup request is a one-way flag: once set,
//! the target only waits for its resources to be removed before deletion.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::events::{AggregateRoot, EventBuffer};
use crate::domain::value_objects::{
    Action, ProviderConfig, ProviderConfigRequirement, TargetId, TargetUrlRequirement, Url,
    UserId,
};

/// Configuration status of a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetStatus {
    Configuring,
    Ready,
    Failed,
}

/// How resources should be removed from a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CleanupStrategy {
    /// Remove the resources through the provider
    Default,
    /// Nothing reachable to remove
    Skip,
}

/// Outcome of the configuration attempts on a target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetState {
    status: TargetStatus,
    version: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_ready_version: Option<DateTime<Utc>>,
}

impl TargetState {
    fn new() -> Self {
        Self {
            status: TargetStatus::Configuring,
            version: Utc::now(),
            error_code: None,
            last_ready_version: None,
        }
    }

    pub fn status(&self) -> TargetStatus {
        self.status
    }

    /// Version of the configuration attempt this state refers to
    pub fn version(&self) -> DateTime<Utc> {
        self.version
    }

    pub fn error_code(&self) -> Option<&str> {
        self.error_code.as_deref()
    }

    /// Version of the last attempt that left the target ready, if any
    pub fn last_ready_version(&self) -> Option<DateTime<Utc>> {
        self.last_ready_version
    }

    fn reconfigured(&mut self) {
        // Versions must strictly increase so late reports of a previous
        // attempt are always recognized as stale.
        let next = Utc::now().max(successor(self.version).unwrap_or(self.version));
        self.status = TargetStatus::Configuring;
        self.version = next;
        self.error_code = None;
    }

    /// Returns true when the status or error changed
    fn configured(&mut self, version: DateTime<Utc>, error: Option<&str>) -> bool {
        // A version with no successor would leave no room for the next attempt
        if version < self.version || successor(version).is_none() {
            return false;
        }

        let (status, error_code) = match error {
            Some(err) => (TargetStatus::Failed, Some(err.to_string())),
            None => (TargetStatus::Ready, None),
        };

        let changed = self.status != status || self.error_code != error_code;

        self.version = version;
        self.status = status;
        self.error_code = error_code;

        if status == TargetStatus::Ready {
            self.last_ready_version = Some(version);
        }

        changed
    }
}

fn successor(version: DateTime<Utc>) -> Option<DateTime<Utc>> {
    version.checked_add_signed(TimeDelta::nanoseconds(1))
}

/// Events raised by a [`Target`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum TargetEvent {
    #[serde(rename = "target_created")]
    Created(TargetCreated),
    #[serde(rename = "target_renamed")]
    Renamed(TargetRenamed),
    #[serde(rename = "target_url_changed")]
    UrlChanged(TargetUrlChanged),
    #[serde(rename = "target_provider_changed")]
    ProviderChanged(TargetProviderChanged),
    #[serde(rename = "target_state_changed")]
    StateChanged(TargetStateChanged),
    #[serde(rename = "target_cleanup_requested")]
    CleanupRequested(TargetCleanupRequested),
    #[serde(rename = "target_deleted")]
    Deleted(TargetDeleted),
}

impl TargetEvent {
    pub fn name(&self) -> &'static str {
        match self {
            TargetEvent::Created(_) => "target_created",
            TargetEvent::Renamed(_) => "target_renamed",
            TargetEvent::UrlChanged(_) => "target_url_changed",
            TargetEvent::ProviderChanged(_) => "target_provider_changed",
            TargetEvent::StateChanged(_) => "target_state_changed",
            TargetEvent::CleanupRequested(_) => "target_cleanup_requested",
            TargetEvent::Deleted(_) => "target_deleted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetCreated {
    pub id: TargetId,
    pub name: String,
    pub url: Url,
    pub provider: ProviderConfig,
    pub state: TargetState,
    pub created: Action,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetRenamed {
    pub id: TargetId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetUrlChanged {
    pub id: TargetId,
    pub url: Url,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetProviderChanged {
    pub id: TargetId,
    pub provider: ProviderConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetStateChanged {
    pub id: TargetId,
    pub state: TargetState,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetCleanupRequested {
    pub id: TargetId,
    pub requested: Action,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetDeleted {
    pub id: TargetId,
}

/// Persisted form of a [`Target`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetSnapshot {
    pub id: TargetId,
    pub name: String,
    pub url: Url,
    pub provider: ProviderConfig,
    pub state: TargetState,
    pub cleanup_requested: Option<Action>,
    pub created: Action,
    pub version: u64,
}

#[derive(Debug, Clone)]
pub struct Target {
    id: TargetId,
    name: String,
    url: Url,
    provider: ProviderConfig,
    state: TargetState,
    cleanup_requested: Option<Action>,
    created: Action,
    version: u64,
    events: EventBuffer<TargetEvent>,
}

impl Target {
    /// Create a new target, initially configuring
    pub fn new(
        name: impl Into<String>,
        url_requirement: TargetUrlRequirement,
        provider_requirement: ProviderConfigRequirement,
        created_by: UserId,
    ) -> DomainResult<Self> {
        let url = url_requirement.met()?;
        let provider = provider_requirement.met()?;

        let mut target = Self {
            id: TargetId::generate(),
            name: name.into(),
            url,
            provider,
            state: TargetState::new(),
            cleanup_requested: None,
            created: Action::new(created_by),
            version: 0,
            events: EventBuffer::new(),
        };

        target.events.raise(TargetEvent::Created(TargetCreated {
            id: target.id.clone(),
            name: target.name.clone(),
            url: target.url.clone(),
            provider: target.provider.clone(),
            state: target.state.clone(),
            created: target.created.clone(),
        }));

        Ok(target)
    }

    pub fn from_snapshot(snapshot: TargetSnapshot) -> Self {
        Self {
            id: snapshot.id,
            name: snapshot.name,
            url: snapshot.url,
            provider: snapshot.provider,
            state: snapshot.state,
            cleanup_requested: snapshot.cleanup_requested,
            created: snapshot.created,
            version: snapshot.version,
            events: EventBuffer::new(),
        }
    }

    pub fn snapshot(&self) -> TargetSnapshot {
        TargetSnapshot {
            id: self.id.clone(),
            name: self.name.clone(),
            url: self.url.clone(),
            provider: self.provider.clone(),
            state: self.state.clone(),
            cleanup_requested: self.cleanup_requested.clone(),
            created: self.created.clone(),
            version: self.version,
        }
    }

    pub fn id(&self) -> &TargetId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn provider(&self) -> &ProviderConfig {
        &self.provider
    }

    pub fn state(&self) -> &TargetState {
        &self.state
    }

    /// Version a configuration report must carry to be taken into account
    pub fn current_version(&self) -> DateTime<Utc> {
        self.state.version
    }

    pub fn created(&self) -> &Action {
        &self.created
    }

    pub fn cleanup_requested(&self) -> Option<&Action> {
        self.cleanup_requested.as_ref()
    }

    pub fn is_cleanup_requested(&self) -> bool {
        self.cleanup_requested.is_some()
    }

    pub fn rename(&mut self, name: impl Into<String>) -> DomainResult<()> {
        self.ensure_not_cleaning_up()?;

        let name = name.into();
        if self.name == name {
            return Ok(());
        }

        self.name = name;
        self.events.raise(TargetEvent::Renamed(TargetRenamed {
            id: self.id.clone(),
            name: self.name.clone(),
        }));

        Ok(())
    }

    /// Point the target to a new url, triggering a reconfiguration
    pub fn has_url(&mut self, requirement: TargetUrlRequirement) -> DomainResult<()> {
        self.ensure_not_cleaning_up()?;

        let url = requirement.met()?;
        if self.url == url {
            return Ok(());
        }

        self.url = url;
        self.events.raise(TargetEvent::UrlChanged(TargetUrlChanged {
            id: self.id.clone(),
            url: self.url.clone(),
        }));
        self.reconfigure_state();

        Ok(())
    }

    /// Update the provider configuration, triggering a reconfiguration
    ///
    /// The fingerprint identifies the managed resources and can never change.
    pub fn has_provider(&mut self, requirement: ProviderConfigRequirement) -> DomainResult<()> {
        self.ensure_not_cleaning_up()?;

        let provider = requirement.met()?;
        if provider.fingerprint() != self.provider.fingerprint() {
            return Err(DomainError::ProviderUpdateNotPermitted);
        }

        if self.provider == provider {
            return Ok(());
        }

        self.provider = provider;
        self.events
            .raise(TargetEvent::ProviderChanged(TargetProviderChanged {
                id: self.id.clone(),
                provider: self.provider.clone(),
            }));
        self.reconfigure_state();

        Ok(())
    }

    /// Record the outcome of the configuration attempt tagged `version`
    ///
    /// Reports for an older attempt, or tagged with the latest representable
    /// instant, are ignored.
    pub fn configured(&mut self, version: DateTime<Utc>, error: Option<&str>) {
        if self.state.configured(version, error) {
            self.raise_state_changed();
        }
    }

    /// Ask for a fresh configuration attempt
    pub fn reconfigure(&mut self) -> DomainResult<()> {
        self.ensure_not_cleaning_up()?;

        if self.state.status == TargetStatus::Configuring {
            return Err(DomainError::TargetConfigurationInProgress);
        }

        self.reconfigure_state();
        Ok(())
    }

    /// Whether deployments can be run on this target right now
    pub fn check_availability(&self) -> DomainResult<()> {
        self.ensure_not_cleaning_up()?;

        match self.state.status {
            TargetStatus::Configuring => Err(DomainError::TargetConfigurationInProgress),
            TargetStatus::Failed => Err(DomainError::TargetConfigurationFailed),
            TargetStatus::Ready => Ok(()),
        }
    }

    /// Flag the target for removal. Repeated requests are no-ops.
    pub fn request_cleanup(
        &mut self,
        still_used_by_apps: bool,
        requested_by: UserId,
    ) -> DomainResult<()> {
        if self.cleanup_requested.is_some() {
            return Ok(());
        }

        if self.state.status == TargetStatus::Configuring {
            return Err(DomainError::TargetConfigurationInProgress);
        }

        if still_used_by_apps {
            return Err(DomainError::TargetInUse);
        }

        let requested = Action::new(requested_by);
        self.cleanup_requested = Some(requested.clone());
        self.events
            .raise(TargetEvent::CleanupRequested(TargetCleanupRequested {
                id: self.id.clone(),
                requested,
            }));

        Ok(())
    }

    /// How the resources of this target should be removed
    pub fn cleanup_strategy(
        &self,
        has_running_or_pending_deployments: bool,
    ) -> DomainResult<CleanupStrategy> {
        if self.state.status == TargetStatus::Configuring {
            return Err(DomainError::TargetConfigurationInProgress);
        }

        if has_running_or_pending_deployments {
            return Err(DomainError::RunningOrPendingDeployments);
        }

        self.strategy_from_status()
    }

    /// How the resources of an app deployed on this target should be removed
    pub fn app_cleanup_strategy(
        &self,
        has_running_or_pending_deployments: bool,
        has_successful_deployment: bool,
    ) -> DomainResult<CleanupStrategy> {
        if has_running_or_pending_deployments {
            return Err(DomainError::RunningOrPendingDeployments);
        }

        if self.cleanup_requested.is_some() || !has_successful_deployment {
            return Ok(CleanupStrategy::Skip);
        }

        if self.state.status == TargetStatus::Configuring {
            return Err(DomainError::TargetConfigurationInProgress);
        }

        self.strategy_from_status()
    }

    /// Mark the target as deleted once its resources are gone
    pub fn delete(&mut self, resources_cleaned_up: bool) -> DomainResult<()> {
        if self.cleanup_requested.is_none() || !resources_cleaned_up {
            return Err(DomainError::TargetCleanupNeeded);
        }

        self.events.raise(TargetEvent::Deleted(TargetDeleted {
            id: self.id.clone(),
        }));

        Ok(())
    }

    fn strategy_from_status(&self) -> DomainResult<CleanupStrategy> {
        match self.state.status {
            TargetStatus::Configuring => Err(DomainError::TargetConfigurationInProgress),
            TargetStatus::Ready => Ok(CleanupStrategy::Default),
            // Never reachable, or already on its way out: nothing to clean.
            TargetStatus::Failed
                if self.state.last_ready_version.is_none()
                    || self.cleanup_requested.is_some() =>
            {
                Ok(CleanupStrategy::Skip)
            }
            TargetStatus::Failed => Err(DomainError::TargetConfigurationFailed),
        }
    }

    fn ensure_not_cleaning_up(&self) -> DomainResult<()> {
        if self.cleanup_requested.is_some() {
            return Err(DomainError::TargetCleanupRequested);
        }
        Ok(())
    }

    fn reconfigure_state(&mut self) {
        self.state.reconfigured();
        self.raise_state_changed();
    }

    /// A state change carries the whole state, so it supersedes any pending one
    fn raise_state_changed(&mut self) {
        self.events.raise_superseding(
            TargetEvent::StateChanged(TargetStateChanged {
                id: self.id.clone(),
                state: self.state.clone(),
            }),
            |e| matches!(e, TargetEvent::StateChanged(_)),
        );
    }
}

impl AggregateRoot for Target {
    const KIND: &'static str = "target";

    type Id = TargetId;
    type Event = TargetEvent;

    fn id(&self) -> &TargetId {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }

    fn pending_events(&self) -> &[TargetEvent] {
        self.events.pending()
    }

    fn commit(&mut self) -> Vec<TargetEvent> {
        self.version += 1;
        self.events.drain()
    }
}
