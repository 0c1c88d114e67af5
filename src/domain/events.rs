//! Domain events and the uncommitted-events buffer
//!
//! Aggregates record what happened in an [`EventBuffer`]. Repositories drain it
//! through [`AggregateRoot::commit`] once the new state is stored, then hand the
//! events to a [`DomainEventSink`](crate::domain::ports::DomainEventSink).

use serde::Serialize;

use crate::domain::entities::{AppEvent, DeploymentEvent, TargetEvent};

/// Ordered events raised since the aggregate was loaded
#[derive(Debug, Clone, PartialEq)]
pub struct EventBuffer<E> {
    pending: Vec<E>,
}

impl<E> Default for EventBuffer<E> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<E> EventBuffer<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&mut self, event: E) {
        self.pending.push(event);
    }

    /// Raise `event`, dropping pending events it supersedes
    pub fn raise_superseding(&mut self, event: E, supersedes: impl Fn(&E) -> bool) {
        self.pending.retain(|pending| !supersedes(pending));
        self.pending.push(event);
    }

    pub fn pending(&self) -> &[E] {
        &self.pending
    }

    pub fn drain(&mut self) -> Vec<E> {
        std::mem::take(&mut self.pending)
    }
}

/// Consistency unit loaded and saved as a whole
pub trait AggregateRoot {
    /// Name used in logs and store errors
    const KIND: &'static str;

    type Id: Clone + Eq + std::hash::Hash + std::fmt::Debug + std::fmt::Display;
    type Event: Into<DomainEvent>;

    fn id(&self) -> &Self::Id;

    /// Stored revision this instance was loaded from (0 when never stored)
    fn version(&self) -> u64;

    fn pending_events(&self) -> &[Self::Event];

    /// Acknowledge a successful write: bump the version and drain the events
    fn commit(&mut self) -> Vec<Self::Event>;
}

/// Any event raised by the domain, as dispatched to subscribers
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DomainEvent {
    Target(TargetEvent),
    App(AppEvent),
    Deployment(DeploymentEvent),
}

impl DomainEvent {
    /// Stable snake_case event name
    pub fn name(&self) -> &'static str {
        match self {
            DomainEvent::Target(e) => e.name(),
            DomainEvent::App(e) => e.name(),
            DomainEvent::Deployment(e) => e.name(),
        }
    }
}

impl From<TargetEvent> for DomainEvent {
    fn from(event: TargetEvent) -> Self {
        DomainEvent::Target(event)
    }
}

impl From<AppEvent> for DomainEvent {
    fn from(event: AppEvent) -> Self {
        DomainEvent::App(event)
    }
}

impl From<DeploymentEvent> for DomainEvent {
    fn from(event: DeploymentEvent) -> Self {
        DomainEvent::Deployment(event)
    }
}
