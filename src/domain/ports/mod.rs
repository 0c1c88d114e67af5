//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod app_repository;
pub mod deployment_repository;
pub mod event_sink;
pub mod provider;
pub mod store;
pub mod target_repository;

pub use app_repository::{AppsReader, AppsWriter};
pub use deployment_repository::{DeploymentsOnTarget, DeploymentsReader, DeploymentsWriter};
pub use event_sink::{DomainEventSink, NoopEventSink};
pub use provider::{Provider, ProviderError};
pub use store::{StoreError, StoreResult};
pub use target_repository::{TargetsReader, TargetsWriter};
