//! Shipyard - domain core of a self-hosted deployment platform
//!
//! Shipyard models deployment targets, apps and their deployments. Targets
//! go through a configuration state machine and can only be removed once
//! their resources are cleaned up. Apps bind each environment to a target
//! and allocate monotonic deployment numbers, so a staging deployment can be
//! promoted to production by cloning its payload.
//!
//! Aggregates never perform I/O: use cases resolve facts against the
//! repositories, hand them to the aggregates as requirements, then store
//! the result and dispatch the raised events.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

// Re-exports for convenience
pub use application::{command_bus, Command, CommandBus, CommandHandler, RequestContext, Services};
pub use config::Config;
pub use domain::entities::{App, Deployment, Target};
pub use domain::events::DomainEvent;
pub use error::{ErrorKind, ShipyardError, ShipyardResult};
pub use infrastructure::InMemoryStore;
