//! Domain Entities
//!
//! Aggregates that have identity and lifecycle.
//! - `Target` - A machine or environment apps are deployed to
//! - `App` - Environment bindings and deployment numbering
//! - `Deployment` - One run of a source payload on an environment

mod app;
mod deployment;
mod target;

pub use app::{
    App, AppCleanupRequested, AppCreated, AppDeleted, AppEnvChanged, AppEvent, AppSnapshot,
};
pub use deployment::{
    ConfigSnapshot, Deployment, DeploymentCreated, DeploymentEvent, DeploymentSnapshot,
    DeploymentState, DeploymentStateChanged, DeploymentStatus,
};
pub use target::{
    CleanupStrategy, Target, TargetCleanupRequested, TargetCreated, TargetDeleted, TargetEvent,
    TargetProviderChanged, TargetRenamed, TargetSnapshot, TargetState, TargetStateChanged,
    TargetStatus, TargetUrlChanged,
};
