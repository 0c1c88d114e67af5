//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, value objects, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Resolves requirements against the repositories, then saves aggregates
//!
//! ## Use Cases
//!
//! - `TargetUseCases` - Create, update, configure and clean up targets
//! - `AppUseCases` - Create apps, rebind environments, clean up apps
//! - `DeploymentUseCases` - Queue, promote and redeploy deployments
//!
//! All of them are reached through the [`CommandBus`].

pub mod app;
pub mod bus;
pub mod deployment;
mod services;
pub mod target;

#[cfg(test)]
pub(crate) mod testing;

pub use app::{AppUseCases, CleanupApp, CreateApp, RequestAppCleanup, UpdateAppEnvironments};
pub use bus::{Command, CommandBus, CommandHandler, RequestContext};
pub use deployment::{
    DeploymentUseCases, EndDeployment, Promote, QueueDeployment, Redeploy, StartDeployment,
};
pub use services::Services;
pub use target::{
    CleanupTarget, ConfigureTarget, CreateTarget, ReconfigureTarget, RequestTargetCleanup,
    TargetUseCases, UpdateTarget,
};

/// Build a bus with a handler registered for every command
pub fn command_bus(services: Services) -> CommandBus {
    let targets = TargetUseCases::new(services.clone());
    let apps = AppUseCases::new(services.clone());
    let deployments = DeploymentUseCases::new(services);

    let mut bus = CommandBus::new();

    bus.register::<CreateTarget, _>(targets.clone());
    bus.register::<UpdateTarget, _>(targets.clone());
    bus.register::<ReconfigureTarget, _>(targets.clone());
    bus.register::<ConfigureTarget, _>(targets.clone());
    bus.register::<RequestTargetCleanup, _>(targets.clone());
    bus.register::<CleanupTarget, _>(targets);

    bus.register::<CreateApp, _>(apps.clone());
    bus.register::<UpdateAppEnvironments, _>(apps.clone());
    bus.register::<RequestAppCleanup, _>(apps.clone());
    bus.register::<CleanupApp, _>(apps);

    bus.register::<QueueDeployment, _>(deployments.clone());
    bus.register::<Promote, _>(deployments.clone());
    bus.register::<Redeploy, _>(deployments.clone());
    bus.register::<StartDeployment, _>(deployments.clone());
    bus.register::<EndDeployment, _>(deployments);

    bus
}
