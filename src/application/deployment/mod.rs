//! Deployment Module
//!
//! Queueing, promotion and redeployment, plus the execution layer reports.

mod commands;
mod use_case;

pub use commands::{EndDeployment, Promote, QueueDeployment, Redeploy, StartDeployment};
pub use use_case::DeploymentUseCases;
