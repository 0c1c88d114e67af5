//! App Module
//!
//! Lifecycle of apps and their environment bindings.

mod commands;
mod use_case;

pub use commands::{CleanupApp, CreateApp, RequestAppCleanup, UpdateAppEnvironments};
pub use use_case::AppUseCases;
