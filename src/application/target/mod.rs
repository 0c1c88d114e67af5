//! Target Module
//!
//! Registration, configuration and removal of deployment targets.
//!
//! ## Structure
//!
//! - `commands` - Command types (`CreateTarget`, `CleanupTarget`, ...)
//! - `use_case` - Handlers (`TargetUseCases`)

mod commands;
mod use_case;

pub use commands::{
    CleanupTarget, ConfigureTarget, CreateTarget, ReconfigureTarget, RequestTargetCleanup,
    UpdateTarget,
};
pub use use_case::TargetUseCases;
