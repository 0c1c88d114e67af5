//! Domain Layer
//!
//! This is the core of Shipyard - pure business logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Aggregates (Target, App, Deployment)
//! - `value_objects/` - Immutable value types (Url, ProviderConfig, requirements)
//! - `events` - Uncommitted events buffer and the event envelope
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - Facts about storage are passed in as requirements
//! 2. **Typed failures** - Every rejection is a [`DomainError`](error::DomainError)
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod error;
pub mod events;
pub mod ports;
pub mod value_objects;
