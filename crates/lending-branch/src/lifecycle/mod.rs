//! # Lifecycle
//!
//! Starting, seeding and stopping a lending branch, plus the tracing setup used by the binary.

pub mod branch_system;
pub mod tracing;

pub use branch_system::{BranchSystem, LifecycleError};
pub use self::tracing::setup_tracing;
