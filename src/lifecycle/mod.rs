//! Runtime orchestration and lifecycle management.
//!
//! - [`HomeSystem`] - Starts the home screen's state actor, wires the view model, shuts both down
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod home_system;
pub mod tracing;

pub use home_system::*;
pub use self::tracing::*;
