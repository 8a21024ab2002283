//! Generic single-writer state store.
//!
//! This module provides the building blocks for an observable screen state that
//! many asynchronous tasks update without losing each other's changes.
//!
//! # Main Components
//!
//! - [`StoreState`] - Trait that snapshot types satisfy
//! - [`StateActor`] - The task that owns the snapshot and applies changes in order
//! - [`StateClient`] - Cloneable handle for updates, reads and subscriptions
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test orchestration code without a running actor.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
