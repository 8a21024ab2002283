//! Error types for the home screen.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors surfaced by [`HomeViewModel`](crate::home::HomeViewModel) and
/// [`HomeSystem`](crate::lifecycle::HomeSystem).
///
/// Fetch failures are not here: they end up in the screen state as a message.
#[derive(Debug, Error, PartialEq)]
pub enum HomeError {
    /// The state store could not be reached.
    #[error("State store error: {0}")]
    Store(#[from] FrameworkError),

    /// A task owned by the home screen did not shut down cleanly.
    #[error("Task failed: {0}")]
    TaskFailed(String),

    /// The configuration could not be read.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors that can occur while reading [`HomeConfig`](crate::home::HomeConfig).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}
