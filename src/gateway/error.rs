//! Error types for the remote gateway.

use thiserror::Error;

/// Why a fetch did not produce data.
///
/// The home screen does not tell these apart. It only shows the message, so
/// `Remote` displays the backend's text unchanged.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GatewayError {
    /// The backend reported a failure.
    #[error("{0}")]
    Remote(String),

    /// The response was still marked as loading.
    #[error("Request did not complete")]
    Incomplete,

    /// The response claimed success but carried no data.
    #[error("Response carried no data")]
    MissingData,

    /// A fixture document could not be read.
    #[error("Invalid fixture: {0}")]
    Fixture(String),
}

impl From<String> for GatewayError {
    fn from(msg: String) -> Self {
        GatewayError::Remote(msg)
    }
}
