//! # Remote Data Gateway
//!
//! The boundary to the backend that stores user and post documents.
//!
//! The backend itself is external. This module only fixes the contract the
//! home screen consumes ([`HomeGateway`]), the shape of its answers
//! ([`GatewayResponse`]), and two implementations that need no network:
//!
//! - [`FixtureGateway`] serves fixed documents, optionally after a simulated latency.
//! - [`MockGateway`] serves scripted answers and checks they were all consumed.

pub mod error;
pub mod fixture;
pub mod mock;

pub use error::*;
pub use fixture::*;
pub use mock::*;

use crate::model::{Post, UserProfile};
use async_trait::async_trait;

/// The answer to one gateway call: data, an error, and whether the request is still
/// in flight.
///
/// Backends that stream results can hand back a response before it settles. Such
/// a response is not a success.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayResponse<T> {
    pub data: Option<T>,
    pub error: Option<GatewayError>,
    pub is_loading: bool,
}

impl<T> GatewayResponse<T> {
    pub fn success(data: T) -> Self {
        Self { data: Some(data), error: None, is_loading: false }
    }

    pub fn failure(error: GatewayError) -> Self {
        Self { data: None, error: Some(error), is_loading: false }
    }

    pub fn loading() -> Self {
        Self { data: None, error: None, is_loading: true }
    }

    /// Success iff there is no error, the request is not still loading, and data
    /// is present.
    pub fn into_result(self) -> Result<T, GatewayError> {
        match self {
            GatewayResponse { error: Some(error), .. } => Err(error),
            GatewayResponse { is_loading: true, .. } => Err(GatewayError::Incomplete),
            GatewayResponse { data: Some(data), .. } => Ok(data),
            GatewayResponse { data: None, .. } => Err(GatewayError::MissingData),
        }
    }
}

impl<T> From<Result<T, GatewayError>> for GatewayResponse<T> {
    fn from(result: Result<T, GatewayError>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(error) => Self::failure(error),
        }
    }
}

/// Source of the documents the home screen shows.
#[async_trait]
pub trait HomeGateway: Send + Sync {
    /// The signed-in user's profile.
    async fn get_user_data(&self) -> GatewayResponse<UserProfile>;

    /// Every post in the feed.
    async fn get_all_posts(&self) -> GatewayResponse<Vec<Post>>;
}
