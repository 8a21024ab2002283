//! In-memory gateway serving fixed documents.

use crate::gateway::{GatewayError, GatewayResponse, HomeGateway};
use crate::model::{Post, UserProfile};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

/// JSON layout accepted by [`FixtureGateway::from_json`].
///
/// ```json
/// { "user": { "username": "alice", "profileImage": "a.jpg" }, "posts": [] }
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FixtureDocument {
    user: Option<UserProfile>,
    posts: Vec<Post>,
}

/// A [`HomeGateway`] that answers from memory.
///
/// A missing user document is reported as a remote failure, the way the backend
/// reports a signed-out session.
#[derive(Debug, Clone, Default)]
pub struct FixtureGateway {
    user: Option<UserProfile>,
    posts: Vec<Post>,
    latency: Duration,
}

impl FixtureGateway {
    pub fn new(user: Option<UserProfile>, posts: Vec<Post>) -> Self {
        Self { user, posts, latency: Duration::ZERO }
    }

    pub fn from_json(json: &str) -> Result<Self, GatewayError> {
        let document: FixtureDocument =
            serde_json::from_str(json).map_err(|e| GatewayError::Fixture(e.to_string()))?;
        Ok(Self::new(document.user, document.posts))
    }

    /// Every call waits `latency` before answering.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl HomeGateway for FixtureGateway {
    #[instrument(skip(self))]
    async fn get_user_data(&self) -> GatewayResponse<UserProfile> {
        self.simulate_latency().await;
        match &self.user {
            Some(user) => {
                debug!(username = %user.username, "Serving user document");
                GatewayResponse::success(user.clone())
            }
            None => GatewayResponse::failure(GatewayError::Remote("User document not found".into())),
        }
    }

    #[instrument(skip(self))]
    async fn get_all_posts(&self) -> GatewayResponse<Vec<Post>> {
        self.simulate_latency().await;
        debug!(count = self.posts.len(), "Serving post collection");
        GatewayResponse::success(self.posts.clone())
    }
}
