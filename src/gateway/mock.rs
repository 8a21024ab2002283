//! # Mock Gateway
//!
//! A scripted [`HomeGateway`] for tests.
//!
//! Queue the answers each call should produce, hand the mock to the code under
//! test, then call [`MockGateway::verify`]:
//!
//! ```ignore
//! let mock = MockGateway::new();
//! mock.expect_user_data().return_ok(UserProfile::new("alice", "a.jpg"));
//! mock.expect_all_posts().after(Duration::from_millis(50)).return_ok(vec![]);
//!
//! let gateway: Arc<dyn HomeGateway> = Arc::new(mock.clone());
//! // ... drive the view model ...
//! mock.verify();
//! ```
//!
//! User and post calls have separate queues, so the order in which two
//! concurrent loads reach the gateway does not matter.

use crate::gateway::{GatewayError, GatewayResponse, HomeGateway};
use crate::model::{Post, UserProfile};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// One scripted answer.
struct Expectation<T> {
    delay: Duration,
    response: GatewayResponse<T>,
}

#[derive(Default)]
struct Script {
    user_data: VecDeque<Expectation<UserProfile>>,
    all_posts: VecDeque<Expectation<Vec<Post>>>,
    user_data_calls: usize,
    all_posts_calls: usize,
    unexpected: Vec<&'static str>,
}

/// A gateway that replays queued answers.
///
/// Clones share the same script, so a test can keep one clone for `verify()`
/// while the view model owns another.
#[derive(Clone, Default)]
pub struct MockGateway {
    script: Arc<Mutex<Script>>,
}

impl MockGateway {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects one `get_user_data` call.
    pub fn expect_user_data(&self) -> ExpectationBuilder<UserProfile> {
        ExpectationBuilder {
            script: self.script.clone(),
            delay: Duration::ZERO,
            push: |script, expectation| script.user_data.push_back(expectation),
        }
    }

    /// Expects one `get_all_posts` call.
    pub fn expect_all_posts(&self) -> ExpectationBuilder<Vec<Post>> {
        ExpectationBuilder {
            script: self.script.clone(),
            delay: Duration::ZERO,
            push: |script, expectation| script.all_posts.push_back(expectation),
        }
    }

    pub fn user_data_calls(&self) -> usize {
        lock(&self.script).user_data_calls
    }

    pub fn all_posts_calls(&self) -> usize {
        lock(&self.script).all_posts_calls
    }

    /// Panics unless every expectation was consumed and no call was unexpected.
    pub fn verify(&self) {
        let script = lock(&self.script);
        if !script.unexpected.is_empty() {
            panic!("Unexpected gateway calls: {:?}", script.unexpected);
        }
        let remaining = script.user_data.len() + script.all_posts.len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

fn lock(script: &Mutex<Script>) -> MutexGuard<'_, Script> {
    script.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Builder for one scripted answer.
pub struct ExpectationBuilder<T> {
    script: Arc<Mutex<Script>>,
    delay: Duration,
    push: fn(&mut Script, Expectation<T>),
}

impl<T> ExpectationBuilder<T> {
    /// Answers only after `delay` has passed.
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, data: T) {
        self.respond(GatewayResponse::success(data));
    }

    /// Sets the expectation to return a backend failure with `message`.
    pub fn return_err(self, message: impl Into<String>) {
        self.respond(GatewayResponse::failure(GatewayError::Remote(message.into())));
    }

    /// Sets the expectation to return a response that is still loading.
    pub fn return_loading(self) {
        self.respond(GatewayResponse::loading());
    }

    /// Sets the expectation to return `response` unchanged.
    pub fn respond(self, response: GatewayResponse<T>) {
        let mut script = lock(&self.script);
        (self.push)(&mut script, Expectation { delay: self.delay, response });
    }
}

#[async_trait]
impl HomeGateway for MockGateway {
    async fn get_user_data(&self) -> GatewayResponse<UserProfile> {
        let next = {
            let mut script = lock(&self.script);
            script.user_data_calls += 1;
            let next = script.user_data.pop_front();
            if next.is_none() {
                script.unexpected.push("get_user_data");
            }
            next
        };
        replay(next, "get_user_data").await
    }

    async fn get_all_posts(&self) -> GatewayResponse<Vec<Post>> {
        let next = {
            let mut script = lock(&self.script);
            script.all_posts_calls += 1;
            let next = script.all_posts.pop_front();
            if next.is_none() {
                script.unexpected.push("get_all_posts");
            }
            next
        };
        replay(next, "get_all_posts").await
    }
}

async fn replay<T>(expectation: Option<Expectation<T>>, call: &str) -> GatewayResponse<T> {
    match expectation {
        Some(Expectation { delay, response }) => {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            response
        }
        None => GatewayResponse::failure(GatewayError::Remote(format!("Unexpected call: {call}"))),
    }
}
