//! # Mock Store
//!
//! Utilities for testing code that talks to a [`StateClient`] without spawning a
//! real [`StateActor`](crate::framework::StateActor).
//!
//! Use [`create_mock_store`] to get a client and a [`MockStore`]. The mock
//! receives the raw requests, so a test can assert their order and labels,
//! run the reducers against a snapshot of its choosing, and decide what to answer.

use crate::framework::{Reducer, Response, StateClient, StateRequest, StoreState};
use tokio::sync::{mpsc, watch};

/// The receiving half of a mocked store.
pub struct MockStore<S: StoreState> {
    receiver: mpsc::Receiver<StateRequest<S>>,
    publisher: watch::Sender<S>,
}

/// Creates a client whose requests land in the returned [`MockStore`].
///
/// # Testing Strategy
/// Orchestration code is easiest to verify at its boundary: which changes it asks
/// the store for, and in which order. The mock never applies anything on its
/// own; call [`MockStore::publish`] to feed snapshots to subscribers.
pub fn create_mock_store<S: StoreState>(buffer_size: usize) -> (StateClient<S>, MockStore<S>) {
    let (sender, receiver) = mpsc::channel(buffer_size.max(1));
    let (publisher, watcher) = watch::channel(S::default());
    (StateClient::new(sender, watcher), MockStore { receiver, publisher })
}

impl<S: StoreState> MockStore<S> {
    /// Next raw request, or `None` once every client is gone.
    pub async fn next_request(&mut self) -> Option<StateRequest<S>> {
        self.receiver.recv().await
    }

    /// Expects the next request to be a `Dispatch`.
    pub async fn expect_dispatch(&mut self) -> Option<(&'static str, Reducer<S>)> {
        match self.receiver.recv().await {
            Some(StateRequest::Dispatch { label, reducer }) => Some((label, reducer)),
            _ => None,
        }
    }

    /// Expects the next request to be an `Update`.
    pub async fn expect_update(&mut self) -> Option<(&'static str, Reducer<S>, Response<S>)> {
        match self.receiver.recv().await {
            Some(StateRequest::Update { label, reducer, respond_to }) => Some((label, reducer, respond_to)),
            _ => None,
        }
    }

    /// Expects the next request to be a `Reset`.
    pub async fn expect_reset(&mut self) -> Option<Response<S>> {
        match self.receiver.recv().await {
            Some(StateRequest::Reset { respond_to }) => Some(respond_to),
            _ => None,
        }
    }

    /// Publishes `snapshot` to every subscriber of the mocked client.
    pub fn publish(&self, snapshot: S) {
        self.publisher.send_replace(snapshot);
    }

    /// True when no request is waiting.
    pub fn is_idle(&self) -> bool {
        self.receiver.is_empty()
    }
}
