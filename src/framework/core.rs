//! # Core State Store
//!
//! This module defines the generic building blocks for a screen's observable state.
//!
//! ## Key Types
//!
//! - [`StoreState`]: The trait that every screen snapshot satisfies.
//! - [`StateActor`]: The single writer that owns the snapshot.
//! - [`StateClient`]: The cloneable handle used to read, update and observe it.
//! - [`FrameworkError`]: Plumbing errors (e.g., ActorClosed, QueueFull).

use std::fmt::{self, Debug};
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info, instrument};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any screen snapshot must satisfy to be owned by a [`StateActor`].
///
/// # Architecture Note
/// A snapshot is a plain value. It is never mutated in place from the outside:
/// every change is a function from the previous snapshot to the next one (a
/// "reducer"), and the actor applies reducers one at a time. `Default` gives the
/// fresh state of a new screen session and the target of [`StateClient::reset`].
pub trait StoreState: Clone + Default + Debug + Send + Sync + 'static {}

impl<T> StoreState for T where T: Clone + Default + Debug + Send + Sync + 'static {}

/// A copy-with-changed-fields update: reads the current snapshot, returns the next one.
pub type Reducer<S> = Box<dyn FnOnce(&S) -> S + Send>;

// =============================================================================
// 2. THE MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the store plumbing itself.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("State actor closed")]
    ActorClosed,
    #[error("State actor dropped response channel")]
    ActorDropped,
    #[error("State actor queue is full")]
    QueueFull,
}

/// Type alias for the one-shot response channel used by the store.
pub type Response<T> = oneshot::Sender<T>;

/// Message type sent to the [`StateActor`].
///
/// # Single Writer
/// Every variant that changes the snapshot is applied by the actor task alone, in
/// arrival order. That is what makes [`StateRequest::Update`] an atomic
/// read-modify-write: no other change can slip in between reading the snapshot
/// and writing the reducer's result.
///
/// - **Update**: apply a reducer, reply with the new snapshot.
/// - **Dispatch**: apply a reducer, no reply. Enqueued without awaiting.
/// - **Replace**: overwrite the whole snapshot with a value built elsewhere.
/// - **Get**: read the current snapshot.
/// - **Reset**: go back to `S::default()`.
pub enum StateRequest<S: StoreState> {
    Update {
        label: &'static str,
        reducer: Reducer<S>,
        respond_to: Response<S>,
    },
    Dispatch {
        label: &'static str,
        reducer: Reducer<S>,
    },
    Replace {
        snapshot: S,
        respond_to: Response<S>,
    },
    Get {
        respond_to: Response<S>,
    },
    Reset {
        respond_to: Response<S>,
    },
}

impl<S: StoreState> Debug for StateRequest<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateRequest::Update { label, .. } => f.debug_struct("Update").field("label", label).finish(),
            StateRequest::Dispatch { label, .. } => f.debug_struct("Dispatch").field("label", label).finish(),
            StateRequest::Replace { snapshot, .. } => f.debug_struct("Replace").field("snapshot", snapshot).finish(),
            StateRequest::Get { .. } => f.write_str("Get"),
            StateRequest::Reset { .. } => f.write_str("Reset"),
        }
    }
}

// =============================================================================
// 3. THE ACTOR
// =============================================================================

/// The actor that owns one screen snapshot.
///
/// # Architecture Note
/// This struct is the "Server" half. It owns the snapshot and the receiving end of
/// the request channel. Requests are processed *sequentially*, so the snapshot
/// needs no `Mutex`. Observers never talk to the actor directly: each applied
/// change is published on a `watch` channel, and [`StateClient::subscribe`] hands
/// out receivers for it.
pub struct StateActor<S: StoreState> {
    receiver: mpsc::Receiver<StateRequest<S>>,
    state: S,
    publisher: watch::Sender<S>,
}

impl<S: StoreState> StateActor<S> {
    pub fn new(buffer_size: usize, initial: S) -> (Self, StateClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let (publisher, watcher) = watch::channel(initial.clone());
        let actor = Self {
            receiver,
            state: initial,
            publisher,
        };
        let client = StateClient::new(sender, watcher);
        (actor, client)
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        let state_type = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(state_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StateRequest::Update { label, reducer, respond_to } => {
                    self.apply(state_type, label, reducer);
                    let _ = respond_to.send(self.state.clone());
                }
                StateRequest::Dispatch { label, reducer } => {
                    self.apply(state_type, label, reducer);
                }
                StateRequest::Replace { snapshot, respond_to } => {
                    debug!(state_type, ?snapshot, "Replace");
                    self.commit(snapshot);
                    let _ = respond_to.send(self.state.clone());
                }
                StateRequest::Get { respond_to } => {
                    let _ = respond_to.send(self.state.clone());
                }
                StateRequest::Reset { respond_to } => {
                    info!(state_type, "Reset");
                    self.commit(S::default());
                    let _ = respond_to.send(self.state.clone());
                }
            }
        }

        info!(state_type, final_state = ?self.state, "Shutdown");
    }

    fn apply(&mut self, state_type: &str, label: &'static str, reducer: Reducer<S>) {
        let next = reducer(&self.state);
        debug!(state_type, label, ?next, "Applied");
        self.commit(next);
    }

    fn commit(&mut self, next: S) {
        self.state = next;
        self.publisher.send_replace(self.state.clone());
    }
}

// =============================================================================
// 4. THE CLIENT
// =============================================================================

/// A cloneable handle to a [`StateActor`].
#[derive(Clone)]
pub struct StateClient<S: StoreState> {
    sender: mpsc::Sender<StateRequest<S>>,
    watcher: watch::Receiver<S>,
}

impl<S: StoreState> StateClient<S> {
    pub fn new(sender: mpsc::Sender<StateRequest<S>>, watcher: watch::Receiver<S>) -> Self {
        Self { sender, watcher }
    }

    /// Applies `reducer` atomically and returns the resulting snapshot.
    #[instrument(level = "debug", skip(self, reducer))]
    pub async fn update<F>(&self, label: &'static str, reducer: F) -> Result<S, FrameworkError>
    where
        F: FnOnce(&S) -> S + Send + 'static,
    {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest::Update { label, reducer: Box::new(reducer), respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }

    /// Enqueues `reducer` without waiting.
    ///
    /// Anything sent through this client afterwards is applied after it.
    pub fn dispatch<F>(&self, label: &'static str, reducer: F) -> Result<(), FrameworkError>
    where
        F: FnOnce(&S) -> S + Send + 'static,
    {
        self.sender
            .try_send(StateRequest::Dispatch { label, reducer: Box::new(reducer) })
            .map_err(|e| match e {
                mpsc::error::TrySendError::Full(_) => FrameworkError::QueueFull,
                mpsc::error::TrySendError::Closed(_) => FrameworkError::ActorClosed,
            })
    }

    /// Overwrites the whole snapshot.
    ///
    /// Changes applied since `snapshot` was read are lost. Prefer [`Self::update`].
    pub async fn replace(&self, snapshot: S) -> Result<S, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest::Replace { snapshot, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }

    pub async fn get(&self) -> Result<S, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest::Get { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }

    pub async fn reset(&self) -> Result<S, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest::Reset { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }

    /// Last published snapshot, without a round trip to the actor.
    pub fn current(&self) -> S {
        self.watcher.borrow().clone()
    }

    /// A receiver that observes every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.watcher.clone()
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
