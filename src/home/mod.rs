//! # Home Screen
//!
//! The view model behind the home feed: it loads the signed-in user's profile
//! and the post list, and keeps a [`HomeUiState`] snapshot up to date in a
//! [`StateActor`].
//!
//! ## Loading
//!
//! [`HomeViewModel::load_user_data`] and [`HomeViewModel::load_all_posts`] are
//! independent. Each one:
//!
//! 1. enqueues a "loading" change for its section before returning (when the
//!    store's queue is full, the spawned task sends it before fetching),
//! 2. spawns a task that calls the [`HomeGateway`] once,
//! 3. waits out the configured minimum loading time,
//! 4. writes `Loaded` or `Failed(message)` into its section.
//!
//! Every change is a reducer that only touches its own section, applied by the
//! store's single writer. Loads of different sections finishing in either order
//! therefore both land. Each load also carries a per-section generation: when
//! the same section is reloaded while an older load is still running, only the
//! newest load may write, so a late answer never replaces a fresher one.
//! Nothing is retried and nothing is returned to the caller: the outcome is
//! visible in the state only.
//!
//! ## Structure
//!
//! - [`config`] - [`HomeConfig`] minimum loading times and queue size
//! - [`error`] - [`HomeError`] and [`ConfigError`]
//! - [`new_store()`] - Factory for the screen's state actor and client

pub mod config;
pub mod error;

pub use config::*;
pub use error::*;

use crate::framework::{FrameworkError, StateActor, StateClient};
use crate::gateway::{GatewayResponse, HomeGateway};
use crate::model::{HomeUiState, LoadState};
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinSet;
use tracing::{debug, info, info_span, warn, Instrument};

/// Creates the home screen's state actor and its client.
pub fn new_store(buffer_size: usize) -> (StateActor<HomeUiState>, StateClient<HomeUiState>) {
    StateActor::new(buffer_size, HomeUiState::default())
}

/// Which part of [`HomeUiState`] a load writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Profile,
    Posts,
}

impl Section {
    fn loading_label(self) -> &'static str {
        match self {
            Section::Profile => "profile_loading",
            Section::Posts => "posts_loading",
        }
    }

    fn settled_label(self) -> &'static str {
        match self {
            Section::Profile => "profile_settled",
            Section::Posts => "posts_settled",
        }
    }
}

/// Newest load issued per section.
///
/// Reducers of a load that is no longer the newest for its section leave the
/// snapshot untouched.
#[derive(Debug, Default)]
struct Generations {
    profile: AtomicU64,
    posts: AtomicU64,
}

impl Generations {
    fn counter(&self, section: Section) -> &AtomicU64 {
        match section {
            Section::Profile => &self.profile,
            Section::Posts => &self.posts,
        }
    }

    fn next(&self, section: Section) -> u64 {
        self.counter(section).fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_latest(&self, section: Section, generation: u64) -> bool {
        self.counter(section).load(Ordering::SeqCst) == generation
    }
}

/// Orchestrates the home screen's fetches.
///
/// Load methods spawn Tokio tasks and must be called from within a runtime.
/// Dropping the view model aborts loads that are still in flight.
pub struct HomeViewModel {
    gateway: Arc<dyn HomeGateway>,
    store: StateClient<HomeUiState>,
    config: HomeConfig,
    generations: Arc<Generations>,
    tasks: JoinSet<()>,
}

impl HomeViewModel {
    pub fn new(gateway: Arc<dyn HomeGateway>, store: StateClient<HomeUiState>, config: HomeConfig) -> Self {
        Self {
            gateway,
            store,
            config,
            generations: Arc::new(Generations::default()),
            tasks: JoinSet::new(),
        }
    }

    /// Starts both loads, as a freshly opened screen does.
    pub fn start(&mut self) {
        self.load_user_data();
        self.load_all_posts();
    }

    /// Fetches the signed-in user's profile into the header fields.
    pub fn load_user_data(&mut self) {
        let gateway = Arc::clone(&self.gateway);
        let delay = self.config.user_data_delay();
        self.spawn_load(
            Section::Profile,
            delay,
            async move { gateway.get_user_data().await },
            HomeUiState::with_profile,
        );
    }

    /// Fetches the post list. A success replaces the previous list wholesale.
    pub fn load_all_posts(&mut self) {
        let gateway = Arc::clone(&self.gateway);
        let delay = self.config.posts_delay();
        self.spawn_load(
            Section::Posts,
            delay,
            async move { gateway.get_all_posts().await },
            HomeUiState::with_posts,
        );
    }

    fn spawn_load<T, Fut>(
        &mut self,
        section: Section,
        min_duration: Duration,
        fetch: Fut,
        write: fn(&HomeUiState, LoadState<T>) -> HomeUiState,
    ) where
        T: Send + 'static,
        Fut: Future<Output = GatewayResponse<T>> + Send + 'static,
    {
        let generation = self.generations.next(section);
        let mark = {
            let generations = Arc::clone(&self.generations);
            move |state: &HomeUiState| {
                if generations.is_latest(section, generation) {
                    write(state, LoadState::Loading)
                } else {
                    state.clone()
                }
            }
        };

        // The mark must never be lost. With a full queue the task sends it
        // itself, still ahead of its own result.
        let pending_mark = match self.store.dispatch(section.loading_label(), mark.clone()) {
            Ok(()) => None,
            Err(FrameworkError::QueueFull) => {
                debug!(?section, generation, "Store queue full, marking loading from the load task");
                Some(mark)
            }
            Err(e) => {
                warn!(?section, error = %e, "Could not mark section as loading");
                None
            }
        };

        let store = self.store.clone();
        let generations = Arc::clone(&self.generations);
        let span = info_span!("load", ?section, generation);
        self.tasks.spawn(
            async move {
                if let Some(mark) = pending_mark {
                    if let Err(e) = store.update(section.loading_label(), mark).await {
                        warn!(error = %e, "Could not mark section as loading");
                    }
                }

                let result = fetch.await.into_result();
                if !min_duration.is_zero() {
                    tokio::time::sleep(min_duration).await;
                }

                let next = match result {
                    Ok(data) => {
                        info!("Loaded");
                        LoadState::Loaded(data)
                    }
                    Err(e) => {
                        warn!(error = %e, "Load failed");
                        LoadState::Failed(e.to_string())
                    }
                };

                let settle = move |state: &HomeUiState| {
                    if generations.is_latest(section, generation) {
                        write(state, next)
                    } else {
                        debug!(?section, generation, "Superseded by a newer load, result dropped");
                        state.clone()
                    }
                };
                if let Err(e) = store.update(section.settled_label(), settle).await {
                    warn!(error = %e, "Could not publish load result");
                }
            }
            .instrument(span),
        );
    }

    /// The current snapshot, after every change queued so far has been applied.
    pub async fn state(&self) -> Result<HomeUiState, HomeError> {
        Ok(self.store.get().await?)
    }

    /// The last published snapshot.
    pub fn current(&self) -> HomeUiState {
        self.store.current()
    }

    /// Observes every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<HomeUiState> {
        self.store.subscribe()
    }

    /// Number of loads still running.
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    /// Waits for every load started so far to finish.
    pub async fn settled(&mut self) -> Result<HomeUiState, HomeError> {
        while let Some(joined) = self.tasks.join_next().await {
            if let Err(e) = joined {
                if e.is_panic() {
                    return Err(HomeError::TaskFailed(e.to_string()));
                }
            }
        }
        self.state().await
    }

    /// Ends the screen session: abandons in-flight loads and resets the state.
    pub async fn clear(&mut self) -> Result<(), HomeError> {
        let abandoned = self.tasks.len();
        self.tasks.abort_all();
        while self.tasks.join_next().await.is_some() {}
        debug!(abandoned, "Aborted in-flight loads");

        self.store.reset().await?;
        info!("Home state cleared");
        Ok(())
    }
}
