//! # Stories
//!
//! Story viewing: a [`StoryPlayer`] state machine, a [`StoryActor`] that drives
//! it from a Tokio timer, and the [`StoryController`] the screen talks to.
//!
//! The actor follows the same shape as the state store: it owns the player,
//! applies commands in arrival order, and publishes a [`StoryProgress`] on a
//! `watch` channel after every tick or command. It stops when the last
//! controller is dropped.

pub mod player;
pub mod timestamp;

pub use player::*;
pub use timestamp::*;

use crate::framework::FrameworkError;
use crate::model::UserStory;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, instrument};

/// Timing of the story screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryConfig {
    /// How long each story stays up.
    pub story_duration: Duration,
    /// How often the progress bar is refreshed.
    pub tick: Duration,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            story_duration: Duration::from_secs(5),
            tick: Duration::from_millis(50),
        }
    }
}

/// Runs a [`StoryPlayer`] against the clock.
pub struct StoryActor {
    player: StoryPlayer,
    tick: Duration,
    receiver: mpsc::Receiver<StoryCommand>,
    publisher: watch::Sender<StoryProgress>,
}

impl StoryActor {
    pub fn new(user_story: UserStory, config: StoryConfig) -> (Self, StoryController) {
        let player = StoryPlayer::new(user_story, config.story_duration);
        let (sender, receiver) = mpsc::channel(16);
        let (publisher, watcher) = watch::channel(player.progress());
        let actor = Self {
            player,
            tick: config.tick.max(Duration::from_millis(1)),
            receiver,
            publisher,
        };
        (actor, StoryController { sender, watcher })
    }

    pub async fn run(mut self) {
        let username = self.player.user_story().username.clone();
        let count = self.player.user_story().stories.len();
        info!(%username, count, "Story player started");

        let mut ticker = tokio::time::interval(self.tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut last = Instant::now();

        loop {
            tokio::select! {
                now = ticker.tick() => {
                    let dt = now.saturating_duration_since(last);
                    last = now;
                    if self.player.advance(dt) {
                        let progress = self.player.progress();
                        debug!(%username, index = progress.current_index, finished = progress.finished, "Advanced");
                    }
                }
                command = self.receiver.recv() => match command {
                    Some(command) => {
                        debug!(%username, ?command, "Command");
                        self.player.apply(command);
                    }
                    None => break,
                },
            }
            self.publisher.send_if_modified(|progress| {
                let next = self.player.progress();
                if *progress == next {
                    false
                } else {
                    *progress = next;
                    true
                }
            });
        }

        info!(%username, index = self.player.current_index(), finished = self.player.is_finished(), "Story player stopped");
    }
}

/// Handle used by the story screen.
#[derive(Clone)]
pub struct StoryController {
    sender: mpsc::Sender<StoryCommand>,
    watcher: watch::Receiver<StoryProgress>,
}

impl StoryController {
    #[instrument(skip(self))]
    pub async fn send(&self, command: StoryCommand) -> Result<(), FrameworkError> {
        self.sender.send(command).await.map_err(|_| FrameworkError::ActorClosed)
    }

    pub async fn pause(&self) -> Result<(), FrameworkError> {
        self.send(StoryCommand::Pause).await
    }

    pub async fn resume(&self) -> Result<(), FrameworkError> {
        self.send(StoryCommand::Resume).await
    }

    pub async fn image_loaded(&self) -> Result<(), FrameworkError> {
        self.send(StoryCommand::SetImageLoaded(true)).await
    }

    pub fn progress(&self) -> StoryProgress {
        self.watcher.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<StoryProgress> {
        self.watcher.clone()
    }

    /// Resolves once the last story has been shown to the end.
    pub async fn wait_finished(&self) -> Result<(), FrameworkError> {
        let mut watcher = self.watcher.clone();
        watcher
            .wait_for(|progress| progress.finished)
            .await
            .map(|_| ())
            .map_err(|_| FrameworkError::ActorClosed)
    }
}
