//! Progress through one user's stories.

use crate::model::UserStory;
use std::time::Duration;

/// What the story screen renders from: which story is up and how far along its
/// progress bar is.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryProgress {
    pub current_index: usize,
    /// Fill of the current progress bar, `0.0..=1.0`.
    pub fraction: f32,
    pub paused: bool,
    pub finished: bool,
}

/// Inputs the story screen forwards to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoryCommand {
    /// Long press started.
    Pause,
    /// Long press released.
    Resume,
    Next,
    Previous,
    SetInFocus(bool),
    SetImageLoaded(bool),
}

/// Timer-free story state machine.
///
/// Time only passes through [`StoryPlayer::advance`]. The bar for the current story
/// fills while the player is focused, not paused, and the story's image has
/// loaded. A full bar moves on to the next story, and the new image has to load
/// before its bar starts. After the last story the player is finished.
#[derive(Debug, Clone)]
pub struct StoryPlayer {
    user_story: UserStory,
    story_duration: Duration,
    current_index: usize,
    elapsed: Duration,
    paused: bool,
    in_focus: bool,
    image_loaded: bool,
    finished: bool,
}

impl StoryPlayer {
    pub fn new(user_story: UserStory, story_duration: Duration) -> Self {
        let finished = user_story.stories.is_empty();
        Self {
            user_story,
            story_duration,
            current_index: 0,
            elapsed: Duration::ZERO,
            paused: false,
            in_focus: true,
            image_loaded: false,
            finished,
        }
    }

    pub fn user_story(&self) -> &UserStory {
        &self.user_story
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Whether the current bar is filling.
    pub fn is_running(&self) -> bool {
        !self.finished && !self.paused && self.in_focus && self.image_loaded
    }

    pub fn progress(&self) -> StoryProgress {
        let fraction = if self.finished {
            1.0
        } else if self.story_duration.is_zero() {
            0.0
        } else {
            (self.elapsed.as_secs_f32() / self.story_duration.as_secs_f32()).min(1.0)
        };
        StoryProgress {
            current_index: self.current_index,
            fraction,
            paused: self.paused,
            finished: self.finished,
        }
    }

    /// Lets `dt` pass. Returns true when this moved to another story or finished.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if !self.is_running() {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= self.story_duration {
            self.next();
            return true;
        }
        false
    }

    pub fn apply(&mut self, command: StoryCommand) {
        match command {
            StoryCommand::Pause => self.paused = true,
            StoryCommand::Resume => self.paused = false,
            StoryCommand::Next => self.next(),
            StoryCommand::Previous => self.previous(),
            StoryCommand::SetInFocus(in_focus) => self.in_focus = in_focus,
            StoryCommand::SetImageLoaded(loaded) => self.image_loaded = loaded,
        }
    }

    fn next(&mut self) {
        if self.finished {
            return;
        }
        if self.current_index + 1 < self.user_story.stories.len() {
            self.show(self.current_index + 1);
        } else {
            self.finished = true;
            self.elapsed = self.story_duration;
        }
    }

    /// Steps back one story. On the first story it restarts it.
    fn previous(&mut self) {
        if self.user_story.stories.is_empty() {
            return;
        }
        if self.finished {
            self.finished = false;
            self.elapsed = Duration::ZERO;
        } else if self.current_index > 0 {
            self.show(self.current_index - 1);
        } else {
            self.elapsed = Duration::ZERO;
        }
    }

    fn show(&mut self, index: usize) {
        self.current_index = index;
        self.elapsed = Duration::ZERO;
        self.image_loaded = false;
    }
}
