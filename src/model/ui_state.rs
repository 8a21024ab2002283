use crate::model::{Post, UserProfile};

/// Where one independently loaded section of a screen stands.
///
/// Exactly one of "loading", "failed" or "loaded" holds at a time, so a section can
/// never report data and an error together.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// True once a fetch has finished, either way.
    pub fn is_settled(&self) -> bool {
        matches!(self, LoadState::Loaded(_) | LoadState::Failed(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Snapshot of the home screen.
///
/// The profile header and the post list load independently, so each has its own
/// [`LoadState`]. The accessors give the flat view the screen renders from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeUiState {
    pub profile: LoadState<UserProfile>,
    pub posts: LoadState<Vec<Post>>,
}

impl HomeUiState {
    /// Copy of `self` with the profile section replaced.
    pub fn with_profile(&self, profile: LoadState<UserProfile>) -> Self {
        Self { profile, ..self.clone() }
    }

    /// Copy of `self` with the post section replaced.
    pub fn with_posts(&self, posts: LoadState<Vec<Post>>) -> Self {
        Self { posts, ..self.clone() }
    }

    pub fn username(&self) -> &str {
        self.profile.value().map_or("", |p| p.username.as_str())
    }

    pub fn profile_image(&self) -> &str {
        self.profile.value().map_or("", |p| p.profile_image.as_str())
    }

    pub fn posts(&self) -> &[Post] {
        self.posts.value().map(Vec::as_slice).unwrap_or_default()
    }

    /// True while either section is still loading.
    pub fn is_loading(&self) -> bool {
        self.profile.is_loading() || self.posts.is_loading()
    }

    /// First failure message, profile before posts. Empty when nothing failed.
    pub fn error(&self) -> &str {
        self.profile.error().or_else(|| self.posts.error()).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state_is_idle_and_empty() {
        let state = HomeUiState::default();
        assert_eq!(state.profile, LoadState::Idle);
        assert!(!state.is_loading());
        assert_eq!(state.error(), "");
        assert_eq!(state.username(), "");
        assert!(state.posts().is_empty());
    }

    #[test]
    fn test_sections_change_independently() {
        let state = HomeUiState::default()
            .with_profile(LoadState::Loaded(UserProfile::new("alice", "a.jpg")))
            .with_posts(LoadState::Loading);

        assert_eq!(state.username(), "alice");
        assert_eq!(state.profile_image(), "a.jpg");
        assert!(state.is_loading());

        let state = state.with_posts(LoadState::Loaded(vec![Post::new("bob", "hi", 1)]));
        assert!(!state.is_loading());
        assert_eq!(state.posts().len(), 1);
        assert_eq!(state.username(), "alice");
    }

    #[test]
    fn test_error_prefers_profile_failure() {
        let state = HomeUiState::default()
            .with_posts(LoadState::Failed("posts down".into()))
            .with_profile(LoadState::Failed("no user".into()));
        assert_eq!(state.error(), "no user");

        let state = state.with_profile(LoadState::Loading);
        assert_eq!(state.error(), "posts down");
        assert!(state.is_loading());
    }

    #[test]
    fn test_load_state_settlement() {
        let loading: LoadState<u8> = LoadState::Loading;
        assert!(!loading.is_settled());
        assert!(LoadState::Loaded(1u8).is_settled());
        assert!(LoadState::<u8>::Failed("x".into()).is_settled());
        assert_eq!(LoadState::<u8>::Idle.value(), None);
    }
}
