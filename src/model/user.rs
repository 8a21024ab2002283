use serde::{Deserialize, Serialize};

/// The signed-in user's profile document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserProfile {
    pub username: String,
    pub profile_image: String,
    pub name: String,
    pub bio: String,
}

impl UserProfile {
    /// Creates a profile with only the fields the home screen shows.
    pub fn new(username: impl Into<String>, profile_image: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            profile_image: profile_image.into(),
            ..Self::default()
        }
    }
}
