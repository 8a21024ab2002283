use serde::{Deserialize, Serialize};

/// One image in a user's story.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Story {
    pub image: String,
    /// Epoch milliseconds.
    pub time_stamp: i64,
}

/// All current stories of one user, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserStory {
    pub username: String,
    pub profile_image: String,
    pub stories: Vec<Story>,
}
