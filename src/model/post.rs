use serde::{Deserialize, Serialize};

/// A feed post as stored in the backend's post collection.
///
/// Posts carry no identity of their own. Two posts are the same post when every
/// field matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Post {
    pub profile_image: String,
    pub username: String,
    /// Epoch milliseconds.
    pub time_stamp: i64,
    pub is_verified: bool,
    pub images: Vec<String>,
    /// User ids.
    pub likes: Vec<String>,
    /// User ids.
    pub comments: Vec<String>,
    pub caption: String,
}

impl Post {
    pub fn new(username: impl Into<String>, caption: impl Into<String>, time_stamp: i64) -> Self {
        Self {
            username: username.into(),
            caption: caption.into(),
            time_stamp,
            ..Self::default()
        }
    }

    pub fn like_count(&self) -> usize {
        self.likes.len()
    }

    pub fn is_liked_by(&self, user_id: &str) -> bool {
        self.likes.iter().any(|id| id == user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_reads_backend_document() {
        let json = r#"{
            "profileImage": "https://cdn.example/p.jpg",
            "username": "pra_sidh_22",
            "timeStamp": 1719840723950,
            "isVerified": true,
            "images": ["https://cdn.example/1.jpg"],
            "likes": ["u1", "u2"]
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();

        assert_eq!(post.username, "pra_sidh_22");
        assert_eq!(post.time_stamp, 1_719_840_723_950);
        assert!(post.is_verified);
        assert_eq!(post.like_count(), 2);
        assert!(post.is_liked_by("u2"));
        assert!(post.comments.is_empty());
        assert_eq!(post.caption, "");
    }

    #[test]
    fn test_posts_compare_structurally() {
        let a = Post::new("alice", "sunset", 10);
        let mut b = Post::new("alice", "sunset", 10);
        assert_eq!(a, b);

        b.likes.push("bob".into());
        assert_ne!(a, b);
    }
}
