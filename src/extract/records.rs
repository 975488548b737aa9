use serde::{Deserialize, Serialize};

/// Account identity as shown on the profile page at extraction time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    display_name: String,
    handle: String,
    follower_count: String,
    following_count: String,
}

impl Profile {
    pub fn new(
        display_name: impl Into<String>,
        handle: impl Into<String>,
        follower_count: impl Into<String>,
        following_count: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            handle: handle.into(),
            follower_count: follower_count.into(),
            following_count: following_count.into(),
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn handle(&self) -> &str {
        &self.handle
    }

    pub fn follower_count(&self) -> &str {
        &self.follower_count
    }

    pub fn following_count(&self) -> &str {
        &self.following_count
    }
}

/// One rendered post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    body: String,
    /// ISO-8601 timestamp, at least `YYYY-MM-DDTHH:MM:SS`
    posted_at: String,
    reply_count: String,
    repost_count: String,
    like_count: String,
}

impl Post {
    pub fn new(
        body: impl Into<String>,
        posted_at: impl Into<String>,
        reply_count: impl Into<String>,
        repost_count: impl Into<String>,
        like_count: impl Into<String>,
    ) -> Self {
        Self {
            body: body.into(),
            posted_at: posted_at.into(),
            reply_count: reply_count.into(),
            repost_count: repost_count.into(),
            like_count: like_count.into(),
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn posted_at(&self) -> &str {
        &self.posted_at
    }

    pub fn reply_count(&self) -> &str {
        &self.reply_count
    }

    pub fn repost_count(&self) -> &str {
        &self.repost_count
    }

    pub fn like_count(&self) -> &str {
        &self.like_count
    }
}

/// Everything one extraction run produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub profile: Profile,
    /// Posts in document order
    pub posts: Vec<Post>,
}

impl ExtractionResult {
    pub fn new(profile: Profile, posts: Vec<Post>) -> Self {
        Self { profile, posts }
    }

    /// Serialize as pretty JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
