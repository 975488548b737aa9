use crate::dom::selector::{Extract, FieldPath, Selector};
use crate::error::{Result, ScrapeError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Where the profile identity fields live, relative to the document root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileFields {
    pub display_name: FieldPath,
    pub handle: FieldPath,
    pub follower_count: FieldPath,
    pub following_count: FieldPath,
}

/// Where the post fields live, relative to one post container
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostFields {
    pub body: FieldPath,
    pub posted_at: FieldPath,
    pub reply_count: FieldPath,
    pub repost_count: FieldPath,
    pub like_count: FieldPath,
}

/// The full set of field paths for one site
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLayout {
    pub profile: ProfileFields,
    /// Matches each post container; also the readiness signal while loading
    pub post_container: Selector,
    pub post: PostFields,
}

impl PageLayout {
    /// Layout of a Twitter / X profile page
    pub fn twitter() -> Result<Self> {
        Ok(Self {
            profile: ProfileFields {
                display_name: FieldPath::text(r#"[data-testid="UserName"] div span"#)?,
                handle: FieldPath::text(r#"[data-testid="UserName"] div:nth-of-type(2) span"#)?,
                follower_count: FieldPath::text(r#"a[href$="/followers"]"#)?,
                following_count: FieldPath::text(r#"a[href$="/following"]"#)?,
            },
            post_container: Selector::parse("article")?,
            post: PostFields {
                body: FieldPath::text(r#"[data-testid="tweetText"]"#)?,
                posted_at: FieldPath::attribute("time", "datetime")?,
                reply_count: FieldPath::text(r#"[data-testid="reply"]"#)?,
                repost_count: FieldPath::text(r#"[data-testid="retweet"]"#)?,
                like_count: FieldPath::text(r#"[data-testid="like"]"#)?,
            },
        })
    }

    /// Parse a layout from JSON.
    ///
    /// Malformed JSON or a missing field is [`ScrapeError::LayoutParseFailed`];
    /// a well-formed file with a selector that does not compile is
    /// [`ScrapeError::InvalidSelector`] naming that selector.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: LayoutFile =
            serde_json::from_str(json).map_err(|e| ScrapeError::LayoutParseFailed(e.to_string()))?;
        file.compile()
    }

    /// Load a layout from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    /// Serialize to the JSON shape [`PageLayout::from_json`] reads
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| ScrapeError::LayoutParseFailed(e.to_string()))
    }
}

// On-disk shape of a layout; selectors stay strings until compiled
#[derive(Deserialize)]
struct FieldFile {
    selector: String,
    #[serde(default)]
    extract: Extract,
}

#[derive(Deserialize)]
struct ProfileFile {
    display_name: FieldFile,
    handle: FieldFile,
    follower_count: FieldFile,
    following_count: FieldFile,
}

#[derive(Deserialize)]
struct PostFile {
    body: FieldFile,
    posted_at: FieldFile,
    reply_count: FieldFile,
    repost_count: FieldFile,
    like_count: FieldFile,
}

#[derive(Deserialize)]
struct LayoutFile {
    profile: ProfileFile,
    post_container: String,
    post: PostFile,
}

impl FieldFile {
    fn compile(self) -> Result<FieldPath> {
        Ok(FieldPath {
            selector: Selector::parse(&self.selector)?,
            extract: self.extract,
        })
    }
}

impl LayoutFile {
    fn compile(self) -> Result<PageLayout> {
        let LayoutFile { profile, post_container, post } = self;
        Ok(PageLayout {
            profile: ProfileFields {
                display_name: profile.display_name.compile()?,
                handle: profile.handle.compile()?,
                follower_count: profile.follower_count.compile()?,
                following_count: profile.following_count.compile()?,
            },
            post_container: Selector::parse(&post_container)?,
            post: PostFields {
                body: post.body.compile()?,
                posted_at: post.posted_at.compile()?,
                reply_count: post.reply_count.compile()?,
                repost_count: post.repost_count.compile()?,
                like_count: post.like_count.compile()?,
            },
        })
    }
}
