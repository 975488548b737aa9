use crate::dom::locator;
use crate::dom::selector::FieldPath;
use crate::error::{Result, ScrapeError};
use crate::extract::layout::PageLayout;
use crate::extract::records::{ExtractionResult, Post, Profile};
use crate::normalize::{coerce_count, validate_timestamp};
use scraper::ElementRef;

/// Turns a document snapshot into profile and post records
#[derive(Debug, Clone)]
pub struct RecordExtractor {
    layout: PageLayout,
}

impl RecordExtractor {
    pub fn new(layout: PageLayout) -> Self {
        Self { layout }
    }

    /// Extractor for the built-in Twitter / X layout
    pub fn twitter() -> Result<Self> {
        Ok(Self::new(PageLayout::twitter()?))
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Read the four identity fields. Any absent field fails the whole profile.
    pub fn extract_profile(&self, root: ElementRef<'_>) -> Result<Profile> {
        let fields = &self.layout.profile;

        let profile = Profile::new(
            required(root, &fields.display_name, "display_name")?,
            required(root, &fields.handle, "handle")?,
            required(root, &fields.follower_count, "follower_count")?,
            required(root, &fields.following_count, "following_count")?,
        );

        log::debug!("Extracted profile {}", profile.handle());
        Ok(profile)
    }

    /// Read every post container under `root`, in document order.
    ///
    /// A container missing its body or timestamp aborts the call; missing
    /// counters become `"0"`.
    pub fn extract_posts(&self, root: ElementRef<'_>) -> Result<Vec<Post>> {
        let containers = locator::locate_all(root, &self.layout.post_container);
        log::debug!("Found {} post containers", containers.len());

        containers
            .into_iter()
            .enumerate()
            .map(|(i, container)| {
                self.extract_post(container).inspect_err(|e| {
                    log::debug!("Post {} failed: {}", i, e);
                })
            })
            .collect()
    }

    fn extract_post(&self, container: ElementRef<'_>) -> Result<Post> {
        let fields = &self.layout.post;

        let body = required(container, &fields.body, "body")?;
        let posted_at = required(container, &fields.posted_at, "posted_at")?;
        validate_timestamp(&posted_at)?;

        Ok(Post::new(
            body,
            posted_at,
            optional_count(container, &fields.reply_count),
            optional_count(container, &fields.repost_count),
            optional_count(container, &fields.like_count),
        ))
    }

    /// Profile first, then posts. A profile failure means no posts are read.
    pub fn extract(&self, root: ElementRef<'_>) -> Result<ExtractionResult> {
        let profile = self.extract_profile(root)?;
        let posts = self.extract_posts(root)?;
        log::info!("Extracted {} posts for {}", posts.len(), profile.handle());
        Ok(ExtractionResult::new(profile, posts))
    }
}

fn required(scope: ElementRef<'_>, path: &FieldPath, field: &str) -> Result<String> {
    locator::read(scope, path).ok_or_else(|| ScrapeError::missing(field))
}

fn optional_count(scope: ElementRef<'_>, path: &FieldPath) -> String {
    coerce_count(locator::read(scope, path).as_deref())
}
