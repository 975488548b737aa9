//! Fixed-width text rendering of extraction results

use crate::error::Result;
use crate::extract::records::{ExtractionResult, Post, Profile};
use crate::normalize::{format_timestamp, pad, pad_width};
use std::io::Write;

/// Column at which profile values start
pub const LABEL_WIDTH: usize = 15;

pub const PROFILE_HEADER: &str = " --- User Details ---";
pub const POSTS_HEADER: &str = " --- Tweets ---";
pub const POST_SEPARATOR: &str = "----------";

/// Render the profile block followed by one block per post, in post order
pub fn render(result: &ExtractionResult) -> Result<Vec<String>> {
    let mut blocks = Vec::with_capacity(result.posts.len() + 1);
    blocks.push(render_profile(&result.profile));
    for post in &result.posts {
        blocks.push(render_post(post)?);
    }
    Ok(blocks)
}

fn labeled(label: &str, value: &str) -> String {
    format!("{}{}{}", label, pad_width(label, LABEL_WIDTH), value)
}

pub fn render_profile(profile: &Profile) -> String {
    [
        labeled("Profile Name:", profile.display_name()),
        labeled("Username:", profile.handle()),
        labeled("Followers:", profile.follower_count()),
        labeled("Following:", profile.following_count()),
    ]
    .join("\n")
}

pub fn render_post(post: &Post) -> Result<String> {
    let time = format_timestamp(post.posted_at())?;
    let counts = format!(
        "Replies: {}{}| Retweets: {}{}| Likes: {}",
        post.reply_count(),
        pad(post.reply_count()),
        post.repost_count(),
        pad(post.repost_count()),
        post.like_count(),
    );

    Ok(format!("> Tweet ({})\n\nMessage:\n{}\n\n{}", time, post.body(), counts))
}

/// Write the full report, section headers included, to `out`
pub fn write_report<W: Write>(result: &ExtractionResult, out: &mut W) -> Result<()> {
    let blocks = render(result)?;
    let mut blocks = blocks.iter();

    writeln!(out, "{}\n", PROFILE_HEADER)?;
    if let Some(profile) = blocks.next() {
        writeln!(out, "{}\n", profile)?;
    }

    writeln!(out, "{}\n", POSTS_HEADER)?;
    for post in blocks {
        writeln!(out, "{}\n", post)?;
        writeln!(out, "{}\n", POST_SEPARATOR)?;
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScrapeError;

    fn sample() -> ExtractionResult {
        ExtractionResult::new(
            Profile::new("Ada Lovelace", "@ada", "120", "45"),
            vec![
                Post::new("Hello world", "2023-04-15T09:30:00.000Z", "0", "3", "10"),
                Post::new("Second", "2023-04-16T10:00:00.000Z", "123456789", "1.2K", "0"),
            ],
        )
    }

    #[test]
    fn test_render_profile_alignment() {
        let block = render_profile(&sample().profile);

        assert_eq!(
            block,
            "Profile Name:  Ada Lovelace\nUsername:      @ada\nFollowers:     120\nFollowing:     45"
        );
    }

    #[test]
    fn test_render_post() {
        let block = render_post(&sample().posts[0]).unwrap();

        assert_eq!(
            block,
            "> Tweet (Time: 09:30:00 - 2023 04 15)\n\nMessage:\nHello world\n\nReplies: 0       | Retweets: 3       | Likes: 10"
        );
    }

    #[test]
    fn test_render_post_long_counter_not_padded() {
        let block = render_post(&sample().posts[1]).unwrap();
        assert!(block.ends_with("Replies: 123456789| Retweets: 1.2K    | Likes: 0"));
    }

    #[test]
    fn test_render_block_order() {
        let blocks = render(&sample()).unwrap();

        assert_eq!(blocks.len(), 3);
        assert!(blocks[0].contains("Ada Lovelace"));
        assert!(blocks[1].contains("Hello world"));
        assert!(blocks[2].contains("Second"));
    }

    #[test]
    fn test_render_without_posts() {
        let result = ExtractionResult::new(sample().profile, vec![]);
        assert_eq!(render(&result).unwrap().len(), 1);
    }

    #[test]
    fn test_render_malformed_timestamp() {
        let result = ExtractionResult::new(sample().profile, vec![Post::new("x", "soon", "0", "0", "0")]);

        let err = render(&result).unwrap_err();
        assert!(matches!(err, ScrapeError::MalformedTimestamp(_)));
    }

    #[test]
    fn test_write_report() {
        let mut out = Vec::new();
        write_report(&sample(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with(" --- User Details ---\n\nProfile Name:  Ada Lovelace\n"));
        assert!(text.contains("\n --- Tweets ---\n\n> Tweet (Time: 09:30:00 - 2023 04 15)"));
        assert_eq!(text.matches(POST_SEPARATOR).count(), 2);
        assert!(text.find("Hello world").unwrap() < text.find("Second").unwrap());
    }
}
