//! # profile-scrape
//!
//! Extracts profile and post records from a rendered social profile page and
//! renders them as fixed-width text.
//!
//! ## Pipeline
//!
//! 1. An [`ExtractionSession`] loads the page in Chrome (via CDP) and captures a
//!    read-only [`DomTree`] snapshot once the first post container is rendered.
//! 2. A [`RecordExtractor`] reads the fields described by a [`PageLayout`] from
//!    the snapshot, producing an [`ExtractionResult`].
//! 3. [`render`](render::render) turns the result into display blocks.
//!
//! Steps 2 and 3 are pure and work on any tree, including one loaded from a
//! saved HTML snapshot:
//!
//! ```rust
//! use profile_scrape::{DomTree, RecordExtractor};
//!
//! # fn main() -> profile_scrape::Result<()> {
//! let tree = DomTree::parse("<html><body><main></main></body></html>");
//! let posts = RecordExtractor::twitter()?.extract_posts(tree.root())?;
//! assert!(posts.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! ### Live extraction
//!
//! ```rust,no_run
//! use profile_scrape::{ExtractionSession, LaunchOptions, RecordExtractor};
//!
//! # fn main() -> profile_scrape::Result<()> {
//! let session = ExtractionSession::launch(LaunchOptions::default())?;
//! let result = session.extract("https://x.com/ada", &RecordExtractor::twitter()?)?;
//!
//! for block in profile_scrape::render::render(&result)? {
//!     println!("{}\n", block);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`browser`]: Browser launch/connect and page snapshots
//! - [`dom`]: Parsed page snapshots, selectors and the field locator
//! - [`extract`]: Page layouts, records and the record extractor
//! - [`normalize`]: Counter coercion, timestamp formatting, padding
//! - [`render`]: Fixed-width text output
//! - [`error`]: Error types and result aliases

pub mod browser;
pub mod dom;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod render;

pub use browser::{ConnectionOptions, ExtractionSession, LaunchOptions};
pub use dom::{DomTree, Extract, FieldPath, Selector};
pub use error::{Result, ScrapeError};
pub use extract::{ExtractionResult, PageLayout, Post, Profile, RecordExtractor};
