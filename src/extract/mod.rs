//! Record extraction
//!
//! - PageLayout: the field paths for one site
//! - RecordExtractor: composes field lookups into Profile and Post records
//! - records: the Profile, Post and ExtractionResult types

pub mod extractor;
pub mod layout;
pub mod records;

pub use extractor::RecordExtractor;
pub use layout::{PageLayout, PostFields, ProfileFields};
pub use records::{ExtractionResult, Post, Profile};
