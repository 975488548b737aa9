//! Document acquisition
//!
//! Launching or connecting to Chrome, loading the profile page and waiting for
//! it to render. The output is a [`crate::dom::DomTree`] snapshot.

pub mod config;
pub mod session;
pub mod url;

pub use config::{ConnectionOptions, LaunchOptions};
pub use session::ExtractionSession;
pub use url::normalize_profile_url;
