//! Document snapshots and field lookup
//!
//! This module provides the read-only view of a rendered page that extraction
//! works against. It includes:
//! - DomTree: A parsed snapshot of a whole document
//! - Selector / FieldPath: Declarative descriptions of where a field lives
//! - locator: The single place that decides whether a field is present

pub mod locator;
pub mod selector;
pub mod tree;

pub use locator::{locate, locate_all, read};
pub use selector::{Extract, FieldPath, Selector};
pub use tree::DomTree;
