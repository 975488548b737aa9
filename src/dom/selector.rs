//! Declarative field paths
//!
//! A [`Selector`] is a CSS selector compiled by `scraper`, so it accepts the
//! same grammar the browser does (child combinators, `:not(..)`, selector
//! lists, pseudo-classes). The source text is kept alongside the compiled form
//! for display, serialization and the in-browser readiness wait.
//!
//! A [`FieldPath`] pairs a selector with an [`Extract`] rule that says which
//! value of the located node is the field.

use crate::error::{Result, ScrapeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A compiled CSS selector
#[derive(Debug, Clone, Serialize)]
#[serde(into = "String")]
pub struct Selector {
    source: String,
    compiled: scraper::Selector,
}

impl Selector {
    /// Compile a selector, failing with [`ScrapeError::InvalidSelector`]
    pub fn parse(source: &str) -> Result<Self> {
        let source = source.trim();
        let compiled = scraper::Selector::parse(source).map_err(|e| ScrapeError::InvalidSelector {
            selector: source.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { source: source.to_string(), compiled })
    }

    /// The selector as written
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub(crate) fn compiled(&self) -> &scraper::Selector {
        &self.compiled
    }
}

impl PartialEq for Selector {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Selector {}

impl FromStr for Selector {
    type Err = ScrapeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Selector> for String {
    fn from(selector: Selector) -> Self {
        selector.source
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Which value of a located node is the field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Extract {
    /// The node's text content
    #[default]
    Text,
    /// The value of the named attribute
    Attribute(String),
}

/// Declarative description of where a field lives in a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldPath {
    pub selector: Selector,
    pub extract: Extract,
}

impl FieldPath {
    /// Field read from the text of the first node matching `selector`
    pub fn text(selector: &str) -> Result<Self> {
        Ok(Self {
            selector: Selector::parse(selector)?,
            extract: Extract::Text,
        })
    }

    /// Field read from an attribute of the first node matching `selector`
    pub fn attribute(selector: &str, attribute: impl Into<String>) -> Result<Self> {
        Ok(Self {
            selector: Selector::parse(selector)?,
            extract: Extract::Attribute(attribute.into()),
        })
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.extract {
            Extract::Text => write!(f, "{} (text)", self.selector),
            Extract::Attribute(name) => write!(f, "{} @{}", self.selector, name),
        }
    }
}
