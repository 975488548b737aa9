use thiserror::Error;

/// Errors that can occur while acquiring a page or extracting records from it
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// A structurally required field could not be located in the document
    #[error("Missing required field: {field}")]
    MissingRequiredField { field: String },

    /// A timestamp was located but is not shaped like ISO-8601
    #[error("Malformed timestamp: {0:?}")]
    MalformedTimestamp(String),

    /// A field path or selector string could not be parsed
    #[error("Invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// A layout file is not valid JSON or lacks a field
    #[error("Invalid layout: {0}")]
    LayoutParseFailed(String),

    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    #[error("Failed to connect to browser: {0}")]
    ConnectionFailed(String),

    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    #[error("Timed out: {0}")]
    Timeout(String),

    #[error("JavaScript evaluation failed: {0}")]
    EvaluationFailed(String),

    #[error("Failed to parse DOM: {0}")]
    DomParseFailed(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ScrapeError {
    pub(crate) fn missing(field: impl Into<String>) -> Self {
        ScrapeError::MissingRequiredField { field: field.into() }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ScrapeError>;
