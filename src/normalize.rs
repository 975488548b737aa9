//! Post-processing of raw extracted strings

use crate::error::{Result, ScrapeError};
use chrono::NaiveDateTime;

/// Default column width used to align the engagement counters
pub const DEFAULT_PAD_WIDTH: usize = 8;

/// Replace an absent or empty counter with `"0"`.
///
/// Non-empty values pass through verbatim; counters such as `"1.2K"` are not
/// reformatted.
pub fn coerce_count(raw: Option<&str>) -> String {
    match raw {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => "0".to_string(),
    }
}

/// Check that `iso` starts with a real `YYYY-MM-DDTHH:MM:SS` date and time.
///
/// Anything after the seconds (fraction, `Z`, offset) is not inspected.
pub fn validate_timestamp(iso: &str) -> Result<()> {
    let head = iso
        .get(..19)
        .ok_or_else(|| ScrapeError::MalformedTimestamp(iso.to_string()))?;

    NaiveDateTime::parse_from_str(head, "%Y-%m-%dT%H:%M:%S")
        .map(|_| ())
        .map_err(|e| {
            log::debug!("Rejected timestamp {:?}: {}", iso, e);
            ScrapeError::MalformedTimestamp(iso.to_string())
        })
}

/// Format an ISO-8601 timestamp as `Time: HH:MM:SS - YYYY MM DD`
pub fn format_timestamp(iso: &str) -> Result<String> {
    validate_timestamp(iso)?;

    // A parsed head is all ASCII digits and separators
    let time = &iso[11..19];
    let date = iso[0..10].replace('-', " ");
    Ok(format!("Time: {} - {}", time, date))
}

/// Spaces needed to extend `value` to `target_width` columns, never negative
pub fn pad_width(value: &str, target_width: usize) -> String {
    " ".repeat(target_width.saturating_sub(value.chars().count()))
}

/// [`pad_width`] with the default counter width
pub fn pad(value: &str) -> String {
    pad_width(value, DEFAULT_PAD_WIDTH)
}
