/// Site used when a bare `@handle` is given instead of a URL
pub const DEFAULT_PROFILE_BASE: &str = "https://x.com";

/// Normalize a profile location typed by a user into a navigable URL.
///
/// `@handle` expands to `<base>/handle`; bare domains get `https://`.
pub fn normalize_profile_url(input: &str, base: &str) -> String {
    let trimmed = input.trim();

    if let Some(handle) = trimmed.strip_prefix('@') {
        return format!("{}/{}", base.trim_end_matches('/'), handle);
    }

    // Already has a protocol
    if trimmed.starts_with("http://")
        || trimmed.starts_with("https://")
        || trimmed.starts_with("file://")
        || trimmed.starts_with("data:")
        || trimmed.starts_with("about:")
    {
        return trimmed.to_string();
    }

    // localhost special case - use http by default
    if trimmed.starts_with("localhost") || trimmed.starts_with("127.0.0.1") {
        return format!("http://{}", trimmed);
    }

    format!("https://{}", trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_complete_urls() {
        assert_eq!(
            normalize_profile_url("https://twitter.com/ada", DEFAULT_PROFILE_BASE),
            "https://twitter.com/ada"
        );
        assert_eq!(normalize_profile_url("about:blank", DEFAULT_PROFILE_BASE), "about:blank");
        assert_eq!(
            normalize_profile_url("data:text/html,<article></article>", DEFAULT_PROFILE_BASE),
            "data:text/html,<article></article>"
        );
    }

    #[test]
    fn test_normalize_handle() {
        assert_eq!(normalize_profile_url("@ada", DEFAULT_PROFILE_BASE), "https://x.com/ada");
        assert_eq!(normalize_profile_url(" @ada ", "https://twitter.com/"), "https://twitter.com/ada");
    }

    #[test]
    fn test_normalize_missing_protocol() {
        assert_eq!(normalize_profile_url("x.com/ada", DEFAULT_PROFILE_BASE), "https://x.com/ada");
        assert_eq!(normalize_profile_url("localhost:3000/ada", DEFAULT_PROFILE_BASE), "http://localhost:3000/ada");
    }
}
