use std::path::PathBuf;
use std::time::Duration;

/// Hosted Chrome endpoint used when only an API token is supplied
pub const BROWSERLESS_ENDPOINT: &str = "wss://chrome.browserless.io";

/// Default time to wait for the page to show its first post container
pub const DEFAULT_READY_TIMEOUT: Duration = Duration::from_secs(30);

/// Options for launching a local Chrome/Chromium
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    /// Run without a visible window
    pub headless: bool,

    pub window_width: u32,
    pub window_height: u32,

    /// Custom browser executable
    pub chrome_path: Option<PathBuf>,

    /// Persistent profile directory
    pub user_data_dir: Option<PathBuf>,

    pub sandbox: bool,

    /// How long to wait for the readiness selector after navigation
    pub ready_timeout: Duration,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            headless: true,
            window_width: 1280,
            window_height: 2000,
            chrome_path: None,
            user_data_dir: None,
            sandbox: true,
            ready_timeout: DEFAULT_READY_TIMEOUT,
        }
    }
}

impl LaunchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    pub fn window_size(mut self, width: u32, height: u32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    pub fn chrome_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.chrome_path = Some(path.into());
        self
    }

    pub fn user_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.user_data_dir = Some(dir.into());
        self
    }

    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    pub fn ready_timeout(mut self, timeout: Duration) -> Self {
        self.ready_timeout = timeout;
        self
    }
}

/// Options for attaching to an already running browser over WebSocket
#[derive(Debug, Clone)]
pub struct ConnectionOptions {
    /// DevTools WebSocket URL
    pub ws_url: String,

    /// Default timeout for tab operations, in milliseconds
    pub timeout: u64,

    /// How long to wait for the readiness selector after navigation
    pub ready_timeout: Duration,
}

impl ConnectionOptions {
    pub fn new(ws_url: impl Into<String>) -> Self {
        Self {
            ws_url: ws_url.into(),
            timeout: 30_000,
            ready_timeout: DEFAULT_READY_TIMEOUT,
        }
    }

    /// Connect to the hosted browserless.io service with an explicit API token
    pub fn browserless(token: &str) -> Self {
        Self::new(format!("{}?token={}", BROWSERLESS_ENDPOINT, token))
    }

    pub fn timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout = timeout_ms;
        self
    }

    pub fn ready_timeout(mut self, timeout: Duration) -> Self {
        self.ready_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_options_builder() {
        let opts = LaunchOptions::new()
            .headless(false)
            .window_size(800, 600)
            .ready_timeout(Duration::from_secs(5));

        assert!(!opts.headless);
        assert_eq!(opts.window_width, 800);
        assert_eq!(opts.window_height, 600);
        assert_eq!(opts.ready_timeout, Duration::from_secs(5));
        assert!(opts.chrome_path.is_none());
    }

    #[test]
    fn test_connection_options() {
        let opts = ConnectionOptions::new("ws://localhost:9222").timeout(5000);

        assert_eq!(opts.ws_url, "ws://localhost:9222");
        assert_eq!(opts.timeout, 5000);
        assert_eq!(opts.ready_timeout, DEFAULT_READY_TIMEOUT);
    }

    #[test]
    fn test_browserless_endpoint() {
        let opts = ConnectionOptions::browserless("abc123");
        assert_eq!(opts.ws_url, "wss://chrome.browserless.io?token=abc123");
    }
}
