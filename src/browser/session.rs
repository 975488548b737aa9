use crate::{browser::config::{ConnectionOptions, LaunchOptions},
            dom::{DomTree, Selector},
            error::{Result, ScrapeError},
            extract::{ExtractionResult, RecordExtractor}};
use headless_chrome::{Browser, Tab};
use std::{ffi::OsStr, sync::Arc, time::Duration};

/// Acquires document snapshots from a Chrome/Chromium instance.
///
/// Each session owns one tab. Extraction never touches the browser; it only
/// sees the [`DomTree`] returned by [`ExtractionSession::snapshot`].
pub struct ExtractionSession {
    /// Kept alive for the lifetime of the tab
    _browser: Browser,

    tab: Arc<Tab>,

    ready_timeout: Duration,
}

impl ExtractionSession {
    /// Launch a new browser instance with the given options
    pub fn launch(options: LaunchOptions) -> Result<Self> {
        let mut launch_opts = headless_chrome::LaunchOptions::default();

        // Profile pages refuse to render for obviously automated browsers
        launch_opts.ignore_default_args.push(OsStr::new("--enable-automation"));
        launch_opts.args.push(OsStr::new("--disable-blink-features=AutomationControlled"));

        // Default idle timeout is 30 seconds, shorter than a slow profile load
        launch_opts.idle_browser_timeout = Duration::from_secs(10 * 60);

        launch_opts.headless = options.headless;
        launch_opts.window_size = Some((options.window_width, options.window_height));
        launch_opts.sandbox = options.sandbox;

        if let Some(path) = options.chrome_path {
            launch_opts.path = Some(path);
        }

        if let Some(dir) = options.user_data_dir {
            launch_opts.user_data_dir = Some(dir);
        }

        log::info!("Launching browser (headless: {})", options.headless);
        let browser = Browser::new(launch_opts).map_err(|e| ScrapeError::LaunchFailed(e.to_string()))?;

        let tab = browser
            .new_tab()
            .map_err(|e| ScrapeError::LaunchFailed(format!("Failed to create tab: {}", e)))?;

        Ok(Self { _browser: browser, tab, ready_timeout: options.ready_timeout })
    }

    /// Connect to an existing browser instance via WebSocket
    pub fn connect(options: ConnectionOptions) -> Result<Self> {
        // The URL may carry an API token; log only the host part
        let host = options.ws_url.split('?').next().unwrap_or_default();
        log::info!("Connecting to browser at {}", host);

        let browser =
            Browser::connect(options.ws_url.clone()).map_err(|e| ScrapeError::ConnectionFailed(e.to_string()))?;

        let tab = browser
            .new_tab()
            .map_err(|e| ScrapeError::ConnectionFailed(format!("Failed to create tab: {}", e)))?;
        tab.set_default_timeout(Duration::from_millis(options.timeout));

        Ok(Self { _browser: browser, tab, ready_timeout: options.ready_timeout })
    }

    /// Navigate to a URL and wait for the load to finish
    pub fn navigate(&self, url: &str) -> Result<()> {
        log::info!("Navigating to {}", url);
        self.tab
            .navigate_to(url)
            .map_err(|e| ScrapeError::NavigationFailed(format!("Failed to navigate to {}: {}", url, e)))?;

        self.tab
            .wait_until_navigated()
            .map_err(|e| ScrapeError::NavigationFailed(format!("Navigation timeout: {}", e)))?;

        Ok(())
    }

    /// Block until an element matching `selector` is rendered
    pub fn wait_until_ready(&self, selector: &Selector) -> Result<()> {
        log::debug!("Waiting up to {:?} for '{}'", self.ready_timeout, selector);
        self.tab
            .wait_for_element_with_custom_timeout(selector.as_str(), self.ready_timeout)
            .map_err(|e| ScrapeError::Timeout(format!("'{}' never appeared: {}", selector, e)))?;
        Ok(())
    }

    /// Load `url`, wait for `ready`, then capture the rendered document
    pub fn snapshot(&self, url: &str, ready: &Selector) -> Result<DomTree> {
        self.navigate(url)?;
        self.wait_until_ready(ready)?;
        DomTree::from_tab(&self.tab)
    }

    /// One extraction run over a fresh snapshot of `url`
    pub fn extract(&self, url: &str, extractor: &RecordExtractor) -> Result<ExtractionResult> {
        let tree = self.snapshot(url, &extractor.layout().post_container)?;
        extractor.extract(tree.root())
    }

    fn close_tab(&self) {
        if let Err(e) = self.tab.close(false) {
            log::debug!("Ignoring tab close failure: {}", e);
        }
    }
}

/// The tab is closed whether or not a snapshot succeeded. A connected remote
/// browser outlives the session, so its tab has to go explicitly.
impl Drop for ExtractionSession {
    fn drop(&mut self) {
        self.close_tab();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::PageLayout;

    // Integration tests (require Chrome to be installed)
    #[test]
    #[ignore] // Ignore by default, run with: cargo test -- --ignored
    fn test_launch_browser() {
        let result = ExtractionSession::launch(LaunchOptions::new().headless(true));
        assert!(result.is_ok());
    }

    #[test]
    #[ignore]
    fn test_ready_timeout() {
        let session = ExtractionSession::launch(
            LaunchOptions::new().headless(true).ready_timeout(Duration::from_millis(500)),
        )
        .expect("Failed to launch browser");

        let result = session.snapshot("data:text/html,<p>no posts</p>", &PageLayout::twitter().unwrap().post_container);
        assert!(matches!(result, Err(ScrapeError::Timeout(_))));
    }

    #[test]
    #[ignore]
    fn test_failed_snapshot_still_closes_tab() {
        let session = ExtractionSession::launch(
            LaunchOptions::new().headless(true).ready_timeout(Duration::from_millis(500)),
        )
        .expect("Failed to launch browser");
        let tabs = Arc::clone(session._browser.get_tabs());
        let opened = tabs.lock().unwrap().len();

        let ready = PageLayout::twitter().unwrap().post_container;
        assert!(session.snapshot("data:text/html,<p>no posts</p>", &ready).is_err());

        session.close_tab();
        std::thread::sleep(Duration::from_millis(500));
        assert!(tabs.lock().unwrap().len() < opened);
    }
}
