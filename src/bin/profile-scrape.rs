//! profile-scrape CLI
//!
//! Loads a profile page (or a saved DOM snapshot), extracts the profile and its
//! posts, and prints them as text or JSON.

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use profile_scrape::browser::{normalize_profile_url, url::DEFAULT_PROFILE_BASE};
use profile_scrape::render::write_report;
use profile_scrape::{ConnectionOptions, DomTree, ExtractionSession, LaunchOptions, PageLayout, RecordExtractor};
use std::io::{Write, stdout};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Fixed-width report
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Parser)]
#[command(name = "profile-scrape")]
#[command(version)]
#[command(about = "Extract a profile and its posts from a rendered profile page", long_about = None)]
struct Cli {
    /// Profile URL or @handle (not needed with --snapshot)
    url: Option<String>,

    /// WebSocket endpoint of a running browser
    #[arg(long, value_name = "URL")]
    ws_endpoint: Option<String>,

    /// browserless.io API token; connects to the hosted browser
    #[arg(long, env = "BROWSERLESS_API_KEY", hide_env_values = true, value_name = "TOKEN")]
    browserless_token: Option<String>,

    /// Launch a local browser in headed mode (default: headless)
    #[arg(long, short = 'H')]
    headed: bool,

    /// Path to custom browser executable
    #[arg(long, value_name = "PATH")]
    chrome_path: Option<PathBuf>,

    /// How long to wait for the first post to render, in milliseconds
    #[arg(long, default_value = "30000", value_name = "MS")]
    wait_timeout_ms: u64,

    /// Base URL used to expand @handle
    #[arg(long, default_value = DEFAULT_PROFILE_BASE, value_name = "URL")]
    profile_base: String,

    /// JSON file with custom field paths (default: built-in Twitter layout)
    #[arg(long, value_name = "FILE")]
    layout: Option<PathBuf>,

    /// Read a saved HTML snapshot instead of loading a page; browser options are ignored
    #[arg(long, value_name = "FILE")]
    snapshot: Option<PathBuf>,

    /// Save the captured page HTML to this file
    #[arg(long, value_name = "FILE")]
    dump_snapshot: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "text")]
    format: Format,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let layout = match &cli.layout {
        Some(path) => PageLayout::load(path).with_context(|| format!("Failed to load layout {}", path.display()))?,
        None => PageLayout::twitter()?,
    };
    let extractor = RecordExtractor::new(layout);

    let tree = acquire(&cli, &extractor)?;

    if let Some(path) = &cli.dump_snapshot {
        tree.save(path)
            .with_context(|| format!("Failed to write snapshot {}", path.display()))?;
        log::info!("Snapshot written to {}", path.display());
    }

    let result = extractor.extract(tree.root()).context("Extraction failed")?;

    let mut out = stdout().lock();
    match cli.format {
        Format::Text => write_report(&result, &mut out)?,
        Format::Json => writeln!(out, "{}", result.to_json()?)?,
    }

    Ok(())
}

fn acquire(cli: &Cli, extractor: &RecordExtractor) -> anyhow::Result<DomTree> {
    if let Some(path) = &cli.snapshot {
        return DomTree::load(path).with_context(|| format!("Failed to read snapshot {}", path.display()));
    }

    let Some(url) = &cli.url else {
        bail!("A profile URL is required unless --snapshot is given");
    };
    let url = normalize_profile_url(url, &cli.profile_base);
    eprintln!("Scraping Profile of: {}\n", url);

    let ready_timeout = Duration::from_millis(cli.wait_timeout_ms);
    let session = if let Some(endpoint) = &cli.ws_endpoint {
        ExtractionSession::connect(ConnectionOptions::new(endpoint.as_str()).ready_timeout(ready_timeout))?
    } else if let Some(token) = &cli.browserless_token {
        ExtractionSession::connect(ConnectionOptions::browserless(token).ready_timeout(ready_timeout))?
    } else {
        let mut options = LaunchOptions::new().headless(!cli.headed).ready_timeout(ready_timeout);
        if let Some(path) = &cli.chrome_path {
            options = options.chrome_path(path);
        }
        ExtractionSession::launch(options)?
    };

    // The session closes its tab on drop, including when the snapshot fails
    Ok(session.snapshot(&url, &extractor.layout().post_container)?)
}
