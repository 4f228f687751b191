use crate::error::ConfigError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// CSS selector of the element that signals the sets table has started rendering
pub const MARKER_SELECTOR: &str = "#tableSets";

/// Pause after the marker appears, in milliseconds
pub const SETTLE_DELAY_MS: u64 = 5_000;

/// Upper bound on the marker wait, in seconds
pub const DEFAULT_MAX_WAIT_SECS: u64 = 30;

/// Interval between marker lookups, in milliseconds
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 250;

/// Origin prepended to every extracted set link
pub const BASE_ORIGIN: &str = "https://www.psacard.com";

/// Substring an href must contain to count as a set page link
pub const SET_LINK_MARKER: &str = "poke-mon";

pub const DEFAULT_PAGE_FILE: &str = "page.html";
pub const DEFAULT_LINKS_FILE: &str = "sets_links.json";

pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:4444";

/// Number of characters of captured markup echoed to the debug log
pub const DEFAULT_PREVIEW_CHARS: usize = 1000;

/// Launch flags passed to the browser through the WebDriver capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserFlags {
    /// Disable the OS-level sandbox (needed inside containers)
    #[serde(default = "default_no_sandbox")]
    pub no_sandbox: bool,

    /// Run without a visible window
    #[serde(default)]
    pub headless: bool,

    /// Disable GPU acceleration
    #[serde(default)]
    pub disable_gpu: bool,
}

impl Default for BrowserFlags {
    fn default() -> Self {
        Self {
            no_sandbox: default_no_sandbox(),
            headless: false,
            disable_gpu: false,
        }
    }
}

impl BrowserFlags {
    /// Command line arguments for the browser process
    pub fn args(&self) -> Vec<&'static str> {
        let mut args = Vec::new();
        if self.no_sandbox {
            args.push("--no-sandbox");
        }
        if self.headless {
            args.push("--headless");
        }
        if self.disable_gpu {
            args.push("--disable-gpu");
        }
        args
    }
}

/// Configuration for capturing a rendered page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotConfig {
    /// URL of the WebDriver server
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Selector that must be present before the page is captured
    #[serde(default = "default_marker_selector")]
    pub marker_selector: String,

    /// Maximum time to wait for the marker, in seconds
    #[serde(default = "default_max_wait_secs")]
    pub max_wait_secs: u64,

    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Fixed pause after the marker shows up, in milliseconds
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,

    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,

    #[serde(default)]
    pub flags: BrowserFlags,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            webdriver_url: default_webdriver_url(),
            marker_selector: default_marker_selector(),
            max_wait_secs: default_max_wait_secs(),
            poll_interval_ms: default_poll_interval_ms(),
            settle_delay_ms: default_settle_delay_ms(),
            preview_chars: default_preview_chars(),
            flags: BrowserFlags::default(),
        }
    }
}

impl SnapshotConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let config: Self = load_json(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects a zero wait bound or poll interval, which would turn the
    /// marker wait into an instant failure or a busy loop
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_wait_secs == 0 {
            return Err(ConfigError::NotPositive("max_wait_secs"));
        }
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::NotPositive("poll_interval_ms"));
        }
        Ok(())
    }

    /// Override the marker wait bound
    pub fn with_max_wait(mut self, max_wait_secs: u64) -> Self {
        self.max_wait_secs = max_wait_secs;
        self
    }

    pub fn max_wait(&self) -> Duration {
        Duration::from_secs(self.max_wait_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

/// Configuration for pulling set links out of a saved page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Origin prepended to each matching relative href
    #[serde(default = "default_base_origin")]
    pub base_origin: String,

    /// Substring an href must contain to be kept
    #[serde(default = "default_link_marker")]
    pub link_marker: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            base_origin: default_base_origin(),
            link_marker: default_link_marker(),
        }
    }
}

impl ExtractConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        load_json(path)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        Ok(serde_json::from_str(json)?)
    }
}

fn load_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T, Box<dyn Error>> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let config: T = serde_json::from_str(&contents)?;
    Ok(config)
}

fn default_no_sandbox() -> bool {
    true
}

fn default_webdriver_url() -> String {
    DEFAULT_WEBDRIVER_URL.to_string()
}

fn default_marker_selector() -> String {
    MARKER_SELECTOR.to_string()
}

fn default_max_wait_secs() -> u64 {
    DEFAULT_MAX_WAIT_SECS
}

fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

fn default_settle_delay_ms() -> u64 {
    SETTLE_DELAY_MS
}

fn default_preview_chars() -> usize {
    DEFAULT_PREVIEW_CHARS
}

fn default_base_origin() -> String {
    BASE_ORIGIN.to_string()
}

fn default_link_marker() -> String {
    SET_LINK_MARKER.to_string()
}
