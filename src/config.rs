//! Top-level application configuration.
//!
//! Configuration is stored in `config.yaml` under the platform config
//! directory (or the file named by `ROSTER_CONFIG`) and includes:
//! - The record feed URL
//! - Rows per page
//! - HTTP request timeout

use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};
use crate::table::DEFAULT_PAGE_SIZE;

/// Feed served by the original dashboard.
pub const DEFAULT_FEED_URL: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

/// Environment variable naming an alternate config file
pub const CONFIG_ENV: &str = "ROSTER_CONFIG";

/// Environment variable overriding `feed_url`
pub const FEED_URL_ENV: &str = "ROSTER_FEED_URL";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Location of the JSON record feed
    #[serde(default = "default_feed_url")]
    pub feed_url: String,

    /// Rows per page (default: 10)
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Feed request timeout in seconds (default: 30)
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_feed_url() -> String {
    DEFAULT_FEED_URL.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_url: default_feed_url(),
            page_size: default_page_size(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl Config {
    /// Path of the config file that `load` reads.
    pub fn config_path() -> PathBuf {
        if let Ok(path) = env::var(CONFIG_ENV)
            && !path.is_empty()
        {
            return PathBuf::from(path);
        }
        match directories::ProjectDirs::from("com", "roster", "roster") {
            Some(dirs) => dirs.config_dir().join("config.yaml"),
            None => PathBuf::from("roster.yaml"),
        }
    }

    /// Load configuration, falling back to defaults when no file exists.
    ///
    /// `ROSTER_FEED_URL` is applied on top of the file.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        let mut config = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| {
                RosterError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to read config at {}: {}", path.display(), e),
                ))
            })?;
            Self::from_yaml(&content)?
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Config::default()
        };

        if let Ok(url) = env::var(FEED_URL_ENV)
            && !url.is_empty()
        {
            config.feed_url = url;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse a YAML document. Missing keys take their defaults.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        let config: Config = serde_yaml_ng::from_str(content)
            .map_err(|e| RosterError::Config(format!("invalid config: {}", e)))?;
        Ok(config)
    }

    /// Check the values that cannot be fixed up silently.
    pub fn validate(&self) -> Result<()> {
        parse_feed_url(&self.feed_url)?;
        if self.page_size == 0 {
            return Err(RosterError::Config("page_size must be at least 1".into()));
        }
        if self.request_timeout_secs == 0 {
            return Err(RosterError::Config(
                "request_timeout_secs must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }
}

/// Parse and check a feed URL. Only http and https are accepted.
pub fn parse_feed_url(raw: &str) -> Result<url::Url> {
    let parsed =
        url::Url::parse(raw).map_err(|e| RosterError::InvalidUrl(raw.to_string(), e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(RosterError::InvalidUrl(
            raw.to_string(),
            format!("unsupported scheme '{}'", other),
        )),
    }
}
