//! Record feed collaborator
//!
//! The table is populated exactly once at startup from a JSON array of
//! records. The array is normally served over HTTP; a local file can stand
//! in for it (offline use, tests).

mod file;
mod http;

pub use file::FileFeed;
pub use http::HttpFeed;

use std::path::PathBuf;
use std::time::Duration;

use crate::config::Config;
use crate::error::Result;
use crate::types::Record;

/// Common interface for record feeds
pub trait RecordFeed: Send + Sync {
    /// Read the full record list
    fn fetch(&self) -> impl std::future::Future<Output = Result<Vec<Record>>> + Send;

    /// Human-readable location, for logs and the header bar
    fn describe(&self) -> String;
}

/// Where to read records from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    Url(String),
    File(PathBuf),
}

impl Default for FeedSource {
    fn default() -> Self {
        FeedSource::Url(crate::config::DEFAULT_FEED_URL.to_string())
    }
}

impl FeedSource {
    /// Pick the source from CLI overrides, falling back to the configured URL.
    pub fn resolve(config: &Config, url: Option<String>, file: Option<PathBuf>) -> Self {
        match (file, url) {
            (Some(path), _) => FeedSource::File(path),
            (None, Some(url)) => FeedSource::Url(url),
            (None, None) => FeedSource::Url(config.feed_url.clone()),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            FeedSource::Url(url) => url.clone(),
            FeedSource::File(path) => path.display().to_string(),
        }
    }

    /// Fetch records from this source.
    pub async fn load(&self, timeout: Duration) -> Result<Vec<Record>> {
        let records = match self {
            FeedSource::Url(url) => HttpFeed::new(url, timeout)?.fetch().await,
            FeedSource::File(path) => FileFeed::new(path.clone()).fetch().await,
        };
        match &records {
            Ok(records) => {
                tracing::info!(source = %self.describe(), count = records.len(), "feed loaded")
            }
            Err(e) => tracing::warn!(source = %self.describe(), "feed failed: {e}"),
        }
        records
    }
}

/// Decode a feed body: a JSON array of records.
pub fn parse_records(body: &str) -> Result<Vec<Record>> {
    let records: Vec<Record> = serde_json::from_str(body)?;
    Ok(records)
}
