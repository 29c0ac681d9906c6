use std::time::Duration;

use reqwest::Client;

use crate::config::parse_feed_url;
use crate::error::{Result, RosterError};
use crate::types::Record;

use super::{RecordFeed, parse_records};

/// Feed served over HTTP(S). No auth, no retries.
pub struct HttpFeed {
    client: Client,
    url: url::Url,
}

impl HttpFeed {
    /// Create a feed client for `url` with the given total timeout.
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        let url = parse_feed_url(url)?;
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(30)))
            .build()?;
        Ok(Self { client, url })
    }
}

impl RecordFeed for HttpFeed {
    async fn fetch(&self) -> Result<Vec<Record>> {
        tracing::debug!(url = %self.url, "fetching record feed");
        let response = self.client.get(self.url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RosterError::FeedStatus(status.as_u16()));
        }

        let body = response.text().await?;
        parse_records(&body)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}
