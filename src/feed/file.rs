use std::path::PathBuf;

use crate::error::{Result, RosterError};
use crate::types::Record;

use super::{RecordFeed, parse_records};

/// Feed read from a local JSON file.
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl RecordFeed for FileFeed {
    async fn fetch(&self) -> Result<Vec<Record>> {
        let body = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            RosterError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read feed at {}: {}", self.path.display(), e),
            ))
        })?;
        parse_records(&body)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
