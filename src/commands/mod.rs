//! Command implementations behind the CLI

mod config;
mod ls;
mod view;

pub use config::{cmd_config_path, cmd_config_show};
pub use ls::{LsOptions, cmd_ls};
pub use view::{ViewOptions, cmd_view};

use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::feed::FeedSource;

/// Feed overrides shared by `view` and `ls`
#[derive(Debug, Clone, Default)]
pub struct SourceOptions {
    /// Feed URL, replacing the configured one
    pub url: Option<String>,
    /// Local JSON file, taking precedence over any URL
    pub file: Option<PathBuf>,
    /// Rows per page, replacing the configured size
    pub page_size: Option<usize>,
}

impl SourceOptions {
    /// Load config and apply the CLI overrides on top of it.
    pub fn resolve(self) -> Result<(Config, FeedSource)> {
        let mut config = Config::load()?;
        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
        if let Some(url) = &self.url {
            crate::config::parse_feed_url(url)?;
        }
        config.validate()?;
        let source = FeedSource::resolve(&config, self.url, self.file);
        Ok((config, source))
    }
}

/// Print a value as pretty JSON
pub fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
