use iocraft::prelude::*;

use super::SourceOptions;
use crate::error::{Result, RosterError};
use crate::tui::RosterTable;

/// Options for `roster view`
pub type ViewOptions = SourceOptions;

/// Launch the interactive member table
pub async fn cmd_view(options: ViewOptions) -> Result<()> {
    let (config, source) = options.resolve()?;
    tracing::info!(source = %source.describe(), page_size = config.page_size, "starting view");

    element!(RosterTable(
        source: source,
        page_size: config.page_size,
        timeout_secs: config.request_timeout_secs,
    ))
    .fullscreen()
    .await
    .map_err(|e| RosterError::Tui(e.to_string()))
}
