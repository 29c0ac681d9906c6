pub mod commands;
pub mod config;
pub mod error;
pub mod feed;
pub mod logging;
pub mod table;
pub mod tui;
pub mod types;

pub use config::Config;
pub use error::{Result, RosterError};
pub use feed::{FeedSource, FileFeed, HttpFeed, RecordFeed, parse_records};
pub use table::{TableAction, TableState, compute_view_model, reduce_table_state};
pub use types::{DraftField, Record, RecordId};
