//! Shared TUI components

pub mod empty_state;
pub mod footer;
pub mod header;
pub mod pagination_bar;
pub mod record_table;
pub mod search_box;
pub mod shortcuts;
pub mod toast;

pub use empty_state::{EmptyState, EmptyStateKind, EmptyStateProps};
pub use footer::{
    Footer, FooterProps, Shortcut, edit_shortcuts, empty_shortcuts, search_shortcuts,
    table_shortcuts,
};
pub use header::{Header, HeaderProps};
pub use pagination_bar::{PaginationBar, PaginationBarProps};
pub use record_table::{RecordRow, RecordRowProps, RecordTable, RecordTableProps};
pub use search_box::{SearchBox, SearchBoxProps};
pub use toast::{TOAST_TTL, Toast, ToastLevel, render_toast};
