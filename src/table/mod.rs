//! Table view controller
//!
//! Owns the record set and derives the visible page on every change:
//! records -> [`filter`] -> [`paginate`] -> rendered rows, with
//! [`selection`] and [`edit`] layered on top. [`model`] ties the stages
//! together as a reducer over [`TableState`].

pub mod edit;
pub mod filter;
pub mod model;
pub mod paginate;
pub mod selection;

pub use edit::{Draft, EditSession};
pub use filter::{contains_case_insensitive, filter_records, record_matches};
pub use model::{
    Focus, LoadState, RowViewModel, TableAction, TableState, TableViewModel, compute_view_model,
    key_to_action, reduce_table_state,
};
pub use paginate::{DEFAULT_PAGE_SIZE, clamp_page, page_count, paginate};
pub use selection::Selection;
