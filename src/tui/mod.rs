//! Interactive terminal interface
//!
//! [`view`] hosts the [`RosterTable`] component; [`components`] holds the
//! pieces it is built from.

pub mod components;
pub mod handlers;
pub mod theme;
pub mod view;

pub use theme::Theme;
pub use view::{RosterTable, RosterTableProps};
