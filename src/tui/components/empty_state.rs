//! Empty state component
//!
//! Displays a message in place of the table while the feed loads, when it
//! failed or came back empty, and when a search matches nothing.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Type of empty state to display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyStateKind {
    /// Waiting for the feed
    #[default]
    Loading,
    /// The feed returned no records (or all were deleted)
    NoRecords,
    /// No records match the search
    NoSearchResults,
    /// The feed could not be read
    FeedError,
}

/// Props for the EmptyState component
#[derive(Default, Props)]
pub struct EmptyStateProps {
    /// The kind of empty state to display
    pub kind: EmptyStateKind,
    /// Search query (NoSearchResults) or error text (FeedError)
    pub detail: Option<String>,
}

/// Empty state display with helpful message
#[component]
pub fn EmptyState(props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let (icon, title, message, hint) = match props.kind {
        EmptyStateKind::Loading => ("~", "Loading", "Fetching members...", ""),
        EmptyStateKind::NoRecords => (
            "i",
            "No Members",
            "There are no members to show.",
            "Press q to quit.",
        ),
        EmptyStateKind::NoSearchResults => (
            "?",
            "No Results",
            "No members match your search.",
            "Try a different search term, or press / then Esc to clear.",
        ),
        EmptyStateKind::FeedError => (
            "!",
            "Could Not Load Members",
            "The member feed could not be read.",
            "Check the feed URL and your connection, then restart.",
        ),
    };

    let is_error = props.kind == EmptyStateKind::FeedError;
    let detail = props.detail.clone().filter(|d| !d.is_empty()).map(|d| {
        if props.kind == EmptyStateKind::NoSearchResults {
            format!("Search: \"{}\"", d)
        } else {
            d
        }
    });

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: 2,
        ) {
            View(
                width: 5,
                height: 3,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: if is_error { theme.danger } else { theme.border },
                margin_bottom: 1,
            ) {
                Text(
                    content: icon,
                    color: if is_error { theme.danger } else { theme.text_dimmed },
                    weight: Weight::Bold,
                )
            }

            Text(
                content: title,
                color: theme.text,
                weight: Weight::Bold,
            )

            View(margin_top: 1, max_width: 60) {
                Text(
                    content: message,
                    color: theme.text_dimmed,
                )
            }

            #(detail.map(|d| element! {
                View(margin_top: 1, max_width: 80) {
                    Text(
                        content: d,
                        color: if is_error { theme.danger } else { theme.search_match },
                    )
                }
            }))

            #(if !hint.is_empty() {
                Some(element! {
                    View(margin_top: 2) {
                        Text(
                            content: hint,
                            color: theme.text_dimmed,
                        )
                    }
                })
            } else {
                None
            })
        }
    }
}
