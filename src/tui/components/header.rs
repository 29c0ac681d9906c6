//! App header bar component
//!
//! Displays the application title, the feed location and record counts.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the Header component
#[derive(Default, Props)]
pub struct HeaderProps {
    /// Title (defaults to "Roster")
    pub title: Option<String>,

    /// Subtitle, usually the feed location
    pub subtitle: Option<String>,

    /// Records matching the search
    pub filtered_count: usize,

    /// Records overall
    pub total_count: usize,
}

/// Format the right-hand record counter
pub fn format_counts(filtered: usize, total: usize) -> String {
    if filtered == total {
        format!("{} members", total)
    } else {
        format!("{} of {} members", filtered, total)
    }
}

/// App header bar showing title and record counts
#[component]
pub fn Header(props: &HeaderProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let title = props.title.clone().unwrap_or_else(|| "Roster".to_string());
    let left_text = match &props.subtitle {
        Some(sub) => format!("{} - {}", title, sub),
        None => title,
    };

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.highlight,
        ) {
            View(overflow: Overflow::Hidden) {
                Text(
                    content: left_text,
                    color: theme.text,
                    weight: Weight::Bold,
                )
            }
            Text(
                content: format_counts(props.filtered_count, props.total_count),
                color: theme.text,
            )
        }
    }
}
