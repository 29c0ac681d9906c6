//! Pagination bar component
//!
//! Shows "Page X of Y", previous/next availability and how many rows are
//! checked.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the PaginationBar component
#[derive(Default, Props)]
pub struct PaginationBarProps {
    pub page: usize,
    pub page_count: usize,
    pub can_prev: bool,
    pub can_next: bool,
    pub selected_count: usize,
}

/// Format the page indicator
pub fn format_page(page: usize, page_count: usize) -> String {
    format!("Page {} of {}", page, page_count)
}

/// Page indicator with prev/next markers
#[component]
pub fn PaginationBar(props: &PaginationBarProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let enabled = |on: bool| if on { theme.text } else { theme.text_dimmed };

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_shrink: 0.0,
            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
        ) {
            Text(
                content: if props.selected_count > 0 {
                    format!("{} checked (D to delete)", props.selected_count)
                } else {
                    String::new()
                },
                color: theme.danger,
            )
            View(flex_direction: FlexDirection::Row, column_gap: 2) {
                Text(content: "< Previous", color: enabled(props.can_prev))
                Text(
                    content: format_page(props.page, props.page_count),
                    color: theme.text,
                    weight: Weight::Bold,
                )
                Text(content: "Next >", color: enabled(props.can_next))
            }
        }
    }
}
