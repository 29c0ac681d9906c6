//! Member table component
//!
//! Renders one page of records with a checkbox column, the keyboard cursor
//! and, for the row under edit, text inputs in place of email and role.

use iocraft::prelude::*;

use crate::table::RowViewModel;
use crate::tui::theme::theme;
use crate::types::DraftField;

const CHECK_WIDTH: u16 = 5;
const ID_WIDTH: u16 = 6;
const ROLE_WIDTH: u16 = 12;
const ACTION_WIDTH: u16 = 14;

/// Render a checkbox cell
pub fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

/// Props for the RecordTable component
#[derive(Default, Props)]
pub struct RecordTableProps {
    /// Rows of the current page
    pub rows: Vec<RowViewModel>,
    /// Whether every row on the page is checked (header checkbox)
    pub page_fully_selected: bool,
    /// Whether the table has keyboard focus
    pub has_focus: bool,
    /// Field of the draft that has focus
    pub draft_field: DraftField,
    /// Input state for the draft email
    pub draft_email: Option<State<String>>,
    /// Input state for the draft role
    pub draft_role: Option<State<String>>,
}

/// Paged member table with header row
#[component]
pub fn RecordTable(props: &RecordTableProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let border_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.border
    };

    element! {
        View(
            width: 100pct,
            flex_grow: 1.0,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: border_color,
        ) {
            // Column headings
            View(
                height: 1,
                width: 100pct,
                flex_direction: FlexDirection::Row,
                padding_left: 1,
                padding_right: 1,
            ) {
                View(width: CHECK_WIDTH, flex_shrink: 0.0) {
                    Text(content: checkbox(props.page_fully_selected), color: theme.text_dimmed)
                }
                View(width: ID_WIDTH, flex_shrink: 0.0) {
                    Text(content: "ID", color: theme.text_dimmed, weight: Weight::Bold)
                }
                View(width: 30pct, flex_shrink: 0.0) {
                    Text(content: "Name", color: theme.text_dimmed, weight: Weight::Bold)
                }
                View(flex_grow: 1.0) {
                    Text(content: "Email", color: theme.text_dimmed, weight: Weight::Bold)
                }
                View(width: ROLE_WIDTH, flex_shrink: 0.0) {
                    Text(content: "Role", color: theme.text_dimmed, weight: Weight::Bold)
                }
                View(width: ACTION_WIDTH, flex_shrink: 0.0) {
                    Text(content: "Action", color: theme.text_dimmed, weight: Weight::Bold)
                }
            }

            #(props.rows.iter().map(|row| {
                element! {
                    RecordRow(
                        row: row.clone(),
                        has_focus: props.has_focus,
                        draft_field: props.draft_field,
                        draft_email: props.draft_email,
                        draft_role: props.draft_role,
                    )
                }
            }))
        }
    }
}

/// Props for a single record row
#[derive(Default, Props)]
pub struct RecordRowProps {
    pub row: RowViewModel,
    pub has_focus: bool,
    pub draft_field: DraftField,
    pub draft_email: Option<State<String>>,
    pub draft_role: Option<State<String>>,
}

/// Single member row, in display or edit mode
#[component]
pub fn RecordRow(props: &RecordRowProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let row = &props.row;
    let record = &row.record;
    let is_editing = row.draft.is_some();

    let bg_color = if row.is_cursor && props.has_focus && !is_editing {
        Some(theme.highlight)
    } else if row.is_checked {
        Some(theme.checked_background)
    } else {
        None
    };
    let text_color = if row.is_cursor && props.has_focus {
        theme.highlight_text
    } else {
        theme.text
    };

    let indicator = if row.is_cursor { ">" } else { " " };

    let action_hint = if is_editing {
        "[save|cancel]"
    } else if row.can_edit {
        "[edit|del]"
    } else {
        "[C-d del]"
    };

    let email_cell = match (is_editing, props.draft_email) {
        (true, Some(state)) => draft_input(state, props.draft_field == DraftField::Email),
        _ => element! {
            Text(content: record.email.clone(), color: text_color)
        }
        .into_any(),
    };
    let role_cell = match (is_editing, props.draft_role) {
        (true, Some(state)) => draft_input(state, props.draft_field == DraftField::Role),
        _ => element! {
            Text(content: record.role.clone(), color: theme.role_color(&record.role))
        }
        .into_any(),
    };

    element! {
        View(
            height: 1,
            width: 100pct,
            flex_direction: FlexDirection::Row,
            padding_left: 1,
            padding_right: 1,
            background_color: bg_color,
        ) {
            View(width: CHECK_WIDTH, flex_shrink: 0.0, flex_direction: FlexDirection::Row) {
                Text(content: indicator, color: text_color)
                Text(
                    content: checkbox(row.is_checked),
                    color: if row.is_checked { theme.checked } else { text_color },
                )
            }
            View(width: ID_WIDTH, flex_shrink: 0.0) {
                Text(content: record.id.to_string(), color: theme.id_color)
            }
            View(width: 30pct, flex_shrink: 0.0, overflow: Overflow::Hidden) {
                Text(content: record.name.clone(), color: text_color)
            }
            View(flex_grow: 1.0, overflow: Overflow::Hidden) {
                #(Some(email_cell))
            }
            View(width: ROLE_WIDTH, flex_shrink: 0.0, overflow: Overflow::Hidden) {
                #(Some(role_cell))
            }
            View(width: ACTION_WIDTH, flex_shrink: 0.0) {
                Text(
                    content: action_hint,
                    color: if is_editing { theme.draft } else { theme.text_dimmed },
                )
            }
        }
    }
}

/// Text input bound to one draft field
fn draft_input(mut value: State<String>, has_focus: bool) -> AnyElement<'static> {
    let theme = theme();
    element! {
        View(
            flex_grow: 1.0,
            background_color: if has_focus { Some(theme.border) } else { None },
        ) {
            TextInput(
                value: value.to_string(),
                has_focus: has_focus,
                on_change: move |new_value| value.set(new_value),
                color: theme.draft,
            )
        }
    }
    .into_any()
}
