//! Member table view (`roster view`)
//!
//! Fetches the feed once on mount, then runs every key press through
//! [`reduce_table_state`] and renders the derived view model.

use std::time::Duration;

use iocraft::prelude::*;

use crate::feed::FeedSource;
use crate::table::{
    DEFAULT_PAGE_SIZE, TableAction, TableState, compute_view_model, key_to_action,
    reduce_table_state,
};
use crate::tui::components::{
    EmptyState, EmptyStateKind, Footer, Header, PaginationBar, RecordTable, SearchBox,
    TOAST_TTL, render_toast,
};
use crate::tui::theme::theme;
use crate::types::{DraftField, RecordId};

/// How often to check whether the toast has expired
const TOAST_TICK: Duration = Duration::from_secs(1);

/// Props for the RosterTable component
#[derive(Default, Props)]
pub struct RosterTableProps {
    /// Where to read records from
    pub source: FeedSource,
    /// Rows per page (0 falls back to the default)
    pub page_size: usize,
    /// Feed request timeout in seconds
    pub timeout_secs: u64,
}

/// Apply an action to the table state
fn dispatch(table: &mut State<TableState>, action: TableAction) {
    let current = table.read().clone();
    table.set(reduce_table_state(current, action));
}

/// Main member table component
///
/// Layout:
/// ```text
/// +------------------------------------------+
/// | Header                                    |
/// +------------------------------------------+
/// | SearchBox                                 |
/// +------------------------------------------+
/// | RecordTable                               |
/// |                                           |
/// +------------------------------------------+
/// | PaginationBar                             |
/// | Toast                                     |
/// | Footer                                    |
/// +------------------------------------------+
/// ```
#[component]
pub fn RosterTable<'a>(props: &RosterTableProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    let page_size = if props.page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        props.page_size
    };
    let timeout = Duration::from_secs(props.timeout_secs.max(1));

    let mut table: State<TableState> = hooks.use_state(move || TableState::new(page_size));
    let mut search_query = hooks.use_state(String::new);
    let mut draft_email = hooks.use_state(String::new);
    let mut draft_role = hooks.use_state(String::new);
    // Record whose values were last copied into the draft inputs
    let mut draft_for: State<Option<RecordId>> = hooks.use_state(|| None);
    let mut should_exit = hooks.use_state(|| false);

    // One-shot feed fetch
    let load_handler: Handler<FeedSource> = hooks.use_async_handler(move |source: FeedSource| {
        let mut table = table;
        async move {
            let action = match source.load(timeout).await {
                Ok(records) => TableAction::Loaded(records),
                Err(e) => TableAction::LoadFailed(e.to_string()),
            };
            dispatch(&mut table, action);
        }
    });

    let mut fetch_started = hooks.use_state(|| false);
    if !fetch_started.get() {
        fetch_started.set(true);
        load_handler.clone()(props.source.clone());
    }

    // Search box -> table query
    let query = search_query.to_string();
    if query != table.read().query {
        dispatch(&mut table, TableAction::Search(query));
    }

    // Draft inputs <-> edit session
    let draft = table.read().edit.draft().cloned();
    match draft {
        Some(draft) if draft_for.get() != Some(draft.id) => {
            draft_email.set(draft.email.clone());
            draft_role.set(draft.role.clone());
            draft_for.set(Some(draft.id));
        }
        Some(draft) => {
            let email = draft_email.to_string();
            if email != draft.email {
                dispatch(&mut table, TableAction::UpdateDraft(DraftField::Email, email));
            }
            let role = draft_role.to_string();
            if role != draft.role {
                dispatch(&mut table, TableAction::UpdateDraft(DraftField::Role, role));
            }
        }
        None => {
            if draft_for.get().is_some() {
                draft_for.set(None);
            }
        }
    }

    // Clear timed-out toasts without waiting for a key press
    hooks.use_future({
        let mut table = table;
        async move {
            loop {
                tokio::time::sleep(TOAST_TICK).await;
                let expired = table
                    .read()
                    .toast
                    .as_ref()
                    .is_some_and(|toast| toast.is_expired(TOAST_TTL));
                if expired {
                    dispatch(&mut table, TableAction::ExpireToast);
                }
            }
        }
    });

    hooks.use_terminal_events(move |event| match event {
        TerminalEvent::Key(KeyEvent {
            code,
            kind,
            modifiers,
            ..
        }) if kind != KeyEventKind::Release => {
            let focus = table.read().focus;
            let Some(action) = key_to_action(code, modifiers, focus) else {
                return;
            };
            if action == TableAction::Quit {
                should_exit.set(true);
                return;
            }
            if table.read().toast.is_some() {
                dispatch(&mut table, TableAction::DismissToast);
            }
            if action == TableAction::ClearSearchAndExit {
                search_query.set(String::new());
            }
            dispatch(&mut table, action);
        }
        _ => {}
    });

    if should_exit.get() {
        system.exit();
    }

    let theme = theme();
    let view = compute_view_model(&table.read());

    let full_empty_state = view
        .empty_state
        .filter(|kind| *kind != EmptyStateKind::NoSearchResults);
    let table_focused = !view.search_focused;

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            Header(
                subtitle: Some(props.source.describe()),
                filtered_count: view.filtered_count,
                total_count: view.total_count,
            )

            #(if let Some(kind) = full_empty_state {
                Some(element! {
                    View(flex_grow: 1.0, width: 100pct) {
                        EmptyState(kind: kind, detail: view.load_error.clone())
                    }
                })
            } else {
                Some(element! {
                    View(
                        flex_grow: 1.0,
                        flex_direction: FlexDirection::Column,
                        width: 100pct,
                    ) {
                        View(
                            width: 100pct,
                            padding_left: 1,
                            padding_right: 1,
                        ) {
                            SearchBox(
                                value: Some(search_query),
                                has_focus: view.search_focused,
                            )
                        }

                        #(if view.empty_state == Some(EmptyStateKind::NoSearchResults) {
                            Some(element! {
                                View(flex_grow: 1.0, width: 100pct) {
                                    EmptyState(
                                        kind: EmptyStateKind::NoSearchResults,
                                        detail: Some(view.query.clone()),
                                    )
                                }
                            })
                        } else {
                            Some(element! {
                                View(
                                    flex_grow: 1.0,
                                    width: 100pct,
                                    padding_left: 1,
                                    padding_right: 1,
                                ) {
                                    RecordTable(
                                        rows: view.rows.clone(),
                                        page_fully_selected: view.page_fully_selected,
                                        has_focus: table_focused,
                                        draft_field: view.draft_field,
                                        draft_email: Some(draft_email),
                                        draft_role: Some(draft_role),
                                    )
                                }
                            })
                        })

                        PaginationBar(
                            page: view.page,
                            page_count: view.page_count,
                            can_prev: view.can_prev,
                            can_next: view.can_next,
                            selected_count: view.selected_count,
                        )
                    }
                })
            })

            #(render_toast(&view.toast))

            Footer(shortcuts: view.shortcuts.clone())
        }
    }
}
