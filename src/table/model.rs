//! Table model types for testable state management
//!
//! This module separates state (TableState) from view (TableViewModel)
//! so the whole search -> page -> select -> edit pipeline can be unit
//! tested without the iocraft framework.

use crate::tui::components::empty_state::EmptyStateKind;
use crate::tui::components::footer::Shortcut;
use crate::tui::components::toast::{TOAST_TTL, Toast};
use crate::tui::components::{
    edit_shortcuts, empty_shortcuts, search_shortcuts, table_shortcuts,
};
use crate::tui::handlers::{DraftAction, SearchAction, handle_draft_input, handle_search_input};
use crate::types::{DraftField, Record, RecordId};

use super::edit::{Draft, EditSession};
use super::filter::filter_records;
use super::paginate::{DEFAULT_PAGE_SIZE, clamp_page, page_count, paginate};
use super::selection::Selection;

use iocraft::prelude::{KeyCode, KeyModifiers};

/// Which input currently receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Row navigation and table commands
    #[default]
    Table,
    /// The search box
    Search,
    /// The draft inputs of the row under edit
    Draft,
}

/// Outcome of the one-shot feed fetch
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

/// Raw state that changes during user interaction
#[derive(Debug, Clone)]
pub struct TableState {
    /// All records, in feed order
    pub records: Vec<Record>,
    /// Current search query string
    pub query: String,
    /// Current page, 1-indexed
    pub page: usize,
    /// Rows per page
    pub page_size: usize,
    /// Checked record ids
    pub selection: Selection,
    /// Inline edit session
    pub edit: EditSession,
    /// Field of the draft that has focus while editing
    pub draft_field: DraftField,
    /// Row index within the displayed page
    pub cursor: usize,
    /// Which input receives keystrokes
    pub focus: Focus,
    /// Feed outcome
    pub load: LoadState,
    /// Optional toast notification to display
    pub toast: Option<Toast>,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl TableState {
    pub fn new(page_size: usize) -> Self {
        Self {
            records: Vec::new(),
            query: String::new(),
            page: 1,
            page_size: page_size.max(1),
            selection: Selection::new(),
            edit: EditSession::Viewing,
            draft_field: DraftField::Email,
            cursor: 0,
            focus: Focus::Table,
            load: LoadState::Loading,
            toast: None,
        }
    }

    /// State with records already loaded (for callers that skip the fetch).
    pub fn with_records(records: Vec<Record>, page_size: usize) -> Self {
        Self {
            records,
            load: LoadState::Loaded,
            ..Self::new(page_size)
        }
    }

    /// Records matching the current query, in feed order.
    pub fn filtered(&self) -> Vec<&Record> {
        filter_records(&self.records, &self.query)
    }

    /// Page count of the filtered view.
    pub fn page_count(&self) -> usize {
        page_count(self.filtered().len(), self.page_size)
    }

    /// Records on the current page.
    pub fn displayed(&self) -> Vec<&Record> {
        let filtered = self.filtered();
        paginate(&filtered, self.page, self.page_size).to_vec()
    }

    /// Ids of the records on the current page.
    pub fn displayed_ids(&self) -> Vec<RecordId> {
        self.displayed().iter().map(|r| r.id).collect()
    }

    /// Id of the row under the cursor.
    pub fn cursor_id(&self) -> Option<RecordId> {
        self.displayed().get(self.cursor).map(|r| r.id)
    }

    pub fn find(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn is_editing(&self) -> bool {
        self.edit.is_editing()
    }

    /// Re-establish the page and cursor bounds after the filtered set changed.
    fn clamp_view(&mut self) {
        let filtered_len = self.filtered().len();
        self.page = clamp_page(self.page, filtered_len, self.page_size);
        let displayed_len = self.displayed().len();
        self.cursor = self.cursor.min(displayed_len.saturating_sub(1));
    }

    /// Remove the records for which `doomed` holds, keeping selection and
    /// edit session consistent with what remains.
    fn remove_records(&mut self, doomed: impl Fn(RecordId) -> bool) -> usize {
        let before = self.records.len();
        self.records.retain(|r| !doomed(r.id));
        let removed = before - self.records.len();

        if let Some(id) = self.edit.editing_id()
            && doomed(id)
        {
            self.edit.forget(id);
            self.focus = Focus::Table;
        }

        let remaining: Vec<RecordId> = self.records.iter().map(|r| r.id).collect();
        self.selection.retain_existing(|id| remaining.contains(&id));
        self.clamp_view();
        removed
    }
}

/// All possible actions on the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    // Feed
    /// The feed delivered records
    Loaded(Vec<Record>),
    /// The feed failed; records stay empty
    LoadFailed(String),

    // Search
    /// Focus the search box
    FocusSearch,
    /// Replace the search query (resets to page 1)
    Search(String),
    /// Leave the search box, keeping the query
    ExitSearch,
    /// Clear the query and leave the search box
    ClearSearchAndExit,

    // Navigation
    /// Move cursor up one row
    MoveUp,
    /// Move cursor down one row
    MoveDown,
    /// Previous page (no-op on page 1)
    PrevPage,
    /// Next page (no-op on the last page)
    NextPage,

    // Selection
    /// Flip the checkbox of a record
    ToggleRow(RecordId),
    /// Flip the checkbox of the row under the cursor
    ToggleCursorRow,
    /// Select the whole page, or clear everything if it already is
    ToggleAllOnPage,

    // Edit
    /// Start editing a record
    StartEdit(RecordId),
    /// Start editing the row under the cursor
    EditCursorRow,
    /// Replace a draft field
    UpdateDraft(DraftField, String),
    /// Move focus to the other draft field
    NextDraftField,
    /// Commit the draft
    Save,
    /// Discard the draft
    Cancel,

    // Delete
    /// Delete one record
    DeleteRow(RecordId),
    /// Delete the row under the cursor
    DeleteCursorRow,
    /// Delete every selected record
    DeleteSelected,

    // App
    /// Hide the toast
    DismissToast,
    /// Hide the toast if it has outlived its display time
    ExpireToast,
    /// Quit the application
    Quit,
}

/// Computed view model for rendering the entire table screen
#[derive(Debug, Clone)]
pub struct TableViewModel {
    /// Rows of the current page
    pub rows: Vec<RowViewModel>,
    /// Current page, 1-indexed
    pub page: usize,
    /// Page count of the filtered view
    pub page_count: usize,
    /// Whether "previous" is enabled
    pub can_prev: bool,
    /// Whether "next" is enabled
    pub can_next: bool,
    /// Current search query
    pub query: String,
    /// Whether the search box has focus
    pub search_focused: bool,
    /// Number of checked records
    pub selected_count: usize,
    /// Whether every row on the page is checked (header checkbox)
    pub page_fully_selected: bool,
    /// Number of records matching the query
    pub filtered_count: usize,
    /// Number of records overall
    pub total_count: usize,
    /// Whether an edit session is open
    pub is_editing: bool,
    /// Field of the draft that has focus
    pub draft_field: DraftField,
    /// Empty state to display (if any)
    pub empty_state: Option<EmptyStateKind>,
    /// Feed error message, when the fetch failed
    pub load_error: Option<String>,
    /// Keyboard shortcuts to display in footer
    pub shortcuts: Vec<Shortcut>,
    /// Toast notification to display
    pub toast: Option<Toast>,
}

/// View model for one table row
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowViewModel {
    pub record: Record,
    /// Checkbox state
    pub is_checked: bool,
    /// Whether the keyboard cursor is on this row
    pub is_cursor: bool,
    /// Draft values when this row is in edit mode
    pub draft: Option<Draft>,
    /// Whether the edit command is available (the global edit lock is free)
    pub can_edit: bool,
}

// ============================================================================
// Pure Functions
// ============================================================================

/// Compute which empty state to show, if any.
pub fn compute_empty_state(
    load: &LoadState,
    total: usize,
    filtered: usize,
    query: &str,
) -> Option<EmptyStateKind> {
    match load {
        LoadState::Loading => Some(EmptyStateKind::Loading),
        LoadState::Failed(_) => Some(EmptyStateKind::FeedError),
        LoadState::Loaded if total == 0 => Some(EmptyStateKind::NoRecords),
        LoadState::Loaded if filtered == 0 && !query.is_empty() => {
            Some(EmptyStateKind::NoSearchResults)
        }
        LoadState::Loaded => None,
    }
}

/// Pure function: compute view model from state
pub fn compute_view_model(state: &TableState) -> TableViewModel {
    let filtered = state.filtered();
    let filtered_count = filtered.len();
    let total_count = state.records.len();
    let page_count = page_count(filtered_count, state.page_size);
    let displayed = paginate(&filtered, state.page, state.page_size);

    let is_editing = state.is_editing();
    let editing_id = state.edit.editing_id();

    let rows: Vec<RowViewModel> = displayed
        .iter()
        .enumerate()
        .map(|(i, record)| RowViewModel {
            record: (*record).clone(),
            is_checked: state.selection.contains(record.id),
            is_cursor: i == state.cursor && state.focus != Focus::Search,
            draft: if editing_id == Some(record.id) {
                state.edit.draft().cloned()
            } else {
                None
            },
            can_edit: !is_editing,
        })
        .collect();

    let page_fully_selected = !rows.is_empty() && rows.iter().all(|r| r.is_checked);

    let empty_state = compute_empty_state(&state.load, total_count, filtered_count, &state.query);

    let shortcuts = if is_editing {
        edit_shortcuts()
    } else if state.focus == Focus::Search {
        search_shortcuts()
    } else if matches!(
        empty_state,
        Some(EmptyStateKind::Loading | EmptyStateKind::NoRecords | EmptyStateKind::FeedError)
    ) {
        empty_shortcuts()
    } else {
        table_shortcuts()
    };

    let load_error = match &state.load {
        LoadState::Failed(msg) => Some(msg.clone()),
        _ => None,
    };

    TableViewModel {
        rows,
        page: state.page,
        page_count,
        can_prev: state.page > 1,
        can_next: state.page < page_count,
        query: state.query.clone(),
        search_focused: state.focus == Focus::Search,
        selected_count: state.selection.len(),
        page_fully_selected,
        filtered_count,
        total_count,
        is_editing,
        draft_field: state.draft_field,
        empty_state,
        load_error,
        shortcuts,
        toast: state.toast.clone(),
    }
}

/// Pure function: apply action to state (reducer pattern)
///
/// Disallowed transitions (saving while viewing, editing a second row,
/// paging past either end) leave the state unchanged.
pub fn reduce_table_state(mut state: TableState, action: TableAction) -> TableState {
    tracing::debug!(?action, page = state.page, "table action");

    match action {
        // Feed
        TableAction::Loaded(records) => {
            tracing::info!(count = records.len(), "records loaded");
            state.records = records;
            state.load = LoadState::Loaded;
            state.selection.clear();
            state.edit = EditSession::Viewing;
            state.clamp_view();
        }
        TableAction::LoadFailed(message) => {
            tracing::error!(%message, "record feed failed");
            state.records.clear();
            state.toast = Some(Toast::error(format!("Failed to load records: {}", message)));
            state.load = LoadState::Failed(message);
        }

        // Search
        TableAction::FocusSearch => {
            if !state.is_editing() {
                state.focus = Focus::Search;
            }
        }
        TableAction::Search(query) => {
            if query != state.query {
                state.query = query;
                // Reset to the first page when the result set changes
                state.page = 1;
                state.cursor = 0;
            }
        }
        TableAction::ExitSearch => {
            if state.focus == Focus::Search {
                state.focus = Focus::Table;
            }
        }
        TableAction::ClearSearchAndExit => {
            state.query = String::new();
            state.page = 1;
            state.cursor = 0;
            if state.focus == Focus::Search {
                state.focus = Focus::Table;
            }
        }

        // Navigation
        TableAction::MoveUp => {
            state.cursor = state.cursor.saturating_sub(1);
        }
        TableAction::MoveDown => {
            let len = state.displayed().len();
            if len > 0 {
                state.cursor = (state.cursor + 1).min(len - 1);
            }
        }
        TableAction::PrevPage => {
            if state.page > 1 {
                state.page -= 1;
                state.cursor = 0;
            }
        }
        TableAction::NextPage => {
            if state.page < state.page_count() {
                state.page += 1;
                state.cursor = 0;
            }
        }

        // Selection
        TableAction::ToggleRow(id) => {
            if state.find(id).is_some() {
                state.selection.toggle(id);
            }
        }
        TableAction::ToggleCursorRow => {
            if let Some(id) = state.cursor_id() {
                state.selection.toggle(id);
            }
        }
        TableAction::ToggleAllOnPage => {
            let displayed = state.displayed_ids();
            state.selection.toggle_all(&displayed);
        }

        // Edit
        TableAction::StartEdit(id) => {
            start_edit(&mut state, id);
        }
        TableAction::EditCursorRow => {
            if let Some(id) = state.cursor_id() {
                start_edit(&mut state, id);
            }
        }
        TableAction::UpdateDraft(field, value) => {
            state.edit.update(field, value);
        }
        TableAction::NextDraftField => {
            if state.is_editing() {
                state.draft_field = state.draft_field.next();
                tracing::debug!(field = %state.draft_field, "draft field focused");
            }
        }
        TableAction::Save => {
            if let Some(id) = state.edit.save(&mut state.records) {
                tracing::info!(%id, "record saved");
                state.focus = Focus::Table;
                state.toast = Some(Toast::success(format!("Saved record {}", id)));
                // The edit may have changed whether the row matches the query
                state.clamp_view();
            }
        }
        TableAction::Cancel => {
            if state.edit.cancel() {
                state.focus = Focus::Table;
            }
        }

        // Delete
        TableAction::DeleteRow(id) => {
            if state.remove_records(|candidate| candidate == id) > 0 {
                tracing::info!(%id, "record deleted");
                state.toast = Some(Toast::info(format!("Deleted record {}", id)));
            }
        }
        TableAction::DeleteCursorRow => {
            if let Some(id) = state.cursor_id() {
                return reduce_table_state(state, TableAction::DeleteRow(id));
            }
        }
        TableAction::DeleteSelected => {
            if !state.selection.is_empty() {
                let doomed: Vec<RecordId> = state.selection.ids().collect();
                let removed = state.remove_records(|id| doomed.contains(&id));
                state.selection.clear();
                tracing::info!(removed, "selected records deleted");
                state.toast = Some(Toast::info(format!("Deleted {} records", removed)));
            }
        }

        // App
        TableAction::DismissToast => {
            state.toast = None;
        }
        TableAction::ExpireToast => {
            if state.toast.as_ref().is_some_and(|t| t.is_expired(TOAST_TTL)) {
                state.toast = None;
            }
        }
        TableAction::Quit => {
            // Handled by the component
        }
    }
    state
}

fn start_edit(state: &mut TableState, id: RecordId) {
    let Some(record) = state.find(id).cloned() else {
        return;
    };
    if state.edit.start(&record) {
        state.focus = Focus::Draft;
        state.draft_field = DraftField::Email;
    }
}

/// Convert a key event to a TableAction (pure function)
///
/// Returns `None` if the key doesn't map to any action, or if it is a
/// character destined for the focused text input.
pub fn key_to_action(code: KeyCode, modifiers: KeyModifiers, focus: Focus) -> Option<TableAction> {
    match focus {
        Focus::Search => match handle_search_input(code, modifiers, true) {
            SearchAction::ClearAndExit => Some(TableAction::ClearSearchAndExit),
            SearchAction::Exit => Some(TableAction::ExitSearch),
            SearchAction::Quit => Some(TableAction::Quit),
            SearchAction::Continue => None,
        },
        Focus::Draft => match handle_draft_input(code, modifiers) {
            DraftAction::Save => Some(TableAction::Save),
            DraftAction::Cancel => Some(TableAction::Cancel),
            DraftAction::NextField => Some(TableAction::NextDraftField),
            DraftAction::MoveUp => Some(TableAction::MoveUp),
            DraftAction::MoveDown => Some(TableAction::MoveDown),
            DraftAction::PrevPage => Some(TableAction::PrevPage),
            DraftAction::NextPage => Some(TableAction::NextPage),
            DraftAction::ToggleRow => Some(TableAction::ToggleCursorRow),
            DraftAction::ToggleAll => Some(TableAction::ToggleAllOnPage),
            DraftAction::DeleteRow => Some(TableAction::DeleteCursorRow),
            DraftAction::DeleteChecked => Some(TableAction::DeleteSelected),
            DraftAction::Continue => None,
        },
        Focus::Table => match code {
            // Navigation
            KeyCode::Char('j') | KeyCode::Down => Some(TableAction::MoveDown),
            KeyCode::Char('k') | KeyCode::Up => Some(TableAction::MoveUp),
            KeyCode::Char('h') | KeyCode::Left | KeyCode::PageUp => Some(TableAction::PrevPage),
            KeyCode::Char('l') | KeyCode::Right | KeyCode::PageDown => {
                Some(TableAction::NextPage)
            }

            // Selection
            KeyCode::Char(' ') => Some(TableAction::ToggleCursorRow),
            KeyCode::Char('a') => Some(TableAction::ToggleAllOnPage),

            // Edit / delete
            KeyCode::Char('e') | KeyCode::Enter => Some(TableAction::EditCursorRow),
            KeyCode::Char('d') => Some(TableAction::DeleteCursorRow),
            KeyCode::Char('D') => Some(TableAction::DeleteSelected),

            // App
            KeyCode::Char('/') => Some(TableAction::FocusSearch),
            KeyCode::Char('q') | KeyCode::Esc => Some(TableAction::Quit),

            _ => None,
        },
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(id: u64) -> Record {
        Record::new(
            id,
            format!("Member {id}"),
            format!("member{id}@mailinator.com"),
            if id % 5 == 0 { "admin" } else { "member" },
        )
    }

    fn state_with_records(count: u64) -> TableState {
        TableState::with_records((1..=count).map(make_record).collect(), 10)
    }

    fn two_records() -> TableState {
        TableState::with_records(
            vec![
                Record::new(1u64, "Ann", "ann@x.com", "member"),
                Record::new(2u64, "Bob", "a@x.com", "admin"),
            ],
            10,
        )
    }

    fn ids(state: &TableState) -> Vec<u64> {
        state.records.iter().map(|r| r.id.get()).collect()
    }

    fn id(n: u64) -> RecordId {
        RecordId::new(n)
    }

    // ========================================================================
    // Reducer Tests - Search and Paging
    // ========================================================================

    #[test]
    fn test_first_page_shows_both_records() {
        let state = two_records();
        let vm = compute_view_model(&state);
        assert_eq!(vm.page, 1);
        assert_eq!(vm.page_count, 1);
        assert_eq!(vm.rows.len(), 2);
    }

    #[test]
    fn test_search_without_match_resets_page_and_empties_rows() {
        let state = state_with_records(25);
        let state = reduce_table_state(state, TableAction::NextPage);
        assert_eq!(state.page, 2);

        let state = reduce_table_state(state, TableAction::Search("foo".into()));
        assert_eq!(state.page, 1);
        let vm = compute_view_model(&state);
        assert!(vm.rows.is_empty());
        assert_eq!(vm.page_count, 1);
        assert_eq!(vm.empty_state, Some(EmptyStateKind::NoSearchResults));
    }

    #[test]
    fn test_search_filters_before_paging() {
        let state = state_with_records(30);
        let state = reduce_table_state(state, TableAction::Search("ADMIN".into()));
        let vm = compute_view_model(&state);
        let shown: Vec<u64> = vm.rows.iter().map(|r| r.record.id.get()).collect();
        assert_eq!(shown, vec![5, 10, 15, 20, 25, 30]);
    }

    #[test]
    fn test_prev_page_noop_on_first_page() {
        let state = state_with_records(25);
        let state = reduce_table_state(state, TableAction::PrevPage);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_next_page_stops_at_last_page() {
        let mut state = state_with_records(25);
        for _ in 0..5 {
            state = reduce_table_state(state, TableAction::NextPage);
        }
        assert_eq!(state.page, 3);
        assert_eq!(compute_view_model(&state).rows.len(), 5);
    }

    #[test]
    fn test_next_page_bounded_by_filtered_count() {
        let state = state_with_records(25);
        let state = reduce_table_state(state, TableAction::Search("admin".into()));
        let state = reduce_table_state(state, TableAction::NextPage);
        assert_eq!(state.page, 1, "only one page of admins");
        assert!(!compute_view_model(&state).can_next);
    }

    #[test]
    fn test_page_change_resets_cursor() {
        let mut state = state_with_records(25);
        state = reduce_table_state(state, TableAction::MoveDown);
        state = reduce_table_state(state, TableAction::MoveDown);
        assert_eq!(state.cursor, 2);
        state = reduce_table_state(state, TableAction::NextPage);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_cursor_clamped_to_page_length() {
        let mut state = state_with_records(3);
        for _ in 0..10 {
            state = reduce_table_state(state, TableAction::MoveDown);
        }
        assert_eq!(state.cursor, 2);
        state = reduce_table_state(state, TableAction::MoveUp);
        assert_eq!(state.cursor, 1);
    }

    // ========================================================================
    // Reducer Tests - Selection
    // ========================================================================

    #[test]
    fn test_toggle_row() {
        let state = two_records();
        let state = reduce_table_state(state, TableAction::ToggleRow(id(1)));
        assert!(state.selection.contains(id(1)));
        let state = reduce_table_state(state, TableAction::ToggleRow(id(1)));
        assert!(state.selection.is_empty());
    }

    #[test]
    fn test_toggle_unknown_row_is_ignored() {
        let state = two_records();
        let state = reduce_table_state(state, TableAction::ToggleRow(id(99)));
        assert!(state.selection.is_empty());
    }

    #[test]
    fn test_toggle_cursor_row() {
        let state = two_records();
        let state = reduce_table_state(state, TableAction::MoveDown);
        let state = reduce_table_state(state, TableAction::ToggleCursorRow);
        assert!(state.selection.contains(id(2)));
    }

    #[test]
    fn test_toggle_all_twice_is_identity() {
        let state = state_with_records(15);
        let state = reduce_table_state(state, TableAction::ToggleAllOnPage);
        assert_eq!(state.selection.len(), 10);
        assert!(compute_view_model(&state).page_fully_selected);
        let state = reduce_table_state(state, TableAction::ToggleAllOnPage);
        assert!(state.selection.is_empty());
    }

    #[test]
    fn test_toggle_all_on_second_page_discards_first_page() {
        let state = state_with_records(15);
        let state = reduce_table_state(state, TableAction::ToggleAllOnPage);
        let state = reduce_table_state(state, TableAction::NextPage);
        let state = reduce_table_state(state, TableAction::ToggleAllOnPage);
        let selected: Vec<u64> = state.selection.ids().map(|i| i.get()).collect();
        assert_eq!(selected, vec![11, 12, 13, 14, 15]);
    }

    #[test]
    fn test_select_then_delete_selected() {
        let state = two_records();
        let state = reduce_table_state(state, TableAction::ToggleRow(id(1)));
        let state = reduce_table_state(state, TableAction::DeleteSelected);
        assert_eq!(ids(&state), vec![2]);
        assert!(state.selection.is_empty());
    }

    #[test]
    fn test_delete_selected_with_nothing_selected_is_noop() {
        let state = two_records();
        let state = reduce_table_state(state, TableAction::DeleteSelected);
        assert_eq!(ids(&state), vec![1, 2]);
        assert!(state.toast.is_none());
    }

    #[test]
    fn test_delete_row_prunes_selection() {
        let state = two_records();
        let state = reduce_table_state(state, TableAction::ToggleRow(id(1)));
        let state = reduce_table_state(state, TableAction::ToggleRow(id(2)));
        let state = reduce_table_state(state, TableAction::DeleteRow(id(1)));
        assert_eq!(ids(&state), vec![2]);
        assert_eq!(state.selection.ids().collect::<Vec<_>>(), vec![id(2)]);
    }

    #[test]
    fn test_delete_last_row_of_last_page_moves_back() {
        let state = state_with_records(11);
        let state = reduce_table_state(state, TableAction::NextPage);
        assert_eq!(state.page, 2);
        let state = reduce_table_state(state, TableAction::DeleteRow(id(11)));
        assert_eq!(state.page, 1);
        assert_eq!(compute_view_model(&state).rows.len(), 10);
    }

    // ========================================================================
    // Reducer Tests - Edit Session
    // ========================================================================

    #[test]
    fn test_edit_update_save() {
        let state = two_records();
        let state = reduce_table_state(state, TableAction::StartEdit(id(2)));
        assert_eq!(state.focus, Focus::Draft);
        let state = reduce_table_state(
            state,
            TableAction::UpdateDraft(DraftField::Role, "user".into()),
        );
        assert_eq!(state.records[1].role, "admin", "draft does not touch records");
        let state = reduce_table_state(state, TableAction::Save);
        assert_eq!(state.records[1].role, "user");
        assert_eq!(state.records[1].email, "a@x.com");
        assert!(!state.is_editing());
        assert_eq!(state.focus, Focus::Table);
    }

    #[test]
    fn test_edit_cancel() {
        let state = two_records();
        let state = reduce_table_state(state, TableAction::StartEdit(id(2)));
        let state = reduce_table_state(
            state,
            TableAction::UpdateDraft(DraftField::Email, "zzz@x.com".into()),
        );
        let state = reduce_table_state(state, TableAction::Cancel);
        assert_eq!(state.records[1].email, "a@x.com");
        assert!(!state.is_editing());
    }

    #[test]
    fn test_single_edit_lock() {
        let state = two_records();
        let state = reduce_table_state(state, TableAction::StartEdit(id(1)));
        let state = reduce_table_state(state, TableAction::StartEdit(id(2)));
        assert_eq!(state.edit.editing_id(), Some(id(1)));

        let vm = compute_view_model(&state);
        assert!(vm.rows.iter().all(|r| !r.can_edit));
        assert!(vm.rows[0].draft.is_some());
        assert!(vm.rows[1].draft.is_none());
    }

    #[test]
    fn test_save_and_cancel_noop_while_viewing() {
        let state = two_records();
        let before = state.records.clone();
        let state = reduce_table_state(state, TableAction::Save);
        let state = reduce_table_state(state, TableAction::Cancel);
        assert_eq!(state.records, before);
        assert!(state.toast.is_none());
    }

    #[test]
    fn test_update_draft_noop_while_viewing() {
        let state = two_records();
        let state = reduce_table_state(
            state,
            TableAction::UpdateDraft(DraftField::Role, "root".into()),
        );
        assert!(!state.is_editing());
        assert_eq!(state.records[0].role, "member");
    }

    #[test]
    fn test_deleting_edited_record_clears_edit() {
        let state = two_records();
        let state = reduce_table_state(state, TableAction::StartEdit(id(2)));
        let state = reduce_table_state(state, TableAction::DeleteRow(id(2)));
        assert!(!state.is_editing());
        assert_eq!(state.focus, Focus::Table);
    }

    #[test]
    fn test_deleting_other_record_keeps_edit() {
        let state = two_records();
        let state = reduce_table_state(state, TableAction::StartEdit(id(2)));
        let state = reduce_table_state(state, TableAction::DeleteRow(id(1)));
        assert_eq!(state.edit.editing_id(), Some(id(2)));
    }

    #[test]
    fn test_delete_selected_clears_edit_of_deleted_record() {
        let state = two_records();
        let state = reduce_table_state(state, TableAction::ToggleRow(id(1)));
        let state = reduce_table_state(state, TableAction::StartEdit(id(1)));
        let state = reduce_table_state(state, TableAction::DeleteSelected);
        assert!(!state.is_editing());
    }

    #[test]
    fn test_next_draft_field_cycles() {
        let state = two_records();
        let state = reduce_table_state(state, TableAction::EditCursorRow);
        assert_eq!(state.draft_field, DraftField::Email);
        let state = reduce_table_state(state, TableAction::NextDraftField);
        assert_eq!(state.draft_field, DraftField::Role);
    }

    #[test]
    fn test_focus_search_refused_while_editing() {
        let state = two_records();
        let state = reduce_table_state(state, TableAction::StartEdit(id(1)));
        let state = reduce_table_state(state, TableAction::FocusSearch);
        assert_eq!(state.focus, Focus::Draft);
    }

    // ========================================================================
    // Feed Tests
    // ========================================================================

    #[test]
    fn test_loading_state() {
        let state = TableState::default();
        let vm = compute_view_model(&state);
        assert_eq!(vm.empty_state, Some(EmptyStateKind::Loading));
    }

    #[test]
    fn test_load_failed_surfaces_error() {
        let state = TableState::default();
        let state = reduce_table_state(state, TableAction::LoadFailed("timeout".into()));
        let vm = compute_view_model(&state);
        assert_eq!(vm.empty_state, Some(EmptyStateKind::FeedError));
        assert_eq!(vm.load_error.as_deref(), Some("timeout"));
        assert!(vm.toast.is_some());
        assert_eq!(vm.total_count, 0);
    }

    #[test]
    fn test_expire_toast_clears_only_stale_notices() {
        let stale = |toast: Toast| Toast {
            timestamp: std::time::Instant::now()
                .checked_sub(TOAST_TTL * 2)
                .unwrap_or(toast.timestamp),
            ..toast
        };

        let mut state = two_records();
        state.toast = Some(Toast::success("Saved record 1"));
        let state = reduce_table_state(state, TableAction::ExpireToast);
        assert!(state.toast.is_some());

        let mut state = state;
        state.toast = Some(stale(Toast::success("Saved record 1")));
        let state = reduce_table_state(state, TableAction::ExpireToast);
        assert!(state.toast.is_none());

        let mut state = state;
        state.toast = Some(stale(Toast::error("Failed to load records")));
        let state = reduce_table_state(state, TableAction::ExpireToast);
        assert!(state.toast.is_some());
    }

    #[test]
    fn test_loaded_empty_feed() {
        let state = reduce_table_state(TableState::default(), TableAction::Loaded(vec![]));
        let vm = compute_view_model(&state);
        assert_eq!(vm.empty_state, Some(EmptyStateKind::NoRecords));
    }

    // ========================================================================
    // Key Mapping Tests
    // ========================================================================

    #[test]
    fn test_key_to_action_table() {
        let k = |c| key_to_action(c, KeyModifiers::NONE, Focus::Table);
        assert_eq!(k(KeyCode::Char('j')), Some(TableAction::MoveDown));
        assert_eq!(k(KeyCode::Up), Some(TableAction::MoveUp));
        assert_eq!(k(KeyCode::Char('l')), Some(TableAction::NextPage));
        assert_eq!(k(KeyCode::Left), Some(TableAction::PrevPage));
        assert_eq!(k(KeyCode::Char(' ')), Some(TableAction::ToggleCursorRow));
        assert_eq!(k(KeyCode::Char('a')), Some(TableAction::ToggleAllOnPage));
        assert_eq!(k(KeyCode::Char('e')), Some(TableAction::EditCursorRow));
        assert_eq!(k(KeyCode::Char('d')), Some(TableAction::DeleteCursorRow));
        assert_eq!(k(KeyCode::Char('D')), Some(TableAction::DeleteSelected));
        assert_eq!(k(KeyCode::Char('/')), Some(TableAction::FocusSearch));
        assert_eq!(k(KeyCode::Char('q')), Some(TableAction::Quit));
        assert_eq!(k(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_key_to_action_search() {
        let k = |c| key_to_action(c, KeyModifiers::NONE, Focus::Search);
        assert_eq!(k(KeyCode::Esc), Some(TableAction::ClearSearchAndExit));
        assert_eq!(k(KeyCode::Enter), Some(TableAction::ExitSearch));
        assert_eq!(k(KeyCode::Char('j')), None);
        assert_eq!(
            key_to_action(KeyCode::Char('q'), KeyModifiers::CONTROL, Focus::Search),
            Some(TableAction::Quit)
        );
    }

    #[test]
    fn test_key_to_action_draft() {
        let k = |c| key_to_action(c, KeyModifiers::NONE, Focus::Draft);
        assert_eq!(k(KeyCode::Enter), Some(TableAction::Save));
        assert_eq!(k(KeyCode::Esc), Some(TableAction::Cancel));
        assert_eq!(k(KeyCode::Tab), Some(TableAction::NextDraftField));
        assert_eq!(k(KeyCode::Char('d')), None);
        assert_eq!(
            key_to_action(KeyCode::Char('d'), KeyModifiers::CONTROL, Focus::Draft),
            Some(TableAction::DeleteCursorRow)
        );
    }

    #[test]
    fn test_delete_edited_row_by_key() {
        let state = reduce_table_state(two_records(), TableAction::MoveDown);
        let state = reduce_table_state(state, TableAction::EditCursorRow);
        assert_eq!(state.focus, Focus::Draft);

        let action = key_to_action(KeyCode::Char('d'), KeyModifiers::CONTROL, state.focus)
            .expect("Ctrl+D maps to an action while editing");
        let state = reduce_table_state(state, action);

        assert_eq!(ids(&state), vec![1]);
        assert_eq!(state.edit, EditSession::Viewing);
        assert_eq!(state.focus, Focus::Table);
    }

    #[test]
    fn test_rows_stay_usable_while_editing() {
        let state = reduce_table_state(
            state_with_records(15),
            TableAction::StartEdit(RecordId::new(1)),
        );
        let keys = [
            (KeyCode::Down, KeyModifiers::NONE),
            (KeyCode::Char(' '), KeyModifiers::CONTROL),
            (KeyCode::PageDown, KeyModifiers::NONE),
        ];
        let state = keys.into_iter().fold(state, |state, (code, modifiers)| {
            match key_to_action(code, modifiers, state.focus) {
                Some(action) => reduce_table_state(state, action),
                None => state,
            }
        });

        assert!(state.selection.contains(RecordId::new(2)));
        assert_eq!(state.page, 2);
        assert_eq!(state.edit.editing_id(), Some(RecordId::new(1)));
    }
}
