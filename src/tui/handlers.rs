//! Shared key handling for text inputs
//!
//! While a text input has focus, printable keys belong to the input. These
//! helpers pick out the few keys that control the surrounding table instead.

use iocraft::prelude::{KeyCode, KeyModifiers};

/// Action to take based on search input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAction {
    /// Clear search query and exit search mode (Esc)
    ClearAndExit,
    /// Exit search mode, keep query (Enter/Tab)
    Exit,
    /// Exit application (Ctrl+Q)
    Quit,
    /// Let the search box component handle the key
    Continue,
}

/// Handle search box keyboard events
///
/// - Esc: Clear search query and exit search mode
/// - Enter/Tab: Exit search mode (keep query)
/// - Ctrl+Q: Exit application (if enabled)
/// - Other keys: Allow the search box component to handle them
pub fn handle_search_input(
    key_code: KeyCode,
    modifiers: KeyModifiers,
    handle_ctrl_q: bool,
) -> SearchAction {
    match key_code {
        KeyCode::Esc => SearchAction::ClearAndExit,
        KeyCode::Enter | KeyCode::Tab => SearchAction::Exit,
        KeyCode::Char('q') if handle_ctrl_q && modifiers.contains(KeyModifiers::CONTROL) => {
            SearchAction::Quit
        }
        _ => SearchAction::Continue,
    }
}

/// Action to take while a draft field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftAction {
    /// Commit the draft (Enter or Ctrl+S)
    Save,
    /// Discard the draft (Esc)
    Cancel,
    /// Switch between email and role (Tab/BackTab)
    NextField,
    /// Move the row cursor (Up/Down)
    MoveUp,
    MoveDown,
    /// Change page (PageUp/PageDown)
    PrevPage,
    NextPage,
    /// Check or uncheck the cursor row (Ctrl+Space)
    ToggleRow,
    /// Check or uncheck the whole page (Ctrl+A)
    ToggleAll,
    /// Delete the cursor row (Ctrl+D)
    DeleteRow,
    /// Delete every checked row (Ctrl+X)
    DeleteChecked,
    /// Let the text input handle the key
    Continue,
}

/// Handle keyboard events for the inline draft inputs
///
/// Printable keys belong to the input, so row commands use arrows, paging
/// keys and Ctrl chords while a draft is open.
pub fn handle_draft_input(key_code: KeyCode, modifiers: KeyModifiers) -> DraftAction {
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    match key_code {
        KeyCode::Enter => DraftAction::Save,
        KeyCode::Char('s') if ctrl => DraftAction::Save,
        KeyCode::Esc => DraftAction::Cancel,
        KeyCode::Tab | KeyCode::BackTab => DraftAction::NextField,
        KeyCode::Up => DraftAction::MoveUp,
        KeyCode::Down => DraftAction::MoveDown,
        KeyCode::PageUp => DraftAction::PrevPage,
        KeyCode::PageDown => DraftAction::NextPage,
        KeyCode::Char(' ') if ctrl => DraftAction::ToggleRow,
        KeyCode::Char('a') if ctrl => DraftAction::ToggleAll,
        KeyCode::Char('d') if ctrl => DraftAction::DeleteRow,
        KeyCode::Char('x') if ctrl => DraftAction::DeleteChecked,
        _ => DraftAction::Continue,
    }
}
