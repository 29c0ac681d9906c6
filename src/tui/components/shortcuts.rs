//! Declarative builder for TUI shortcuts

use super::Shortcut;

/// Builder for creating shortcut lists with common patterns
#[derive(Default)]
pub struct ShortcutsBuilder {
    shortcuts: Vec<Shortcut>,
}

impl ShortcutsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add j/k row movement and h/l paging
    pub fn with_navigation(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("j/k", "Up/Down"));
        self.shortcuts.push(Shortcut::new("h/l", "Prev/Next Page"));
        self
    }

    /// Add Space/a for checking rows
    pub fn with_selection(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("Space", "Check"));
        self.shortcuts.push(Shortcut::new("a", "Check Page"));
        self
    }

    /// Add / for search
    pub fn with_search(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("/", "Search"));
        self
    }

    /// Add q for quit
    pub fn with_quit(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("q", "Quit"));
        self
    }

    /// Add a single custom shortcut
    pub fn add(mut self, key: &str, description: &str) -> Self {
        self.shortcuts.push(Shortcut::new(key, description));
        self
    }

    /// Build the shortcuts vector
    pub fn build(self) -> Vec<Shortcut> {
        self.shortcuts
    }
}
