//! Row selection tracker
//!
//! Selection is keyed by record id, so it survives paging and searching.

use std::collections::BTreeSet;

use crate::types::RecordId;

/// Set of checked record ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<RecordId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.ids.iter().copied()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Flip membership of `id`.
    pub fn toggle(&mut self, id: RecordId) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// Toggle every row on the displayed page.
    ///
    /// If all displayed ids are already selected the whole selection is
    /// cleared. Otherwise the selection becomes exactly the displayed ids:
    /// anything selected on other pages is dropped.
    pub fn toggle_all(&mut self, displayed: &[RecordId]) {
        if displayed.iter().all(|id| self.ids.contains(id)) {
            self.ids.clear();
        } else {
            self.ids = displayed.iter().copied().collect();
        }
    }

    /// Drop every id for which `exists` returns false.
    pub fn retain_existing(&mut self, exists: impl Fn(RecordId) -> bool) {
        self.ids.retain(|id| exists(*id));
    }
}

impl FromIterator<RecordId> for Selection {
    fn from_iter<I: IntoIterator<Item = RecordId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
