//! Inline edit session
//!
//! At most one row is edited at a time. The draft holds the in-progress email
//! and role, separate from the committed record until saved.

use crate::types::{DraftField, Record, RecordId};

/// In-progress copy of a record's editable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub id: RecordId,
    pub email: String,
    pub role: String,
}

impl Draft {
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: record.id,
            email: record.email.clone(),
            role: record.role.clone(),
        }
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Email => &self.email,
            DraftField::Role => &self.role,
        }
    }

    pub fn set_field(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Email => self.email = value,
            DraftField::Role => self.role = value,
        }
    }
}

/// Edit state machine: Viewing <-> Editing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Viewing,
    Editing(Draft),
}

impl EditSession {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditSession::Editing(_))
    }

    pub fn draft(&self) -> Option<&Draft> {
        match self {
            EditSession::Editing(draft) => Some(draft),
            EditSession::Viewing => None,
        }
    }

    /// Id of the record under edit, if any.
    pub fn editing_id(&self) -> Option<RecordId> {
        self.draft().map(|d| d.id)
    }

    /// Begin editing `record`. Refused (returns false) while another edit is open.
    pub fn start(&mut self, record: &Record) -> bool {
        if self.is_editing() {
            return false;
        }
        *self = EditSession::Editing(Draft::from_record(record));
        true
    }

    /// Replace one draft field. No-op while viewing.
    pub fn update(&mut self, field: DraftField, value: String) -> bool {
        match self {
            EditSession::Editing(draft) => {
                draft.set_field(field, value);
                true
            }
            EditSession::Viewing => false,
        }
    }

    /// Commit the draft onto the matching record and return to viewing.
    ///
    /// Only email and role are written. Returns the saved id, or `None` when
    /// there was nothing to save.
    pub fn save(&mut self, records: &mut [Record]) -> Option<RecordId> {
        let EditSession::Editing(draft) = std::mem::take(self) else {
            return None;
        };
        if let Some(record) = records.iter_mut().find(|r| r.id == draft.id) {
            record.email = draft.email;
            record.role = draft.role;
        }
        Some(draft.id)
    }

    /// Discard the draft. Returns false if nothing was being edited.
    pub fn cancel(&mut self) -> bool {
        let was_editing = self.is_editing();
        *self = EditSession::Viewing;
        was_editing
    }

    /// Drop the session if it points at `id`.
    pub fn forget(&mut self, id: RecordId) {
        if self.editing_id() == Some(id) {
            *self = EditSession::Viewing;
        }
    }
}
