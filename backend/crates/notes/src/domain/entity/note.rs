//! Note Entity

use chrono::{DateTime, Utc};
use kernel::id::NoteId;

use crate::domain::value_object::note_content::NoteContent;

/// Note entity
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub note_id: NoteId,
    pub content: NoteContent,
    /// Defaults to `false` when not given
    pub important: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Create a new note
    pub fn new(content: NoteContent, important: bool) -> Self {
        let now = Utc::now();

        Self {
            note_id: NoteId::new(),
            content,
            important,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace content and importance
    pub fn revise(&mut self, content: NoteContent, important: bool) {
        self.content = content;
        self.important = important;
        self.updated_at = Utc::now();
    }
}
