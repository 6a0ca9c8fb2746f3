//! In-Memory Repository Implementation
//!
//! Used by tests and when no database is configured. Notes keep insertion
//! order, matching the PostgreSQL listing order.

use std::sync::Arc;

use kernel::id::NoteId;
use tokio::sync::RwLock;

use crate::domain::entity::note::Note;
use crate::domain::repository::NoteRepository;
use crate::error::NoteResult;

/// In-memory note repository
#[derive(Clone, Default)]
pub struct InMemoryNoteRepository {
    notes: Arc<RwLock<Vec<Note>>>,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-filled with notes
    pub fn with_notes(notes: impl IntoIterator<Item = Note>) -> Self {
        Self {
            notes: Arc::new(RwLock::new(notes.into_iter().collect())),
        }
    }
}

impl NoteRepository for InMemoryNoteRepository {
    async fn list(&self) -> NoteResult<Vec<Note>> {
        Ok(self.notes.read().await.clone())
    }

    async fn find_by_id(&self, note_id: &NoteId) -> NoteResult<Option<Note>> {
        let notes = self.notes.read().await;
        Ok(notes.iter().find(|n| &n.note_id == note_id).cloned())
    }

    async fn create(&self, note: &Note) -> NoteResult<()> {
        self.notes.write().await.push(note.clone());
        Ok(())
    }

    async fn update(&self, note: &Note) -> NoteResult<bool> {
        let mut notes = self.notes.write().await;
        match notes.iter_mut().find(|n| n.note_id == note.note_id) {
            Some(stored) => {
                *stored = note.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, note_id: &NoteId) -> NoteResult<bool> {
        let mut notes = self.notes.write().await;
        let before = notes.len();
        notes.retain(|n| &n.note_id != note_id);
        Ok(notes.len() != before)
    }
}
