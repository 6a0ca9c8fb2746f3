//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infrastructure layer.

use kernel::id::NoteId;

use crate::domain::entity::note::Note;
use crate::error::NoteResult;

/// Note repository trait
#[trait_variant::make(NoteRepository: Send)]
pub trait LocalNoteRepository {
    /// List all notes, oldest first
    async fn list(&self) -> NoteResult<Vec<Note>>;

    /// Find note by ID
    ///
    /// An unknown id is `Ok(None)`, not an error.
    async fn find_by_id(&self, note_id: &NoteId) -> NoteResult<Option<Note>>;

    /// Create a new note
    async fn create(&self, note: &Note) -> NoteResult<()>;

    /// Update content and importance; `false` when the note does not exist
    async fn update(&self, note: &Note) -> NoteResult<bool>;

    /// Delete a note; `false` when the note did not exist
    async fn delete(&self, note_id: &NoteId) -> NoteResult<bool>;
}
