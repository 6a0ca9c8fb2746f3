//! Update Note Use Case

use std::sync::Arc;

use kernel::id::NoteId;

use crate::domain::entity::note::Note;
use crate::domain::repository::NoteRepository;
use crate::domain::value_object::note_content::NoteContent;
use crate::error::NoteResult;

/// Update note input
///
/// `important: None` keeps the current value.
pub struct UpdateNoteInput {
    pub content: Option<String>,
    pub important: Option<bool>,
}

/// Update note use case
pub struct UpdateNoteUseCase<R>
where
    R: NoteRepository,
{
    note_repo: Arc<R>,
}

impl<R> UpdateNoteUseCase<R>
where
    R: NoteRepository,
{
    pub fn new(note_repo: Arc<R>) -> Self {
        Self { note_repo }
    }

    /// Returns `Ok(None)` when no note has this id
    pub async fn execute(&self, note_id: &NoteId, input: UpdateNoteInput) -> NoteResult<Option<Note>> {
        let content = NoteContent::new(input.content)?;

        let Some(mut note) = self.note_repo.find_by_id(note_id).await? else {
            return Ok(None);
        };

        let important = input.important.unwrap_or(note.important);
        note.revise(content, important);

        // Deleted between the read and the write
        if !self.note_repo.update(&note).await? {
            return Ok(None);
        }

        tracing::info!(note_id = %note.note_id, "Note updated");

        Ok(Some(note))
    }
}
