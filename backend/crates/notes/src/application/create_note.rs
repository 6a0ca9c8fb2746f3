//! Create Note Use Case

use std::sync::Arc;

use crate::domain::entity::note::Note;
use crate::domain::repository::NoteRepository;
use crate::domain::value_object::note_content::NoteContent;
use crate::error::NoteResult;

/// Create note input
pub struct CreateNoteInput {
    pub content: Option<String>,
    pub important: Option<bool>,
}

/// Create note use case
pub struct CreateNoteUseCase<R>
where
    R: NoteRepository,
{
    note_repo: Arc<R>,
}

impl<R> CreateNoteUseCase<R>
where
    R: NoteRepository,
{
    pub fn new(note_repo: Arc<R>) -> Self {
        Self { note_repo }
    }

    /// Validate and persist; nothing is written when validation fails
    pub async fn execute(&self, input: CreateNoteInput) -> NoteResult<Note> {
        let content = NoteContent::new(input.content)?;
        let note = Note::new(content, input.important.unwrap_or(false));

        self.note_repo.create(&note).await?;

        tracing::info!(note_id = %note.note_id, "Note created");

        Ok(note)
    }
}
