//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::NoteId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::note::Note;
use crate::domain::repository::NoteRepository;
use crate::domain::value_object::note_content::NoteContent;
use crate::error::NoteResult;

/// PostgreSQL-backed note repository
#[derive(Clone)]
pub struct PgNoteRepository {
    pool: PgPool,
}

impl PgNoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl NoteRepository for PgNoteRepository {
    async fn list(&self) -> NoteResult<Vec<Note>> {
        let rows = sqlx::query_as::<_, NoteRow>(
            r#"
            SELECT
                note_id,
                content,
                important,
                created_at,
                updated_at
            FROM notes
            ORDER BY created_at, note_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(NoteRow::into_note).collect())
    }

    async fn find_by_id(&self, note_id: &NoteId) -> NoteResult<Option<Note>> {
        let row = sqlx::query_as::<_, NoteRow>(
            r#"
            SELECT
                note_id,
                content,
                important,
                created_at,
                updated_at
            FROM notes
            WHERE note_id = $1
            "#,
        )
        .bind(note_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(NoteRow::into_note))
    }

    async fn create(&self, note: &Note) -> NoteResult<()> {
        sqlx::query(
            r#"
            INSERT INTO notes (
                note_id,
                content,
                important,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(note.note_id.as_uuid())
        .bind(note.content.as_str())
        .bind(note.important)
        .bind(note.created_at)
        .bind(note.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, note: &Note) -> NoteResult<bool> {
        let updated = sqlx::query(
            r#"
            UPDATE notes SET
                content = $2,
                important = $3,
                updated_at = $4
            WHERE note_id = $1
            "#,
        )
        .bind(note.note_id.as_uuid())
        .bind(note.content.as_str())
        .bind(note.important)
        .bind(note.updated_at)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated > 0)
    }

    async fn delete(&self, note_id: &NoteId) -> NoteResult<bool> {
        let deleted = sqlx::query("DELETE FROM notes WHERE note_id = $1")
            .bind(note_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct NoteRow {
    note_id: Uuid,
    content: String,
    important: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl NoteRow {
    fn into_note(self) -> Note {
        Note {
            note_id: NoteId::from_uuid(self.note_id),
            content: NoteContent::from_db(self.content),
            important: self.important,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
