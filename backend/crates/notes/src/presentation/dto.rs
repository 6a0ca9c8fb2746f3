//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::note::Note;

/// Create note request
///
/// Fields are optional so that a missing `content` surfaces as a
/// validation error rather than a body rejection. `Default` is the
/// payload of a request without a JSON body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteRequest {
    pub content: Option<String>,
    pub important: Option<bool>,
}

/// Update note request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNoteRequest {
    pub content: Option<String>,
    pub important: Option<bool>,
}

/// Note as exposed over the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    pub id: String,
    pub content: String,
    pub important: bool,
}

impl From<&Note> for NoteResponse {
    fn from(note: &Note) -> Self {
        Self {
            id: note.note_id.to_string(),
            content: note.content.as_str().to_string(),
            important: note.important,
        }
    }
}
