//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::extract::JsonBody;
use kernel::id::NoteId;
use std::sync::Arc;

use crate::application::{CreateNoteInput, CreateNoteUseCase, UpdateNoteInput, UpdateNoteUseCase};
use crate::domain::repository::NoteRepository;
use crate::error::{NoteError, NoteResult};
use crate::presentation::dto::{CreateNoteRequest, NoteResponse, UpdateNoteRequest};

/// Shared state for note handlers
#[derive(Clone)]
pub struct NotesAppState<R>
where
    R: NoteRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

fn parse_note_id(path: Result<Path<String>, PathRejection>) -> NoteResult<NoteId> {
    let Path(raw) = path?;
    raw.parse().map_err(|_| NoteError::MalformedId(raw))
}

/// GET /api/notes
pub async fn list_notes<R>(State(state): State<NotesAppState<R>>) -> NoteResult<Json<Vec<NoteResponse>>>
where
    R: NoteRepository + Clone + Send + Sync + 'static,
{
    let notes = state.repo.list().await?;

    Ok(Json(notes.iter().map(NoteResponse::from).collect()))
}

/// GET /api/notes/{id}
///
/// An unknown but well-formed id is a plain `404` with an empty body.
pub async fn get_note<R>(
    State(state): State<NotesAppState<R>>,
    path: Result<Path<String>, PathRejection>,
) -> NoteResult<Response>
where
    R: NoteRepository + Clone + Send + Sync + 'static,
{
    let note_id = parse_note_id(path)?;

    match state.repo.find_by_id(&note_id).await? {
        Some(note) => Ok(Json(NoteResponse::from(&note)).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// POST /api/notes
pub async fn create_note<R>(
    State(state): State<NotesAppState<R>>,
    payload: Result<JsonBody<CreateNoteRequest>, JsonRejection>,
) -> NoteResult<(StatusCode, Json<NoteResponse>)>
where
    R: NoteRepository + Clone + Send + Sync + 'static,
{
    let JsonBody(req) = payload?;

    let use_case = CreateNoteUseCase::new(state.repo.clone());

    let note = use_case
        .execute(CreateNoteInput {
            content: req.content,
            important: req.important,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(NoteResponse::from(&note))))
}

/// PUT /api/notes/{id}
pub async fn update_note<R>(
    State(state): State<NotesAppState<R>>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<JsonBody<UpdateNoteRequest>, JsonRejection>,
) -> NoteResult<Response>
where
    R: NoteRepository + Clone + Send + Sync + 'static,
{
    let note_id = parse_note_id(path)?;
    let JsonBody(req) = payload?;

    let use_case = UpdateNoteUseCase::new(state.repo.clone());

    let updated = use_case
        .execute(
            &note_id,
            UpdateNoteInput {
                content: req.content,
                important: req.important,
            },
        )
        .await?;

    match updated {
        Some(note) => Ok(Json(NoteResponse::from(&note)).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// DELETE /api/notes/{id}
///
/// `204` whether or not the note existed.
pub async fn delete_note<R>(
    State(state): State<NotesAppState<R>>,
    path: Result<Path<String>, PathRejection>,
) -> NoteResult<StatusCode>
where
    R: NoteRepository + Clone + Send + Sync + 'static,
{
    let note_id = parse_note_id(path)?;

    if state.repo.delete(&note_id).await? {
        tracing::info!(note_id = %note_id, "Note deleted");
    } else {
        tracing::debug!(note_id = %note_id, "Delete requested for unknown note");
    }

    Ok(StatusCode::NO_CONTENT)
}
