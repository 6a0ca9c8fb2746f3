//! Notes Router

use axum::{Router, routing::get};
use kernel::middleware::unknown_endpoint;
use std::sync::Arc;

use crate::domain::repository::NoteRepository;
use crate::presentation::handlers::{self, NotesAppState};

/// Create the notes router for any repository implementation
///
/// Mount under `/api/notes`. A known path with an unsupported method is
/// answered by the unknown-endpoint responder.
pub fn notes_router<R>(repo: R) -> Router
where
    R: NoteRepository + Clone + Send + Sync + 'static,
{
    let state = NotesAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_notes::<R>).post(handlers::create_note::<R>),
        )
        .route(
            "/{id}",
            get(handlers::get_note::<R>)
                .put(handlers::update_note::<R>)
                .delete(handlers::delete_note::<R>),
        )
        .method_not_allowed_fallback(unknown_endpoint)
        .with_state(state)
}
