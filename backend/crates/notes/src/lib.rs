//! Notes Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Note entity, content rules, repository trait
//! - `application/` - Use cases that validate before touching the store
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Routes (mounted under `/api/notes`)
//! - `GET /` - list all notes
//! - `GET /{id}` - fetch one note (404 when absent)
//! - `POST /` - create a note
//! - `PUT /{id}` - replace content/importance
//! - `DELETE /{id}` - delete (204 whether or not it existed)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{NoteError, NoteResult};
pub use infra::memory::InMemoryNoteRepository;
pub use infra::postgres::PgNoteRepository;
pub use presentation::router::notes_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
