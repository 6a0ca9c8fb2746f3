//! Note Error Types
//!
//! This module provides note-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use kernel::error::classify::MALFORMED_ID_MESSAGE;
use thiserror::Error;

use crate::domain::value_object::note_content::NoteContentError;

/// Note-specific result type alias
pub type NoteResult<T> = Result<T, NoteError>;

/// Note-specific error variants
#[derive(Debug, Error)]
pub enum NoteError {
    /// Identifier is not a well-formed note id
    #[error("Malformed note id: {0}")]
    MalformedId(String),

    /// Content failed schema validation
    #[error(transparent)]
    Validation(#[from] NoteContentError),

    /// Request body could not be read as a note payload
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    /// Path segment could not be extracted
    #[error("Invalid request path: {0}")]
    InvalidPath(#[from] PathRejection),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl NoteError {
    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            NoteError::Database(e) => {
                tracing::error!(error = %e, "Note database error");
            }
            _ => {
                tracing::debug!(error = %self, "Note error");
            }
        }
    }
}

impl From<NoteError> for AppError {
    fn from(err: NoteError) -> Self {
        match err {
            NoteError::MalformedId(raw) => AppError::malformed_id(MALFORMED_ID_MESSAGE)
                .with_source(NoteError::MalformedId(raw)),
            NoteError::Validation(e) => AppError::validation(e.to_string()).with_source(e),
            NoteError::InvalidBody(rejection) => AppError::from(rejection),
            NoteError::InvalidPath(rejection) => AppError::from(rejection),
            NoteError::Database(e) => AppError::from(e),
        }
    }
}

impl IntoResponse for NoteError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::error::kind::ErrorKind;

    #[test]
    fn test_malformed_id_maps_to_kind() {
        let err: AppError = NoteError::MalformedId("abc".to_string()).into();
        assert_eq!(err.kind(), ErrorKind::MalformedId);
        assert_eq!(err.message(), "malformed id");
    }

    #[test]
    fn test_validation_keeps_message() {
        let err: AppError = NoteError::Validation(NoteContentError::Missing).into();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.message(), NoteContentError::Missing.to_string());
    }

    #[test]
    fn test_database_error_is_uncategorized() {
        let err: AppError = NoteError::Database(sqlx::Error::PoolTimedOut).into();
        assert_eq!(err.kind(), ErrorKind::Uncategorized);
        assert_eq!(err.status_hint(), 503);
    }
}
