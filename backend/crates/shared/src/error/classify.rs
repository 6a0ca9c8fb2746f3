//! Error Classifier
//!
//! The single place where an [`AppError`] becomes an HTTP response. Rules are
//! evaluated in order and the first match wins:
//!
//! 1. [`ErrorKind::MalformedId`] → `400 {"error": "malformed id"}`
//! 2. [`ErrorKind::Validation`] → `400 {"error": <message>}` (verbatim)
//! 3. anything else → delegated to the default error path
//!
//! [`classify`] is pure; the response itself is produced by the
//! `IntoResponse` impl for [`AppError`] (feature `axum`).

use serde::{Deserialize, Serialize};

use super::app_error::AppError;
use super::kind::ErrorKind;

/// Body returned for malformed identifiers, regardless of the error message.
pub const MALFORMED_ID_MESSAGE: &str = "malformed id";

/// Status used by both locally handled rules.
pub const HANDLED_STATUS: u16 = 400;

/// JSON error payload: `{ "error": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Outcome of classifying an error signal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The classifier produced a terminal response.
    Responded { status: u16, body: ErrorBody },
    /// Not handled here; the default error path reports it.
    Delegated,
}

/// Classify an error signal into a response, or delegate it.
pub fn classify(err: &AppError) -> Classification {
    match err.kind() {
        ErrorKind::MalformedId => Classification::Responded {
            status: HANDLED_STATUS,
            body: ErrorBody::new(MALFORMED_ID_MESSAGE),
        },
        ErrorKind::Validation => Classification::Responded {
            status: HANDLED_STATUS,
            body: ErrorBody::new(err.message()),
        },
        ErrorKind::Uncategorized => Classification::Delegated,
    }
}

#[cfg(feature = "axum")]
mod response {
    use axum::Json;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};

    use super::{Classification, classify};
    use crate::error::app_error::AppError;

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            match classify(&self) {
                Classification::Responded { status, body } => {
                    tracing::debug!(
                        kind = %self.kind(),
                        message = %self.message(),
                        "Request rejected"
                    );
                    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_REQUEST);
                    (status, Json(body)).into_response()
                }
                Classification::Delegated => default_error_response(self),
            }
        }
    }

    /// Default error path for errors the classifier does not handle
    ///
    /// Responds with the error's status hint and the canonical reason phrase
    /// as plain text. Server errors are logged at `error`, the rest at `warn`.
    pub fn default_error_response(err: AppError) -> Response {
        let status = StatusCode::from_u16(err.status_hint())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(
                error = %err,
                source = ?std::error::Error::source(&err),
                status = status.as_u16(),
                "Unhandled error"
            );
        } else {
            tracing::warn!(error = %err, status = status.as_u16(), "Unhandled error");
        }

        let reason = status.canonical_reason().unwrap_or("Error");
        (status, reason).into_response()
    }
}

#[cfg(feature = "axum")]
pub use response::default_error_response;
