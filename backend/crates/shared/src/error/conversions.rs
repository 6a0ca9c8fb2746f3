//! Error conversions - From implementations for common error types
//!
//! Every conversion picks exactly one [`ErrorKind`]. Failures that are not
//! about identifiers or schema rules end up `Uncategorized`, with a status
//! hint for the default error path where one is meaningful.

use super::app_error::AppError;
use super::classify::MALFORMED_ID_MESSAGE;

// ============================================================================
// Identifier conversions
// ============================================================================

impl From<uuid::Error> for AppError {
    fn from(err: uuid::Error) -> Self {
        AppError::malformed_id(MALFORMED_ID_MESSAGE).with_source(err)
    }
}

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::PoolTimedOut => AppError::uncategorized("Database connection pool exhausted")
                .with_status_hint(503)
                .with_source(err),
            sqlx::Error::Database(db_err) => {
                // PostgreSQL specific error codes
                // https://www.postgresql.org/docs/current/errcodes-appendix.html
                let app_err = match db_err.code().as_deref() {
                    // Class 22: Data Exception
                    Some("22P02") => AppError::malformed_id(MALFORMED_ID_MESSAGE),
                    // Class 23: Integrity Constraint Violation
                    Some("23502") => AppError::validation("Required field is null"),
                    Some("23505") => AppError::validation("Duplicate key value"),
                    Some("23514") => AppError::validation("Check constraint violation"),
                    // Class 53: Insufficient Resources, Class 57: Operator Intervention
                    Some(code) if code.starts_with("53") || code.starts_with("57") => {
                        AppError::uncategorized("Database unavailable").with_status_hint(503)
                    }
                    _ => AppError::uncategorized("Database error"),
                };
                app_err.with_source(err)
            }
            sqlx::Error::Io(_) => AppError::uncategorized("Database connection error")
                .with_status_hint(503)
                .with_source(err),
            _ => AppError::uncategorized("Database error").with_source(err),
        }
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        use axum::extract::rejection::JsonRejection;

        let status = rejection.status().as_u16();
        let message = rejection.body_text();
        match rejection {
            JsonRejection::JsonDataError(_) => AppError::validation(message),
            _ => AppError::uncategorized(message).with_status_hint(status),
        }
    }
}

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::PathRejection> for AppError {
    fn from(rejection: axum::extract::rejection::PathRejection) -> Self {
        let status = rejection.status().as_u16();
        AppError::uncategorized(rejection.body_text()).with_status_hint(status)
    }
}
