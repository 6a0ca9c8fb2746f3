//! User Error Types
//!
//! This module provides user-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use platform::password::{PasswordHashError, PasswordPolicyError};
use thiserror::Error;

use crate::domain::value_object::username::{USERNAME_TAKEN_MESSAGE, UsernameError};

/// User-specific result type alias
pub type UserResult<T> = Result<T, UserError>;

/// User-specific error variants
#[derive(Debug, Error)]
pub enum UserError {
    /// Username failed schema validation
    #[error(transparent)]
    InvalidUsername(#[from] UsernameError),

    /// Password violates the password policy
    #[error(transparent)]
    InvalidPassword(#[from] PasswordPolicyError),

    /// Username already exists
    #[error("{}", USERNAME_TAKEN_MESSAGE)]
    UsernameTaken,

    /// Request body could not be read as a user payload
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    /// Password hashing failed
    #[error(transparent)]
    PasswordHash(#[from] PasswordHashError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl UserError {
    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            UserError::Database(e) => {
                tracing::error!(error = %e, "User database error");
            }
            UserError::PasswordHash(e) => {
                tracing::error!(error = %e, "Password hashing error");
            }
            UserError::UsernameTaken => {
                tracing::info!("Username already taken");
            }
            _ => {
                tracing::debug!(error = %self, "User error");
            }
        }
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidUsername(e) => AppError::validation(e.to_string()).with_source(e),
            UserError::InvalidPassword(e) => AppError::validation(e.to_string()).with_source(e),
            UserError::UsernameTaken => AppError::validation(USERNAME_TAKEN_MESSAGE),
            UserError::InvalidBody(rejection) => AppError::from(rejection),
            UserError::PasswordHash(e) => {
                AppError::uncategorized("Password hashing failed").with_source(e)
            }
            UserError::Database(e) => AppError::from(e),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
