//! Note Content Value Object
//!
//! ノートの本文。必須で、最低 [`NOTE_CONTENT_MIN_LENGTH`] 文字。
//!
//! 検証エラーのメッセージはそのままクライアントに返されるため、
//! 文言は API の一部として扱う。

use derive_more::Display;
use thiserror::Error;

/// Minimum content length (in characters)
pub const NOTE_CONTENT_MIN_LENGTH: usize = 5;

/// Error returned when note content validation fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteContentError {
    /// Content absent or empty
    #[error("Note validation failed: content: Path `content` is required.")]
    Missing,

    /// Content shorter than [`NOTE_CONTENT_MIN_LENGTH`]
    #[error(
        "Note validation failed: content: Path `content` (`{value}`) is shorter than the minimum allowed length ({min})."
    )]
    TooShort { value: String, min: usize },
}

/// Validated note content
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub struct NoteContent(String);

impl NoteContent {
    /// Validate raw content from a request
    pub fn new(raw: Option<String>) -> Result<Self, NoteContentError> {
        let value = raw.ok_or(NoteContentError::Missing)?;

        if value.is_empty() {
            return Err(NoteContentError::Missing);
        }

        if value.chars().count() < NOTE_CONTENT_MIN_LENGTH {
            return Err(NoteContentError::TooShort {
                value,
                min: NOTE_CONTENT_MIN_LENGTH,
            });
        }

        Ok(Self(value))
    }

    /// Restore from storage without re-validating
    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NoteContent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
