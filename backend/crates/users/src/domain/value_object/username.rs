//! Username Value Object
//!
//! ユーザー名は、ユーザーを識別するための公開識別子。
//! 一意性はリポジトリ側で保証する。
//!
//! ## 設計方針
//! - NFKC正規化 → 前後の空白除去 → 検証 の順で処理
//! - 大文字小文字は区別する（正規形への小文字化はしない）
//!
//! ## 不変条件
//! - 長さ: 3〜30文字（正規化後）
//! - 途中の空白・制御文字禁止

use derive_more::Display;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

/// Minimum length for username (in characters)
pub const USERNAME_MIN_LENGTH: usize = 3;

/// Maximum length for username (in characters)
pub const USERNAME_MAX_LENGTH: usize = 30;

/// Message used for a taken username, also produced by the store's
/// unique constraint
pub const USERNAME_TAKEN_MESSAGE: &str = "expected `username` to be unique";

/// Error returned when username validation fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsernameError {
    #[error("User validation failed: username: Path `username` is required.")]
    Missing,

    #[error(
        "User validation failed: username: Path `username` (`{value}`) is shorter than the minimum allowed length ({min})."
    )]
    TooShort { value: String, min: usize },

    #[error(
        "User validation failed: username: Path `username` (`{value}`) is longer than the maximum allowed length ({max})."
    )]
    TooLong { value: String, max: usize },

    #[error("User validation failed: username: Path `username` (`{value}`) is invalid.")]
    InvalidCharacter { value: String },
}

/// Validated username
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct Username(String);

impl Username {
    /// Normalize and validate a username from a request
    pub fn new(raw: Option<String>) -> Result<Self, UsernameError> {
        let raw = raw.ok_or(UsernameError::Missing)?;
        let normalized: String = raw.nfkc().collect();
        let value = normalized.trim().to_string();

        if value.is_empty() {
            return Err(UsernameError::Missing);
        }

        let char_count = value.chars().count();

        if char_count < USERNAME_MIN_LENGTH {
            return Err(UsernameError::TooShort {
                value,
                min: USERNAME_MIN_LENGTH,
            });
        }

        if char_count > USERNAME_MAX_LENGTH {
            return Err(UsernameError::TooLong {
                value,
                max: USERNAME_MAX_LENGTH,
            });
        }

        if value
            .chars()
            .any(|ch| ch.is_whitespace() || ch.is_control())
        {
            return Err(UsernameError::InvalidCharacter { value });
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

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn username(s: &str) -> Result<Username, UsernameError> {
        Username::new(Some(s.to_string()))
    }

    #[test]
    fn test_valid_usernames() {
        assert_eq!(username("root").unwrap().as_str(), "root");
        assert_eq!(username("mluukkai").unwrap().as_str(), "mluukkai");
        assert_eq!(username("Matti_L").unwrap().as_str(), "Matti_L");
    }

    #[test]
    fn test_trims_and_normalizes() {
        assert_eq!(username("  root  ").unwrap().as_str(), "root");
        // 全角 → 半角
        assert_eq!(username("ｒｏｏｔ").unwrap().as_str(), "root");
    }

    #[test]
    fn test_missing() {
        assert_eq!(Username::new(None), Err(UsernameError::Missing));
        assert_eq!(username("   "), Err(UsernameError::Missing));
    }

    #[test]
    fn test_length_bounds() {
        assert!(matches!(
            username("ab"),
            Err(UsernameError::TooShort { min: 3, .. })
        ));
        assert!(username(&"a".repeat(USERNAME_MAX_LENGTH)).is_ok());
        assert!(matches!(
            username(&"a".repeat(USERNAME_MAX_LENGTH + 1)),
            Err(UsernameError::TooLong { max: 30, .. })
        ));
    }

    #[test]
    fn test_inner_whitespace_rejected() {
        assert!(matches!(
            username("matti luukkainen"),
            Err(UsernameError::InvalidCharacter { .. })
        ));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            UsernameError::Missing.to_string(),
            "User validation failed: username: Path `username` is required."
        );
        assert_eq!(
            username("ab").unwrap_err().to_string(),
            "User validation failed: username: Path `username` (`ab`) is shorter than the minimum allowed length (3)."
        );
    }
}
