//! Application Error - Unified error type for the application
//!
//! Defines [`AppError`] struct and [`AppResult<T>`] type alias.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

/// Status used by the default error path when no hint is set.
pub const DEFAULT_STATUS: u16 = 500;

/// アプリケーション統一エラー型（エラーシグナル）
///
/// ストア層やハンドラの入力検証で生成され、エラー分類器で一度だけ消費されます。
///
/// ## Fields
/// * `kind` - エラーの分類（分類器の判別子）
/// * `message` - 人間向けのメッセージ（検証エラーではそのままクライアントへ返る）
/// * `status_hint` - 既定のエラー経路が使う HTTP ステータス（オプション）
/// * `source` - 元のエラー（オプション、デバッグ用）
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::validation("Path `content` is required.");
/// assert_eq!(err.kind(), ErrorKind::Validation);
///
/// let err = AppError::uncategorized("Unsupported media type").with_status_hint(415);
/// assert_eq!(err.status_hint(), 415);
/// ```
pub struct AppError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    status_hint: Option<u16>,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

/// アプリケーション結果型エイリアス
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// 新しいエラーを作成
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            status_hint: None,
            source: None,
        }
    }

    /// 不正な識別子
    #[inline]
    pub fn malformed_id(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::MalformedId, message)
    }

    /// スキーマ検証エラー
    #[inline]
    pub fn validation(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// 未分類エラー（既定のエラー経路へ）
    #[inline]
    pub fn uncategorized(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Uncategorized, message)
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// 既定のエラー経路で使うステータスを設定
    ///
    /// 分類器がローカルに応答する種別では無視されます。
    #[inline]
    pub fn with_status_hint(mut self, status: u16) -> Self {
        self.status_hint = Some(status);
        self
    }

    /// 元のエラーを設定（デバッグ用）
    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// 既定のエラー経路のステータス（未設定なら 500）
    #[inline]
    pub fn status_hint(&self) -> u16 {
        self.status_hint.unwrap_or(DEFAULT_STATUS)
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("AppError");
        builder.field("kind", &self.kind);
        builder.field("message", &self.message);
        if let Some(status) = &self.status_hint {
            builder.field("status_hint", status);
        }
        if let Some(source) = &self.source {
            builder.field("source", source);
        }
        builder.finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_error() {
        let err = AppError::new(ErrorKind::Validation, "Path `content` is required.");
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.message(), "Path `content` is required.");
        assert_eq!(err.status_hint(), DEFAULT_STATUS);
    }

    #[test]
    fn test_convenience_constructors() {
        assert_eq!(AppError::malformed_id("x").kind(), ErrorKind::MalformedId);
        assert_eq!(AppError::validation("x").kind(), ErrorKind::Validation);
        assert_eq!(AppError::uncategorized("x").kind(), ErrorKind::Uncategorized);
    }

    #[test]
    fn test_with_status_hint() {
        let err = AppError::uncategorized("Payload too large").with_status_hint(413);
        assert_eq!(err.status_hint(), 413);
    }

    #[test]
    fn test_with_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let err = AppError::uncategorized("Failed to write").with_source(io_err);
        assert!(err.source().is_some());
        assert!(format!("{:?}", err).contains("disk on fire"));
    }

    #[test]
    fn test_display() {
        let err = AppError::malformed_id("bad id");
        assert_eq!(err.to_string(), "[Malformed Id] bad id");
    }
}
