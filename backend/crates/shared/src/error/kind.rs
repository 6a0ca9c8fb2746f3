//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum consumed by the error classifier.

/// エラー種別の列挙体
///
/// エラー分類器（[`classify`](super::classify::classify)）が参照する判別子です。
/// 分類は全域的（total）で、どのエラーも必ずいずれか一つに属します。
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::MalformedId;
/// assert_eq!(kind.as_str(), "Malformed Id");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 識別子がストアのキーとして不正な形式
    MalformedId,
    /// スキーマ検証の失敗（必須項目の欠落、一意制約違反など）
    Validation,
    /// 上記以外。既定のエラー経路へ委譲される
    Uncategorized,
}

impl ErrorKind {
    /// ユーザー向けの文字列表現を取得
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MalformedId => "Malformed Id",
            ErrorKind::Validation => "Validation Failed",
            ErrorKind::Uncategorized => "Uncategorized",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
