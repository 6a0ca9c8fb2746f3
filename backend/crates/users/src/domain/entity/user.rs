//! User Entity

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::HashedPassword;

use crate::domain::value_object::username::Username;

/// User entity
///
/// パスワードはハッシュのみ保持する。平文はユースケース内で破棄される。
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub user_id: UserId,
    pub username: Username,
    /// 表示名（任意）
    pub name: Option<String>,
    pub password_hash: HashedPassword,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(username: Username, name: Option<String>, password_hash: HashedPassword) -> Self {
        Self {
            user_id: UserId::new(),
            username,
            name,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
