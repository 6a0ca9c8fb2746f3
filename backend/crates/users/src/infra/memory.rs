//! In-Memory Repository Implementation
//!
//! Used by tests and when no database is configured. Uniqueness of
//! usernames is enforced under the write lock.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::username::Username;
use crate::error::{UserError, UserResult};

/// In-memory user repository
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-filled with users
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users.into_iter().collect())),
        }
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> UserResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn exists_by_username(&self, username: &Username) -> UserResult<bool> {
        let users = self.users.read().await;
        Ok(users.iter().any(|u| &u.username == username))
    }

    async fn create(&self, user: &User) -> UserResult<()> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.username == user.username) {
            return Err(UserError::UsernameTaken);
        }
        users.push(user.clone());
        Ok(())
    }
}
