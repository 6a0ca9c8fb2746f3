//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::username::Username;
use crate::error::UserResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// List all users, oldest first
    async fn list(&self) -> UserResult<Vec<User>>;

    /// Check if a username is already taken
    async fn exists_by_username(&self, username: &Username) -> UserResult<bool>;

    /// Create a new user
    ///
    /// A taken username is `UserError::UsernameTaken`, even when the
    /// earlier existence check passed.
    async fn create(&self, user: &User) -> UserResult<()>;
}
