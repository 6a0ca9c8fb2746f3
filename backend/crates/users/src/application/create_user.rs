//! Create User Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use platform::password::{ClearTextPassword, PasswordPolicyError};

use crate::application::config::UsersConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::username::Username;
use crate::error::{UserError, UserResult};

/// Create user input
pub struct CreateUserInput {
    pub username: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

/// Create user use case
pub struct CreateUserUseCase<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
    config: Arc<UsersConfig>,
}

impl<R> CreateUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>, config: Arc<UsersConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: CreateUserInput) -> UserResult<User> {
        // Validate username
        let username = Username::new(input.username)?;

        // Validate password before touching the store
        let password =
            ClearTextPassword::new(input.password.ok_or(PasswordPolicyError::Missing)?)?;

        // Check if username is taken
        if self.user_repo.exists_by_username(&username).await? {
            return Err(UserError::UsernameTaken);
        }

        let password_hash = password.hash(self.config.pepper())?;

        let name = input
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        let user = User::new(username, name, password_hash);

        // Persist
        self.user_repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            username = %user.username,
            "User created"
        );

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemoryUserRepository;

    fn use_case(repo: &Arc<InMemoryUserRepository>) -> CreateUserUseCase<InMemoryUserRepository> {
        CreateUserUseCase::new(repo.clone(), Arc::new(UsersConfig::default()))
    }

    fn input(username: &str, password: &str) -> CreateUserInput {
        CreateUserInput {
            username: Some(username.to_string()),
            name: Some("Matti Luukkainen".to_string()),
            password: Some(password.to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_hashes_password() {
        let repo = Arc::new(InMemoryUserRepository::new());

        let user = use_case(&repo)
            .execute(input("mluukkai", "salainen"))
            .await
            .unwrap();

        assert_eq!(user.username.as_str(), "mluukkai");
        assert_eq!(user.name.as_deref(), Some("Matti Luukkainen"));
        assert_ne!(user.password_hash.as_phc_string(), "salainen");
        let password = ClearTextPassword::new_unchecked("salainen".to_string());
        assert!(user.password_hash.verify(&password, None));
        assert_eq!(repo.list().await.unwrap(), vec![user]);
    }

    #[tokio::test]
    async fn test_duplicate_username() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let use_case = use_case(&repo);
        use_case.execute(input("root", "sekret")).await.unwrap();

        let result = use_case.execute(input("root", "salainen")).await;

        assert!(matches!(result, Err(UserError::UsernameTaken)));
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_short_password_is_rejected() {
        let repo = Arc::new(InMemoryUserRepository::new());

        let result = use_case(&repo).execute(input("mluukkai", "ab")).await;

        assert!(matches!(
            result,
            Err(UserError::InvalidPassword(PasswordPolicyError::TooShort { .. }))
        ));
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_password_is_rejected() {
        let repo = Arc::new(InMemoryUserRepository::new());

        let result = use_case(&repo)
            .execute(CreateUserInput {
                username: Some("mluukkai".to_string()),
                name: None,
                password: None,
            })
            .await;

        assert!(matches!(
            result,
            Err(UserError::InvalidPassword(PasswordPolicyError::Missing))
        ));
    }

    #[tokio::test]
    async fn test_blank_name_is_dropped() {
        let repo = Arc::new(InMemoryUserRepository::new());

        let user = use_case(&repo)
            .execute(CreateUserInput {
                username: Some("hellas".to_string()),
                name: Some("   ".to_string()),
                password: Some("salainen".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(user.name, None);
    }

    #[tokio::test]
    async fn test_pepper_is_applied() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let use_case = CreateUserUseCase::new(
            repo.clone(),
            Arc::new(UsersConfig::with_pepper(b"pepper".to_vec())),
        );

        let user = use_case.execute(input("peppered", "salainen")).await.unwrap();

        let password = ClearTextPassword::new_unchecked("salainen".to_string());
        assert!(user.password_hash.verify(&password, Some(b"pepper")));
        assert!(!user.password_hash.verify(&password, None));
    }
}
