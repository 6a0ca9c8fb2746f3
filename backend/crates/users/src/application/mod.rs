//! Application Layer
//!
//! Use cases and application configuration.

pub mod config;
pub mod create_user;

// Re-exports
pub use config::UsersConfig;
pub use create_user::{CreateUserInput, CreateUserUseCase};
