//! Users Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, username rules, repository trait
//! - `application/` - User creation (validation, uniqueness, hashing)
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Routes (mounted under `/api/users`)
//! - `GET /` - list all users (without password hashes)
//! - `POST /` - create a user

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::UsersConfig;
pub use error::{UserError, UserResult};
pub use infra::memory::InMemoryUserRepository;
pub use infra::postgres::PgUserRepository;
pub use presentation::router::users_router;

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
