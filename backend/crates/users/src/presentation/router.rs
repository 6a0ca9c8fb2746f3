//! Users Router

use axum::{Router, routing::get};
use kernel::middleware::unknown_endpoint;
use std::sync::Arc;

use crate::application::UsersConfig;
use crate::domain::repository::UserRepository;
use crate::presentation::handlers::{self, UsersAppState};

/// Create the users router for any repository implementation
///
/// Mount under `/api/users`.
pub fn users_router<R>(repo: R, config: UsersConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = UsersAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_users::<R>).post(handlers::create_user::<R>),
        )
        .method_not_allowed_fallback(unknown_endpoint)
        .with_state(state)
}
