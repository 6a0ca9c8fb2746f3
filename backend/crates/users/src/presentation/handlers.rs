//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use kernel::extract::JsonBody;
use std::sync::Arc;

use crate::application::{CreateUserInput, CreateUserUseCase, UsersConfig};
use crate::domain::repository::UserRepository;
use crate::error::UserResult;
use crate::presentation::dto::{CreateUserRequest, UserResponse};

/// Shared state for user handlers
#[derive(Clone)]
pub struct UsersAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<UsersConfig>,
}

/// GET /api/users
pub async fn list_users<R>(State(state): State<UsersAppState<R>>) -> UserResult<Json<Vec<UserResponse>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let users = state.repo.list().await?;

    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

/// POST /api/users
pub async fn create_user<R>(
    State(state): State<UsersAppState<R>>,
    payload: Result<JsonBody<CreateUserRequest>, JsonRejection>,
) -> UserResult<(StatusCode, Json<UserResponse>)>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let JsonBody(req) = payload?;

    let use_case = CreateUserUseCase::new(state.repo.clone(), state.config.clone());

    let user = use_case
        .execute(CreateUserInput {
            username: req.username,
            name: req.name,
            password: req.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}
