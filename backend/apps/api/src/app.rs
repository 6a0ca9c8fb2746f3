//! Router assembly
//!
//! Middleware order for every request:
//! body size limit → request logger → resource routers → static files →
//! unknown endpoint. Handler errors become responses through the error
//! classifier.

use axum::Router;
use axum::handler::HandlerWithoutStateExt;
use axum::http::{Method, header};
use axum::middleware;
use kernel::middleware::{MAX_BUFFERED_BODY_BYTES, request_logger, unknown_endpoint};
use notes::domain::repository::NoteRepository;
use notes::notes_router;
use tower_http::cors::{AllowHeaders, AllowMethods, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use users::domain::repository::UserRepository;
use users::users_router;

use crate::config::AppConfig;

/// Build the application router from the given stores
pub fn build_app<N, U>(note_repo: N, user_repo: U, config: &AppConfig) -> Router
where
    N: NoteRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let static_files = ServeDir::new(&config.static_dir)
        .call_fallback_on_method_not_allowed(true)
        .fallback(unknown_endpoint.into_service());

    Router::new()
        .nest("/api/notes", notes_router(note_repo))
        .nest("/api/users", users_router(user_repo, config.users_config()))
        .fallback_service(static_files)
        .layer(middleware::from_fn(request_logger))
        .layer(RequestBodyLimitLayer::new(MAX_BUFFERED_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config))
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    match &config.frontend_origins {
        Some(origins) => CorsLayer::new()
            .allow_origin(origins.clone())
            .allow_methods(AllowMethods::list([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ]))
            .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT])),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    }
}
