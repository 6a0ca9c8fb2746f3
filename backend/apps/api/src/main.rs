//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use api::{AppConfig, build_app, server};
use notes::{InMemoryNoteRepository, PgNoteRepository};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use users::{InMemoryUserRepository, PgUserRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,notes=info,users=info,kernel=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    tracing::info!(env = ?config.env, "Configuration loaded");

    let app = match &config.database_url {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.database_max_connections)
                .connect(database_url)
                .await?;

            tracing::info!("Connected to database");

            // Run migrations
            sqlx::migrate!("../../../database/migrations")
                .run(&pool)
                .await?;

            tracing::info!("Migrations completed");

            build_app(
                PgNoteRepository::new(pool.clone()),
                PgUserRepository::new(pool),
                &config,
            )
        }
        None => {
            tracing::warn!("No database URL configured, using in-memory stores");

            build_app(
                InMemoryNoteRepository::new(),
                InMemoryUserRepository::new(),
                &config,
            )
        }
    };

    server::serve(app, config.port).await
}
