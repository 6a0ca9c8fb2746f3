//! Application Configuration
//!
//! 環境変数から読み込む。`.env` は `main` で `dotenvy` により事前に読み込まれる。

use std::path::PathBuf;
use std::str::FromStr;

use axum::http::HeaderValue;
use thiserror::Error;
use users::UsersConfig;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_STATIC_DIR: &str = "dist";

/// Configuration errors, reported at startup
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a valid port number (got `{0}`)")]
    InvalidPort(String),

    #[error("APP_ENV must be one of development, production, test (got `{0}`)")]
    InvalidEnv(String),

    #[error("DATABASE_MAX_CONNECTIONS must be a positive integer (got `{0}`)")]
    InvalidMaxConnections(String),

    #[error("FRONTEND_ORIGINS contains an invalid origin: `{0}`")]
    InvalidOrigin(String),
}

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnv {
    #[default]
    Development,
    Production,
    Test,
}

impl FromStr for AppEnv {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            "test" => Ok(Self::Test),
            _ => Err(ConfigError::InvalidEnv(s.to_string())),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub env: AppEnv,
    /// `None` → in-memory stores
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub static_dir: PathBuf,
    /// `None` → permissive CORS
    pub frontend_origins: Option<Vec<HeaderValue>>,
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            env: AppEnv::default(),
            database_url: None,
            database_max_connections: DEFAULT_MAX_CONNECTIONS,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            frontend_origins: None,
            password_pepper: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let env = match get("APP_ENV") {
            Some(raw) => raw.parse()?,
            None => AppEnv::default(),
        };

        // テスト時は TEST_DATABASE_URL を優先
        let database_url = match env {
            AppEnv::Test => get("TEST_DATABASE_URL"),
            _ => get("DATABASE_URL"),
        };

        let database_max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidMaxConnections(raw)),
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let static_dir = get("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        let frontend_origins = get("FRONTEND_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .transpose()?;

        let password_pepper = get("PASSWORD_PEPPER").map(String::into_bytes);

        Ok(Self {
            port,
            env,
            database_url,
            database_max_connections,
            static_dir,
            frontend_origins,
            password_pepper,
        })
    }

    /// Configuration handed to the users domain
    pub fn users_config(&self) -> UsersConfig {
        UsersConfig {
            password_pepper: self.password_pepper.clone(),
        }
    }
}

fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidOrigin(origin.to_string()))
        })
        .collect()
}
