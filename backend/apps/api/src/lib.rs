//! Notes API
//!
//! REST backend for notes and users:
//! - `/api/notes` - see the `notes` crate
//! - `/api/users` - see the `users` crate
//! - everything else: static frontend files, then `404 {"error":"unknown endpoint"}`

pub mod app;
pub mod config;
pub mod server;

pub use app::build_app;
pub use config::{AppConfig, AppEnv, ConfigError};
