//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" shared by the notes and users
//! resources:
//! - The error signal ([`error::app_error::AppError`]) and its kinds
//! - The error classifier that turns error signals into HTTP responses
//! - Typed document IDs
//! - A JSON body extractor that treats a missing payload as empty
//! - Request middleware (request logger, unknown-endpoint responder)
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod classify;
    pub mod conversions;
    pub mod kind;
}
#[cfg(feature = "axum")]
pub mod extract;
pub mod id;
#[cfg(feature = "axum")]
pub mod middleware;
