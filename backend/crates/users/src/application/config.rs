//! Application Configuration
//!
//! Configuration for the Users application layer.

/// Users application configuration
#[derive(Debug, Clone, Default)]
pub struct UsersConfig {
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl UsersConfig {
    /// Create config with a password pepper
    pub fn with_pepper(pepper: impl Into<Vec<u8>>) -> Self {
        Self {
            password_pepper: Some(pepper.into()),
        }
    }

    /// Get pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
