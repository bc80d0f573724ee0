//! Domain service for user registration and listing.

use thiserror::Error;

use crate::models::User;

/// Errors specific to user operations.
#[derive(Debug, Error)]
pub enum UserError {
    #[error("Username already taken: {0}")]
    DuplicateUsername(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl From<anyhow::Error> for UserError {
    fn from(err: anyhow::Error) -> Self {
        Self::Store(format!("{err:#}"))
    }
}

/// Domain service trait for users.
#[async_trait::async_trait]
pub trait UserService: Send + Sync {
    /// Registers a new user under a freshly generated ID.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::DuplicateUsername`] if the username is in use.
    async fn create_user(&self, username: &str) -> Result<User, UserError>;

    /// Lists every registered user.
    async fn list_users(&self) -> Result<Vec<User>, UserError>;
}
