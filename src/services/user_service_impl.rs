//! `SeaORM` implementation of the `UserService` trait.

use crate::db::{CreateUserOutcome, Store};
use crate::models::User;
use crate::models::user::generate_user_id;
use crate::services::user_service::{UserError, UserService};
use async_trait::async_trait;
use tracing::info;

pub struct SeaOrmUserService {
    store: Store,
}

impl SeaOrmUserService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserService for SeaOrmUserService {
    async fn create_user(&self, username: &str) -> Result<User, UserError> {
        // Fast path; the unique index still catches concurrent registrations.
        if self.store.get_user_by_username(username).await?.is_some() {
            return Err(UserError::DuplicateUsername(username.to_string()));
        }

        let id = generate_user_id();

        match self.store.create_user(&id, username).await? {
            CreateUserOutcome::Created(user) => {
                info!(user_id = %user.id, username = %user.username, "User registered");
                Ok(user)
            }
            CreateUserOutcome::UsernameTaken => {
                Err(UserError::DuplicateUsername(username.to_string()))
            }
        }
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        Ok(self.store.list_users().await?)
    }
}
