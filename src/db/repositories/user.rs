use anyhow::{Context, Result};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    SqlErr, Statement, Value,
};

use crate::entities::{prelude::*, users};
use crate::models::{ExerciseEntry, User, UserDocument};

/// Array-push on the embedded exercise list, done by SQLite in one statement.
const PUSH_EXERCISE_SQL: &str =
    "UPDATE users SET exercises = json_insert(exercises, '$[#]', json(?)) WHERE id = ?";

/// Result of an insert that may hit the username unique index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateUserOutcome {
    Created(User),
    UsernameTaken,
}

pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Get a user and its embedded exercises by ID
    pub async fn get_by_id(&self, id: &str) -> Result<Option<UserDocument>> {
        let user = Users::find_by_id(id.to_string())
            .one(&self.conn)
            .await
            .context("Failed to query user by ID")?;

        user.map(UserDocument::try_from).transpose()
    }

    /// Get user by username
    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = Users::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.conn)
            .await
            .context("Failed to query user by username")?;

        Ok(user.map(User::from))
    }

    /// All users in registration order
    pub async fn list(&self) -> Result<Vec<User>> {
        let rows = Users::find()
            .order_by_asc(users::Column::CreatedAt)
            .order_by_asc(users::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list users")?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    pub async fn insert(&self, id: &str, username: &str) -> Result<CreateUserOutcome> {
        let now = chrono::Utc::now().to_rfc3339();

        let active = users::ActiveModel {
            id: Set(id.to_string()),
            username: Set(username.to_string()),
            exercises: Set("[]".to_string()),
            created_at: Set(now),
        };

        match Users::insert(active).exec_without_returning(&self.conn).await {
            Ok(_) => Ok(CreateUserOutcome::Created(User {
                id: id.to_string(),
                username: username.to_string(),
            })),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(msg)) if msg.contains("username") => {
                    Ok(CreateUserOutcome::UsernameTaken)
                }
                _ => Err(anyhow::Error::new(err).context("Failed to insert user")),
            },
        }
    }

    /// Append an entry to the user's exercise list.
    /// Returns `false` when no user has the given ID.
    pub async fn push_exercise(&self, id: &str, entry: &ExerciseEntry) -> Result<bool> {
        let entry_json = serde_json::to_string(entry)?;
        let backend = self.conn.get_database_backend();

        let result = self
            .conn
            .execute(Statement::from_sql_and_values(
                backend,
                PUSH_EXERCISE_SQL,
                [Value::from(entry_json), Value::from(id)],
            ))
            .await
            .context("Failed to append exercise")?;

        Ok(result.rows_affected() > 0)
    }
}
