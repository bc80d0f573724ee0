//! Domain service for logging exercises and reading exercise logs.

use thiserror::Error;

use crate::models::{ExerciseEntry, User};
use crate::services::log_query::LogQuery;

/// Errors specific to exercise operations.
#[derive(Debug, Error)]
pub enum ExerciseError {
    #[error("Unknown userId '{0}'")]
    UserNotFound(String),

    #[error("Invalid date '{0}', expected yyyy-mm-dd")]
    InvalidDateFormat(String),

    #[error("Invalid duration '{0}', expected an integer")]
    InvalidDuration(String),

    #[error("Invalid limit '{0}', expected a non-negative integer")]
    InvalidLimit(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl From<anyhow::Error> for ExerciseError {
    fn from(err: anyhow::Error) -> Self {
        Self::Store(format!("{err:#}"))
    }
}

/// Raw exercise fields as received from a client.
#[derive(Debug, Clone)]
pub struct ExerciseInput {
    pub description: String,
    pub duration: String,
    /// Defaults to today when absent or empty.
    pub date: Option<String>,
}

/// A user's filtered and truncated exercise log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseLog {
    pub user: User,
    pub entries: Vec<ExerciseEntry>,
}

impl ExerciseLog {
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

/// Domain service trait for exercises.
#[async_trait::async_trait]
pub trait ExerciseService: Send + Sync {
    /// Appends an exercise to a user's log and returns the owner with the stored entry.
    ///
    /// # Errors
    ///
    /// Returns [`ExerciseError::UserNotFound`] if the user does not exist,
    /// [`ExerciseError::InvalidDuration`] or [`ExerciseError::InvalidDateFormat`]
    /// for unparseable input.
    async fn add_exercise(
        &self,
        user_id: &str,
        input: ExerciseInput,
    ) -> Result<(User, ExerciseEntry), ExerciseError>;

    /// Returns the user's log filtered and truncated per `query`.
    ///
    /// # Errors
    ///
    /// Returns [`ExerciseError::UserNotFound`] if the user does not exist.
    async fn get_log(&self, user_id: &str, query: &LogQuery) -> Result<ExerciseLog, ExerciseError>;
}
