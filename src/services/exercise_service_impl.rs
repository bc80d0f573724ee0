//! `SeaORM` implementation of the `ExerciseService` trait.

use crate::db::Store;
use crate::models::exercise::{parse_duration, parse_entry_date};
use crate::models::{ExerciseEntry, User};
use crate::services::exercise_service::{
    ExerciseError, ExerciseInput, ExerciseLog, ExerciseService,
};
use crate::services::log_query::LogQuery;
use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use tracing::{debug, info};

pub struct SeaOrmExerciseService {
    store: Store,
}

impl SeaOrmExerciseService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

fn resolve_date(raw: Option<&str>) -> Result<NaiveDate, ExerciseError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(Local::now().date_naive()),
        Some(value) => parse_entry_date(value)
            .ok_or_else(|| ExerciseError::InvalidDateFormat(value.to_string())),
    }
}

#[async_trait]
impl ExerciseService for SeaOrmExerciseService {
    async fn add_exercise(
        &self,
        user_id: &str,
        input: ExerciseInput,
    ) -> Result<(User, ExerciseEntry), ExerciseError> {
        let duration = parse_duration(&input.duration)
            .ok_or_else(|| ExerciseError::InvalidDuration(input.duration.clone()))?;
        let date = resolve_date(input.date.as_deref())?;

        let entry = ExerciseEntry {
            description: input.description,
            duration,
            date,
        };

        if !self.store.push_exercise(user_id, &entry).await? {
            return Err(ExerciseError::UserNotFound(user_id.to_string()));
        }

        // Users are never deleted, so the owner is still there after the push.
        let user = self
            .store
            .get_user(user_id)
            .await?
            .ok_or_else(|| ExerciseError::UserNotFound(user_id.to_string()))?
            .user();

        info!(user_id = %user.id, date = %entry.date, "Exercise logged");
        Ok((user, entry))
    }

    async fn get_log(&self, user_id: &str, query: &LogQuery) -> Result<ExerciseLog, ExerciseError> {
        let doc = self
            .store
            .get_user(user_id)
            .await?
            .ok_or_else(|| ExerciseError::UserNotFound(user_id.to_string()))?;

        let entries = query.apply(&doc.exercises);
        debug!(
            user_id,
            total = doc.exercises.len(),
            returned = entries.len(),
            "Exercise log built"
        );

        Ok(ExerciseLog {
            user: doc.user(),
            entries,
        })
    }
}
