use axum::{
    Json,
    extract::{Query, State},
};
use std::sync::Arc;

use super::extract::Payload;
use super::validation::require_field;
use super::{AddExerciseRequest, AddedExerciseDto, ApiError, AppState, ExerciseLogDto, LogParams};
use crate::services::{ExerciseInput, LogQuery};

/// POST /api/exercise/add
/// `userId`, `description` and `duration` are checked before the store is touched.
pub async fn add_exercise(
    State(state): State<Arc<AppState>>,
    Payload(payload): Payload<AddExerciseRequest>,
) -> Result<Json<AddedExerciseDto>, ApiError> {
    let user_id = require_field(payload.user_id.as_deref(), "userId")?;
    let description = require_field(payload.description.as_deref(), "description")?;
    let duration = require_field(payload.duration.as_deref(), "duration")?;

    let input = ExerciseInput {
        description: description.to_string(),
        duration: duration.to_string(),
        date: payload.date.clone(),
    };

    let (user, entry) = state
        .exercise_service()
        .add_exercise(user_id, input)
        .await?;

    Ok(Json(AddedExerciseDto::new(user, entry)))
}

/// GET /api/exercise/log?userId=&from=&to=&limit=
pub async fn get_log(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LogParams>,
) -> Result<Json<ExerciseLogDto>, ApiError> {
    let user_id = require_field(params.user_id.as_deref(), "userId")?;

    let query = LogQuery::parse(
        params.from.as_deref(),
        params.to.as_deref(),
        params.limit.as_deref(),
    )?;

    let log = state.exercise_service().get_log(user_id, &query).await?;

    Ok(Json(ExerciseLogDto::from(log)))
}
