use axum::{Json, extract::State};
use std::sync::Arc;

use super::extract::Payload;
use super::validation::require_field;
use super::{ApiError, AppState, NewUserRequest, UserDto};

/// POST /api/exercise/new-user
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Payload(payload): Payload<NewUserRequest>,
) -> Result<Json<UserDto>, ApiError> {
    let username = require_field(payload.username.as_deref(), "username")?;

    let user = state.user_service().create_user(username).await?;

    Ok(Json(UserDto::from(user)))
}

/// GET /api/exercise/users
pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserDto>>, ApiError> {
    let users = state.user_service().list_users().await?;

    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}
