use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use crate::constants::messages;
use crate::services::{ExerciseError, UserError};

/// Every error leaves the API as a plain-text body.
#[derive(Debug)]
pub enum ApiError {
    MissingField(String),

    NotFound(String),

    DatabaseError(String),

    ValidationError(String),

    Conflict(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MissingField(field) => write!(f, "Missing field: {}", field),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            ApiError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::MissingField(field) => {
                (StatusCode::BAD_REQUEST, format!("{} is required", field))
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A database error occurred".to_string(),
                )
            }
            ApiError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        (status, message).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::DuplicateUsername(_) => {
                ApiError::Conflict(messages::USERNAME_TAKEN.to_string())
            }
            UserError::Store(msg) => ApiError::DatabaseError(msg),
        }
    }
}

impl From<ExerciseError> for ApiError {
    fn from(err: ExerciseError) -> Self {
        match err {
            ExerciseError::UserNotFound(_) => ApiError::NotFound(err.to_string()),
            ExerciseError::InvalidDateFormat(_)
            | ExerciseError::InvalidDuration(_)
            | ExerciseError::InvalidLimit(_) => ApiError::ValidationError(err.to_string()),
            ExerciseError::Store(msg) => ApiError::DatabaseError(msg),
        }
    }
}

impl ApiError {
    pub fn missing_field(field: &str) -> Self {
        ApiError::MissingField(field.to_string())
    }

    pub fn not_found() -> Self {
        ApiError::NotFound(messages::NOT_FOUND.to_string())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        ApiError::ValidationError(msg.into())
    }
}
